//! Session transition events.
//!
//! ARCHITECTURE
//! ============
//! The credential store publishes every transition here instead of driving
//! navigation itself. The application shell subscribes and turns events
//! into route changes (see `router::navigation`), which keeps the store and
//! the request gateway free of any routing dependency.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::Arc;

use futures::FutureExt;
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use parking_lot::Mutex;

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutCause {
    /// The user asked to sign out.
    Requested,
    /// The device rejected the stored credentials with `401`.
    Unauthorized,
}

/// A transition of the credential store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn { username: String },
    SignedOut { cause: SignOutCause },
}

/// Receiving half handed to a subscriber.
pub type SessionEventStream = UnboundedReceiver<SessionEvent>;

/// Fan-out of session events to any number of subscribers.
///
/// Subscribers whose receiver was dropped are pruned on the next emit.
#[derive(Clone, Debug, Default)]
pub struct SessionEvents {
    subscribers: Arc<Mutex<Vec<UnboundedSender<SessionEvent>>>>,
}

impl SessionEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. Only events emitted afterwards are seen.
    #[must_use]
    pub fn subscribe(&self) -> SessionEventStream {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber.
    pub fn emit(&self, event: &SessionEvent) {
        self.subscribers
            .lock()
            .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
    }

    /// Number of subscribers still registered.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

/// Collect `first` plus every event already queued on `stream`, without
/// waiting for new ones.
pub fn drain_pending(stream: &mut SessionEventStream, first: SessionEvent) -> Vec<SessionEvent> {
    let mut batch = vec![first];
    while let Some(Some(event)) = stream.next().now_or_never() {
        batch.push(event);
    }
    batch
}
