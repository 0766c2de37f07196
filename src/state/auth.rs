//! Auth-session state for the signed-in device user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the credential store into a signal so the nav bar and protected
//! views re-render on sign-in and sign-out. The store stays the source of
//! truth; this is refreshed from its events.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use console_core::state::auth::CredentialStore;
use console_core::state::events::SessionEvent;

/// Who is signed in, and whether a sign-in attempt is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub username: Option<String>,
    pub pending: bool,
}

impl AuthState {
    /// Snapshot of `store`.
    pub fn from_store(store: &CredentialStore) -> Self {
        Self { username: store.username(), pending: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }

    /// Apply a store transition. Any event ends a pending attempt.
    pub fn apply(&mut self, event: &SessionEvent) {
        self.pending = false;
        match event {
            SessionEvent::SignedIn { username } => self.username = Some(username.clone()),
            SessionEvent::SignedOut { .. } => self.username = None,
        }
    }
}
