//! Translation of session events into navigations.
//!
//! The application shell subscribes to the credential store, drains every
//! pending event, and asks this module where to go. Keeping the decision
//! here lets the gateway stay free of routing and keeps it testable.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::guard::{self, AuthPhase};
use super::routes::{Query, REDIRECT_PARAM, RouteLocation, RouteName};
use crate::state::events::{SessionEvent, SignOutCause};

/// Navigation `event` calls for while the user is at `current`, as an href.
#[must_use]
pub fn navigation_for(event: &SessionEvent, current: &RouteLocation) -> Option<String> {
    match event {
        SessionEvent::SignedIn { .. } => guard::evaluate(AuthPhase::Authenticated, current, None)
            .redirect()
            .map(RouteLocation::href),
        SessionEvent::SignedOut { cause: SignOutCause::Requested } => {
            Some(RouteLocation::sign_in(Query::new()).href())
        }
        SessionEvent::SignedOut { cause: SignOutCause::Unauthorized } => {
            if current.name() == RouteName::SignIn {
                return None;
            }
            let query = Query::new().with(REDIRECT_PARAM, current.path.clone());
            Some(RouteLocation::sign_in(query).href())
        }
    }
}

/// Collapse runs of identical events, so a burst of rejected requests
/// produces one sign-out.
#[must_use]
pub fn coalesce(mut batch: Vec<SessionEvent>) -> Vec<SessionEvent> {
    batch.dedup();
    batch
}

/// Navigation for a drained batch: only the latest transition counts.
#[must_use]
pub fn navigation_for_batch(batch: Vec<SessionEvent>, current: &RouteLocation) -> Option<String> {
    coalesce(batch).last().and_then(|event| navigation_for(event, current))
}
