//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated before every route transition with the session phase read
//! from the credential store at that moment. The decision is pure; the
//! application shell performs the redirect.
//!
//! DESIGN
//! ======
//! The session is a two-state machine (`AuthPhase`). The two redirect rules
//! are arms of one exhaustive match on `(phase, target)`, so "anonymous
//! outside the allow-list" and "authenticated on sign-in" cannot both apply.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{REDIRECT_PARAM, ROOT_PATH, RouteLocation, RouteName};

/// Whether a session is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticated,
}

impl AuthPhase {
    #[must_use]
    pub fn from_logged_in(logged_in: bool) -> Self {
        if logged_in { Self::Authenticated } else { Self::Anonymous }
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(RouteLocation),
}

impl GuardDecision {
    /// Redirect target, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<&RouteLocation> {
        match self {
            Self::Proceed => None,
            Self::Redirect(location) => Some(location),
        }
    }
}

/// Decide whether navigating from `from` to `to` may proceed.
#[must_use]
pub fn evaluate(phase: AuthPhase, to: &RouteLocation, from: Option<&RouteLocation>) -> GuardDecision {
    let target = to.name();
    let decision = match (phase, target) {
        (AuthPhase::Anonymous, name) if !name.is_public() => GuardDecision::Redirect(sign_in_for(to, name)),
        (AuthPhase::Authenticated, RouteName::SignIn) => GuardDecision::Redirect(after_sign_in(to)),
        (AuthPhase::Anonymous | AuthPhase::Authenticated, _) => GuardDecision::Proceed,
    };
    if let GuardDecision::Redirect(location) = &decision {
        log::debug!(
            "guard: {} -> {} redirected to {location} ({phase:?})",
            from.map_or_else(|| "(initial)".to_owned(), RouteLocation::href),
            to.href()
        );
    }
    decision
}

/// Sign-in location that brings an anonymous user back to `to` afterwards.
fn sign_in_for(to: &RouteLocation, target: RouteName) -> RouteLocation {
    let mut query = to.query.clone();
    if to.path != ROOT_PATH && target != RouteName::SignIn {
        query.set(REDIRECT_PARAM, to.path.clone());
    }
    RouteLocation::sign_in(query)
}

/// Where an authenticated visit to sign-in goes: the carried redirect, or
/// the root.
fn after_sign_in(to: &RouteLocation) -> RouteLocation {
    match to.query.get(REDIRECT_PARAM) {
        Some(target) if is_local_path(target) => RouteLocation::parse(target),
        Some(target) => {
            log::warn!("guard: ignoring non-local redirect {target:?}");
            RouteLocation::root()
        }
        None => RouteLocation::root(),
    }
}

/// Absolute path on this origin. Rejects `//host` and `/\host`, which
/// browsers treat as another origin, and any control character: URL
/// parsing strips tab and newline, so `/\t/host` would become `//host`.
fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.starts_with("/\\")
        && !target.chars().any(char::is_control)
}
