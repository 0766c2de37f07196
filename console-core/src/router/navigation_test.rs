use super::*;

fn signed_in() -> SessionEvent {
    SessionEvent::SignedIn { username: "admin".to_owned() }
}

fn unauthorized() -> SessionEvent {
    SessionEvent::SignedOut { cause: SignOutCause::Unauthorized }
}

fn requested() -> SessionEvent {
    SessionEvent::SignedOut { cause: SignOutCause::Requested }
}

// =============================================================
// navigation_for
// =============================================================

#[test]
fn unauthorized_sends_user_to_sign_in_with_current_path() {
    let current = RouteLocation::parse("/config/mqtt?tab=1");
    assert_eq!(
        navigation_for(&unauthorized(), &current),
        Some("/auth/sign/in?redirect=%2Fconfig%2Fmqtt".to_owned())
    );
}

#[test]
fn unauthorized_at_root_still_carries_root() {
    assert_eq!(
        navigation_for(&unauthorized(), &RouteLocation::root()),
        Some("/auth/sign/in?redirect=%2F".to_owned())
    );
}

#[test]
fn unauthorized_on_sign_in_stays_put() {
    let current = RouteLocation::parse("/auth/sign/in?redirect=/config/wifi");
    assert_eq!(navigation_for(&unauthorized(), &current), None);
}

#[test]
fn requested_sign_out_goes_to_plain_sign_in() {
    let current = RouteLocation::parse("/system/info");
    assert_eq!(navigation_for(&requested(), &current), Some("/auth/sign/in".to_owned()));
}

#[test]
fn sign_in_consumes_redirect_intent() {
    let current = RouteLocation::parse("/auth/sign/in?redirect=%2Fconfig%2Fwifi");
    assert_eq!(navigation_for(&signed_in(), &current), Some("/config/wifi".to_owned()));
}

#[test]
fn sign_in_without_intent_goes_home() {
    let current = RouteLocation::parse("/auth/sign/in");
    assert_eq!(navigation_for(&signed_in(), &current), Some("/".to_owned()));
}

#[test]
fn sign_in_elsewhere_does_not_navigate() {
    let current = RouteLocation::parse("/config/ntp");
    assert_eq!(navigation_for(&signed_in(), &current), None);
}

// =============================================================
// Batches
// =============================================================

#[test]
fn burst_of_unauthorized_collapses_to_one() {
    let batch = vec![unauthorized(), unauthorized(), unauthorized()];
    assert_eq!(coalesce(batch), [unauthorized()]);
}

#[test]
fn distinct_events_are_kept_in_order() {
    let batch = vec![unauthorized(), signed_in(), signed_in(), requested()];
    assert_eq!(coalesce(batch), [unauthorized(), signed_in(), requested()]);
}

#[test]
fn batch_navigation_uses_latest_event() {
    let current = RouteLocation::parse("/auth/sign/in?redirect=/system/info");
    let batch = vec![unauthorized(), unauthorized(), signed_in()];
    assert_eq!(navigation_for_batch(batch, &current), Some("/system/info".to_owned()));
    assert_eq!(navigation_for_batch(Vec::new(), &current), None);
}
