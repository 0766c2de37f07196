use futures::FutureExt;
use futures::StreamExt;
use futures::executor::block_on;

use super::*;
use crate::state::events::SessionEvent;
use crate::testing::{ScriptedTransport, gateway, signed_in_store, store};

// =============================================================
// Outgoing interceptor
// =============================================================

#[test]
fn signed_in_request_carries_stored_credentials() {
    let store = signed_in_store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, "{}"));

    block_on(gw.send(HttpRequest::new(Method::Get, gw.url("outputs")))).unwrap();

    let sent = gw.transport().last();
    assert_eq!(sent.credentials, Some(Credentials::new("admin", "secret")));
    assert_eq!(sent.url, "/api/v1/outputs");
}

#[test]
fn anonymous_request_carries_nothing() {
    let (store, _, _) = store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, "{}"));

    block_on(gw.send(HttpRequest::new(Method::Get, gw.url("system/info")))).unwrap();

    assert_eq!(gw.transport().last().credentials, None);
}

#[test]
fn explicit_credentials_are_not_replaced() {
    let store = signed_in_store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, "OK"));

    block_on(gw.verify(&Credentials::new("other", "pw"))).unwrap();

    let sent = gw.transport().last();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "/api/v1/auth");
    assert_eq!(sent.credentials, Some(Credentials::new("other", "pw")));
}

#[test]
fn credentials_are_read_on_every_request() {
    let (store, _, _) = store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, "{}").reply(200, "{}"));

    block_on(gw.post("system/restart")).unwrap();
    store.set_credentials(Credentials::new("admin", "pw"));
    block_on(gw.post("system/restart")).unwrap();

    let sent = gw.transport().sent.borrow();
    assert_eq!(sent[0].credentials, None);
    assert_eq!(sent[1].credentials, Some(Credentials::new("admin", "pw")));
}

// =============================================================
// Incoming interceptor
// =============================================================

#[test]
fn success_passes_response_through() {
    let store = signed_in_store();
    let gw = gateway(&store, ScriptedTransport::default().reply(204, ""));

    let response = block_on(gw.send(HttpRequest::new(Method::Put, gw.url("ntp")))).unwrap();

    assert_eq!(response, HttpResponse { status: 204, body: String::new() });
    assert!(store.is_logged_in());
}

#[test]
fn network_failure_propagates_without_session_change() {
    let store = signed_in_store();
    let mut events = store.subscribe();
    let gw = gateway(&store, ScriptedTransport::default().fail("connection refused"));

    let err = block_on(gw.post("outputs/switch")).unwrap_err();

    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
    assert!(store.is_logged_in());
    assert_eq!(events.next().now_or_never(), None);
}

#[test]
fn unauthorized_ends_session_and_still_fails() {
    let store = signed_in_store();
    let mut events = store.subscribe();
    let gw = gateway(&store, ScriptedTransport::default().reply(401, "Unauthorized"));

    let err = block_on(gw.get_json::<serde_json::Value>("outputs")).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!store.is_logged_in());
    assert!(store.credentials().is_none());
    assert_eq!(
        events.next().now_or_never(),
        Some(Some(SessionEvent::SignedOut { cause: SignOutCause::Unauthorized }))
    );
}

#[test]
fn unauthorized_on_anonymous_request_still_announces() {
    let (store, _, _) = store();
    let mut events = store.subscribe();
    let gw = gateway(&store, ScriptedTransport::default().reply(401, ""));

    let err = block_on(gw.get_json::<serde_json::Value>("hostname")).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(
        events.next().now_or_never(),
        Some(Some(SessionEvent::SignedOut { cause: SignOutCause::Unauthorized }))
    );
}

#[test]
fn rejected_verification_keeps_session() {
    let store = signed_in_store();
    let mut events = store.subscribe();
    let gw = gateway(&store, ScriptedTransport::default().reply(401, ""));

    let err = block_on(gw.verify(&Credentials::new("admin", "wrong"))).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(store.is_logged_in());
    assert_eq!(events.next().now_or_never(), None);
}

#[test]
fn other_statuses_propagate_without_session_change() {
    for status in [400_u16, 403, 404, 500, 503] {
        let store = signed_in_store();
        let gw = gateway(&store, ScriptedTransport::default().reply(status, "nope"));

        let err = block_on(gw.put_json("hostname", &serde_json::json!({"hostname": "pdu"}))).unwrap_err();

        assert_eq!(err, ApiError::Status { status, body: "nope".to_owned() });
        assert_eq!(err.status(), Some(status));
        assert!(store.is_logged_in(), "status {status} must not end the session");
    }
}

#[test]
fn sign_in_through_gateway_stores_pair_on_success() {
    let (store, _, _) = store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, "OK"));

    block_on(store.sign_in(&gw, Credentials::new("admin", "admin"))).unwrap();

    assert_eq!(store.credentials(), Some(Credentials::new("admin", "admin")));
}

#[test]
fn sign_in_through_gateway_rejected_stays_anonymous() {
    let (store, _, _) = store();
    let mut events = store.subscribe();
    let gw = gateway(&store, ScriptedTransport::default().reply(401, "Unauthorized"));

    let err = block_on(store.sign_in(&gw, Credentials::new("admin", "bad"))).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!store.is_logged_in());
    assert_eq!(events.next().now_or_never(), None);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn get_json_decodes_body() {
    let store = signed_in_store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, r#"{"hostname":"pdu-01"}"#));

    let value: serde_json::Value = block_on(gw.get_json("hostname")).unwrap();

    assert_eq!(value["hostname"], "pdu-01");
}

#[test]
fn get_json_reports_decode_failure() {
    let store = signed_in_store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, "<html>"));

    let err = block_on(gw.get_json::<serde_json::Value>("hostname")).unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert!(store.is_logged_in());
}

#[test]
fn post_json_sends_serialized_body() {
    let store = signed_in_store();
    let gw = gateway(&store, ScriptedTransport::default().reply(200, ""));

    block_on(gw.post_json("outputs/switch", &serde_json::json!({"output": 2, "state": true}))).unwrap();

    let sent = gw.transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.body.as_deref(), Some(r#"{"output":2,"state":true}"#));
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Put.to_string(), "PUT");
    assert_eq!(Method::Post.to_string(), "POST");
}
