use super::*;

#[test]
fn network_failure_mentions_connection() {
    let text = describe_error(&ApiError::Network("connection refused".to_owned()));
    assert!(text.contains("Cannot reach the device"));
    assert!(!text.contains("refused"));
}

#[test]
fn unauthorized_means_expired_session_outside_sign_in() {
    assert_eq!(describe_error(&ApiError::Unauthorized), "Your session has expired. Please sign in again.");
    assert_eq!(describe_sign_in_error(&ApiError::Unauthorized), "Invalid username or password.");
}

#[test]
fn client_status_quotes_plain_body() {
    let err = ApiError::Status { status: 400, body: "Invalid hostname\n".to_owned() };
    assert_eq!(describe_error(&err), "The device rejected the request (HTTP 400). Invalid hostname");
}

#[test]
fn server_status_skips_html_body() {
    let err = ApiError::Status { status: 500, body: "<html>oops</html>".to_owned() };
    assert_eq!(describe_error(&err), "The device failed to process the request (HTTP 500).");
}

#[test]
fn long_body_is_truncated() {
    let err = ApiError::Status { status: 422, body: "x".repeat(500) };
    let text = describe_error(&err);
    assert!(text.ends_with('…'));
    assert!(text.chars().count() < 200);
}

#[test]
fn sign_in_other_failures_use_generic_text() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(describe_sign_in_error(&err), describe_error(&err));
}
