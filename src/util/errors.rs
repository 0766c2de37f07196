//! User-facing text for request failures.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use console_core::net::error::ApiError;

/// Longest slice of a response body quoted back to the user.
const MAX_BODY_CHARS: usize = 120;

/// One sentence describing `err` for a banner or form message.
pub fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Cannot reach the device. Check the connection and try again.".to_owned(),
        ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
        ApiError::Status { status, body } => {
            let summary = if *status >= 500 {
                format!("The device failed to process the request (HTTP {status}).")
            } else {
                format!("The device rejected the request (HTTP {status}).")
            };
            match body_excerpt(body) {
                Some(excerpt) => format!("{summary} {excerpt}"),
                None => summary,
            }
        }
        ApiError::Decode(_) => "The device sent an unexpected response.".to_owned(),
        ApiError::Encode(_) => "The request could not be prepared.".to_owned(),
    }
}

/// Message for a rejected sign-in; a `401` there means bad credentials,
/// not an expired session.
pub fn describe_sign_in_error(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid username or password.".to_owned()
    } else {
        describe_error(err)
    }
}

fn body_excerpt(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        return None;
    }
    let mut excerpt: String = trimmed.chars().take(MAX_BODY_CHARS).collect();
    if trimmed.chars().count() > MAX_BODY_CHARS {
        excerpt.push('…');
    }
    Some(excerpt)
}
