//! Errors surfaced to callers of the request gateway.

/// Failure of a single request.
///
/// The gateway performs any session side effect first and then returns the
/// original failure, so callers stay in charge of user-facing messaging.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, timeout, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The device answered `401 Unauthorized`.
    #[error("unauthorized")]
    Unauthorized,

    /// The device answered with another non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Whether this is the `401` case that ends the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// HTTP status carried by the failure, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}
