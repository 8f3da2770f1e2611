//! Floor plan client errors

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never got a response (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not decode into the expected model
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Plan or route does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload refused by the backend (bad size, malformed items)
    #[error("Rejected by backend: {0}")]
    Rejected(String),

    /// Plan changed on the backend since it was loaded
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success status
    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },
}

impl ClientError {
    /// Map a non-success status and its body text to an error
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::Rejected(body),
            StatusCode::CONFLICT => Self::Conflict(body),
            _ => Self::Backend {
                status: status.as_u16(),
                message: body,
            },
        }
    }

    /// Whether retrying the same request later may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Backend { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "width".into()),
            ClientError::Rejected(msg) if msg == "width"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::CONFLICT, "stale".into()),
            ClientError::Conflict(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream".into()),
            ClientError::Backend { status: 502, .. }
        ));
    }

    #[test]
    fn test_only_server_failures_are_retryable() {
        let down = ClientError::from_status(StatusCode::SERVICE_UNAVAILABLE, "down".into());
        assert!(down.is_retryable());
        assert_eq!(down.to_string(), "Backend error 503: down");

        let rejected = ClientError::from_status(StatusCode::BAD_REQUEST, "size".into());
        assert!(!rejected.is_retryable());
    }
}
