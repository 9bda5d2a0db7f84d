//! Error types for the application.
//!
//! - [`ApiError`] - requests to the file server
//! - [`StorageError`] - localStorage session persistence
//! - [`LoginFailure`] - why a login attempt produced no session

use thiserror::Error;

/// Failure talking to the file server.
///
/// Every variant means "operation failed" to the user; the distinction only
/// reaches the console log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Failed to build the request (form data, JSON body).
    #[error("failed to build request: {0}")]
    RequestBuild(String),
    /// Transport failed (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// localStorage errors for the session flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to save to localStorage")]
    WriteFailed,
    #[error("failed to remove from localStorage")]
    RemoveFailed,
}

/// A login attempt that failed before the password could be judged, or
/// whose accepted session could not be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginFailure {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session not stored: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Http(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let serde_err = serde_json::from_str::<u64>("nope").unwrap_err();
        let err = ApiError::from(gloo_net::Error::SerdeError(serde_err));
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_login_failure_display_keeps_cause() {
        let err = LoginFailure::from(ApiError::Http(502));
        assert_eq!(err.to_string(), "HTTP error: 502");

        let err = LoginFailure::from(StorageError::WriteFailed);
        assert_eq!(
            err.to_string(),
            "session not stored: failed to save to localStorage"
        );
    }
}
