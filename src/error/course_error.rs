//! Unified error type for coursegen.
//!
//! `CourseError` consolidates the network, stream and storage errors so the
//! submission flow can log and render any failure the same way.

use std::fmt;

use super::network::NetworkError;
use super::storage::StorageError;
use super::stream::StreamError;

/// Unified error type for coursegen operations.
#[derive(Debug)]
pub enum CourseError {
    /// Request could not be sent or was rejected.
    Network(NetworkError),

    /// Response stream failed after it started.
    Stream(StreamError),

    /// Result could not be persisted or loaded.
    Storage(StorageError),

    /// Request body could not be serialized.
    Serialization(String),
}

impl CourseError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            CourseError::Network(err) => err.is_retryable(),
            CourseError::Stream(err) => err.is_retryable(),
            CourseError::Storage(_) => false,
            CourseError::Serialization(_) => false,
        }
    }

    /// Get the message rendered in the status region.
    pub fn user_message(&self) -> String {
        match self {
            CourseError::Network(err) => err.user_message(),
            CourseError::Stream(err) => err.user_message(),
            CourseError::Storage(err) => err.user_message(),
            CourseError::Serialization(_) => {
                "The request could not be prepared. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CourseError::Network(err) => err.error_code(),
            CourseError::Stream(err) => err.error_code(),
            CourseError::Storage(err) => err.error_code(),
            CourseError::Serialization(_) => "E_REQ_SERIALIZE",
        }
    }
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseError::Network(err) => write!(f, "{}", err),
            CourseError::Stream(err) => write!(f, "{}", err),
            CourseError::Storage(err) => write!(f, "{}", err),
            CourseError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CourseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CourseError::Network(err) => Some(err),
            CourseError::Stream(err) => Some(err),
            CourseError::Storage(err) => Some(err),
            CourseError::Serialization(_) => None,
        }
    }
}

impl From<NetworkError> for CourseError {
    fn from(err: NetworkError) -> Self {
        CourseError::Network(err)
    }
}

impl From<StreamError> for CourseError {
    fn from(err: StreamError) -> Self {
        CourseError::Stream(err)
    }
}

impl From<StorageError> for CourseError {
    fn from(err: StorageError) -> Self {
        CourseError::Storage(err)
    }
}

impl From<serde_json::Error> for CourseError {
    fn from(err: serde_json::Error) -> Self {
        CourseError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_RETRY_MESSAGE;

    #[test]
    fn test_network_delegation() {
        let err: CourseError = NetworkError::HttpStatus {
            status: 422,
            detail: Some("topic required".to_string()),
        }
        .into();
        assert_eq!(err.user_message(), "topic required");
        assert_eq!(err.error_code(), "E_NET_HTTP");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_stream_delegation() {
        let err: CourseError = StreamError::ReadFailed {
            message: "reset".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), GENERIC_RETRY_MESSAGE);
        assert!(err.is_retryable());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_storage_delegation() {
        let err: CourseError = StorageError::InvalidKey("a/b".to_string()).into();
        assert_eq!(err.error_code(), "E_STORE_KEY");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: CourseError = json_err.into();
        assert!(matches!(err, CourseError::Serialization(_)));
        assert_eq!(err.error_code(), "E_REQ_SERIALIZE");
    }
}
