//! Streaming-related error types.
//!
//! This module defines errors that occur after the response headers arrived,
//! while reading and interpreting the NDJSON event stream.

use std::fmt;

use super::network::GENERIC_RETRY_MESSAGE;

/// Stream-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    /// Reading the next chunk failed.
    ReadFailed {
        message: String,
    },

    /// Backend reported an error event.
    BackendError {
        message: String,
    },

    /// A line could not be decoded as an event.
    MalformedLine {
        line: String,
        message: String,
    },

    /// Event type this client does not understand.
    UnknownEventType {
        event_type: String,
    },

    /// The stream ended without an error or result event.
    Incomplete,
}

impl StreamError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StreamError::ReadFailed { .. } | StreamError::Incomplete
        )
    }

    /// Get a user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::ReadFailed { .. } => GENERIC_RETRY_MESSAGE.to_string(),
            StreamError::BackendError { message } => message.clone(),
            StreamError::MalformedLine { .. } => {
                "Received invalid data from the server. Please try again.".to_string()
            }
            StreamError::UnknownEventType { event_type } => {
                format!(
                    "Received unknown message type: {}. Your client may need to be updated.",
                    event_type
                )
            }
            StreamError::Incomplete => {
                "The server closed the stream before the course was ready.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::ReadFailed { .. } => "E_STREAM_READ",
            StreamError::BackendError { .. } => "E_STREAM_BACKEND",
            StreamError::MalformedLine { .. } => "E_STREAM_JSON",
            StreamError::UnknownEventType { .. } => "E_STREAM_UNKNOWN",
            StreamError::Incomplete => "E_STREAM_INCOMPLETE",
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::ReadFailed { message } => {
                write!(f, "Stream read failed: {}", message)
            }
            StreamError::BackendError { message } => {
                write!(f, "Backend error: {}", message)
            }
            StreamError::MalformedLine { line, message } => {
                write!(f, "Malformed event line {:?}: {}", line, message)
            }
            StreamError::UnknownEventType { event_type } => {
                write!(f, "Unknown event type: {:?}", event_type)
            }
            StreamError::Incomplete => write!(f, "Stream ended without a result"),
        }
    }
}

impl std::error::Error for StreamError {}
