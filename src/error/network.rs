//! Network-related error types.
//!
//! This module defines errors that occur while sending the chat request,
//! before any of the response stream has been read.

use std::fmt;

/// Message shown for any transport-level failure.
pub const GENERIC_RETRY_MESSAGE: &str =
    "Something went wrong. Please check your connection and try again.";

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        message: String,
    },

    /// Non-2xx response before streaming began.
    ///
    /// `detail` holds the server's `detail` field when the body carried one.
    HttpStatus {
        status: u16,
        detail: Option<String>,
    },

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-facing error message.
    ///
    /// Server-provided detail text is shown verbatim; every transport
    /// failure collapses to [`GENERIC_RETRY_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::HttpStatus { status, detail } => match detail {
                Some(detail) => detail.clone(),
                None => format!("HTTP error! status: {}", status),
            },
            NetworkError::ConnectionFailed { .. }
            | NetworkError::Timeout { .. }
            | NetworkError::Other { .. } => GENERIC_RETRY_MESSAGE.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { message } => {
                write!(f, "Request timed out: {}", message)
            }
            NetworkError::HttpStatus { status, detail } => match detail {
                Some(detail) => write!(f, "HTTP {} error: {}", status, detail),
                None => write!(f, "HTTP {} error", status),
            },
            NetworkError::Other { message } => {
                write!(f, "Network error: {}", message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Extract the `detail` string from an error response body.
///
/// Returns `None` when the body is not JSON, has no `detail`, or the
/// `detail` is not a non-empty string.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
}
