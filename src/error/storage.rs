//! Storage-related error types.

use thiserror::Error;

/// Errors from the durable result store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No platform data directory and none configured
    #[error("Could not determine a data directory for stored results")]
    NoDataDirectory,

    /// Key cannot be mapped to a storage location
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend-specific failure
    #[error("Storage error: {0}")]
    Other(String),
}

impl StorageError {
    /// Get a user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            StorageError::NoDataDirectory => {
                "Could not find a place to save the course. Set COURSEGEN_DATA_DIR and try again."
                    .to_string()
            }
            other => format!("The course could not be saved: {}", other),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io(_) => "E_STORE_IO",
            StorageError::NoDataDirectory => "E_STORE_NODIR",
            StorageError::InvalidKey(_) => "E_STORE_KEY",
            StorageError::Other(_) => "E_STORE_OTHER",
        }
    }
}
