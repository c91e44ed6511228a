//! Error handling for coursegen.
//!
//! Failures fall into four groups, each rendered into the same status
//! region:
//!
//! | Source | Type | User message |
//! |--------|------|--------------|
//! | Transport failure | [`NetworkError`] | Generic retry message |
//! | Non-success response | [`NetworkError::HttpStatus`] | Server `detail`, else status code |
//! | Stream failure or error event | [`StreamError`] | Event text verbatim, or generic |
//! | Result persistence | [`StorageError`] | Storage message |
//!
//! Malformed event lines are logged and skipped; they never reach the user.

mod course_error;
mod network;
mod result;
mod storage;
mod stream;

pub use course_error::CourseError;
pub use network::{extract_detail, NetworkError, GENERIC_RETRY_MESSAGE};
pub use result::CourseResult;
pub use storage::StorageError;
pub use stream::StreamError;
