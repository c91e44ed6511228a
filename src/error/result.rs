//! Result type alias for coursegen operations.

use super::course_error::CourseError;

/// Type alias for Results using CourseError.
///
/// # Example
///
/// ```ignore
/// use coursegen::error::CourseResult;
///
/// async fn fetch(client: &CourseClient) -> CourseResult<LineStream> {
///     client.stream_lines(&request).await
/// }
/// ```
pub type CourseResult<T> = Result<T, CourseError>;
