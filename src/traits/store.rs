//! Result store trait abstraction.
//!
//! The final course text is handed to a durable key-value store so a later
//! invocation (or another tool) can retrieve it.

use async_trait::async_trait;

use crate::error::StorageError;

/// Durable storage for finished results.
///
/// # Example
///
/// ```ignore
/// use coursegen::traits::ResultStore;
///
/// async fn stash<S: ResultStore>(store: &S, html: &str) -> Result<(), StorageError> {
///     store.save("currentCourse", html).await?;
///     assert_eq!(store.load("currentCourse").await?.as_deref(), Some(html));
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load the value stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
}
