//! In-memory result store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::ResultStore;

/// Result store that keeps values in memory.
///
/// Clones share the same underlying map, so a test can keep a handle while
/// the flow owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail.
    pub fn set_save_should_fail(&self, fail: bool) {
        *self.save_should_fail.lock().unwrap() = fail;
    }

    /// Read a value synchronously.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResultStore for InMemoryStore {
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(StorageError::Other("save failed (mock)".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        store.save("currentCourse", "<html></html>").await.unwrap();
        assert_eq!(
            store.load("currentCourse").await.unwrap(),
            Some("<html></html>".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_save_failure() {
        let store = InMemoryStore::new();
        store.set_save_should_fail(true);
        assert!(store.save("k", "v").await.is_err());
        assert!(store.get("k").is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryStore::new();
        let handle = store.clone();
        store.save("k", "v").await.unwrap();
        assert_eq!(handle.get("k"), Some("v".to_string()));
    }
}
