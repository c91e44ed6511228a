//! File-based result store adapter.
//!
//! Each key maps to `<dir>/<key>.html`. Writes go to a temporary sibling
//! first and are renamed into place, so a reader never sees a partial file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::ResultStore;

/// Directory name under the platform data dir.
const APP_DIR: &str = "coursegen";

/// Extension for stored results.
const EXTENSION: &str = "html";

/// Result store backed by files in a directory.
#[derive(Debug, Clone)]
pub struct FileResultStore {
    dir: PathBuf,
}

impl FileResultStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store in the platform data directory.
    pub fn in_data_dir() -> Result<Self, StorageError> {
        Self::default_dir()
            .map(Self::new)
            .ok_or(StorageError::NoDataDirectory)
    }

    /// The platform data directory for stored results, e.g.
    /// `~/.local/share/coursegen` on Linux.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR))
    }

    /// The directory this store writes to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file a key is stored in.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

async fn write_then_rename(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    tokio::fs::write(tmp_path, value).await?;
    tokio::fs::rename(tmp_path, path).await
}

#[async_trait]
impl ResultStore for FileResultStore {
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp_path = self.dir.join(format!(".{}.{}.tmp", key, EXTENSION));
        if let Err(e) = write_then_rename(&tmp_path, &path, value).await {
            tokio::fs::remove_file(&tmp_path).await.ok();
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), bytes = value.len(), "Stored result");
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
