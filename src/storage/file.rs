//! File-backed key-value store
//!
//! Each key maps to one file under the store directory, written atomically.

use std::fs;
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::file_io::{read_string, write_string_atomic};
use super::KeyValueStore;

/// Key-value store that keeps one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> FintrackResult<PathBuf> {
        // Keys become file names, so path separators are not allowed.
        if key.is_empty() || key.contains('/') || key.contains('\\') || key == "." || key == ".." {
            return Err(FintrackError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FintrackResult<Option<String>> {
        read_string(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> FintrackResult<()> {
        write_string_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> FintrackResult<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .map_err(|e| FintrackError::Storage(format!("Failed to remove {}: {}", path.display(), e)))?;
        Ok(true)
    }
}
