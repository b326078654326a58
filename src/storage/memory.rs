//! In-memory key-value store
//!
//! Backend for unit tests: cloneable, so a test can hold a handle to the same
//! map the store under test writes to and assert on what was persisted.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FintrackError, FintrackResult};

use super::KeyValueStore;

/// Key-value store backed by a shared in-memory map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> FintrackResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.len())
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> FintrackResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FintrackResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FintrackResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FintrackResult<bool> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(entries.remove(key).is_some())
    }
}
