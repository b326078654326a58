//! Application-level UI flags
//!
//! Holds the theme preference and the busy indicator. The theme flag is
//! persisted; the loading flag lives only for the process lifetime.

use crate::error::{FintrackError, FintrackResult};
use crate::storage::{keys, KeyValueStore};

/// UI flags: theme preference and loading indicator
#[derive(Debug)]
pub struct AppState<S: KeyValueStore> {
    dark_mode: bool,
    loading: bool,
    storage: S,
}

impl<S: KeyValueStore> AppState<S> {
    /// Create an AppState with both flags off
    pub fn new(storage: S) -> Self {
        Self {
            dark_mode: false,
            loading: false,
            storage,
        }
    }

    /// Whether dark mode is enabled
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Whether a busy indicator should be shown
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Flip the theme preference and persist the new value
    ///
    /// Returns the new value. The in-memory flag is already flipped if the
    /// storage write fails.
    pub fn toggle_theme(&mut self) -> FintrackResult<bool> {
        self.dark_mode = !self.dark_mode;
        self.storage
            .set(keys::DARK_MODE, if self.dark_mode { "true" } else { "false" })?;
        Ok(self.dark_mode)
    }

    /// Set the loading flag; in-memory only, never persisted
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Restore the theme preference from storage
    ///
    /// An absent key leaves the current flag untouched; malformed stored
    /// text is an error.
    pub fn load(&mut self) -> FintrackResult<()> {
        if let Some(text) = self.storage.get(keys::DARK_MODE)? {
            self.dark_mode = text.trim().parse::<bool>().map_err(|_| {
                FintrackError::Storage(format!("Invalid {} value: {:?}", keys::DARK_MODE, text))
            })?;
        }
        Ok(())
    }
}
