//! In-memory preference store.
//!
//! Used in tests and by hosts that do not want preferences to survive the
//! process.

use dashmap::DashMap;

use super::PreferenceStore;
use crate::shared::error::AppError;

/// Preference store backed by a concurrent in-memory map.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: DashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.remove(key);
        Ok(())
    }
}
