//! JSON-file preference store.
//!
//! Persists the preference map as a single JSON object on disk. Every
//! write rewrites the whole file; the map is small (a theme string and a
//! user snapshot) so this stays cheap.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::PreferenceStore;
use crate::shared::error::AppError;

/// Preference store backed by a JSON file.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFilePreferenceStore {
    /// Open a store at the given path, loading any existing contents.
    ///
    /// A missing file starts the store empty; a corrupt file is treated
    /// as empty with a warning rather than failing construction, since
    /// preference loss must never block application startup.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        "Preference file {} is corrupt ({}), starting empty",
                        path.display(),
                        err
                    );
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json).map_err(|err| {
            AppError::Storage(format!("cannot write {}: {}", self.path.display(), err))
        })
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
