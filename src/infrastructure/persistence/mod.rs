//! Preference Persistence
//!
//! Key-value persistence for session and UI preferences, the browser
//! localStorage analogue. The contract is "read at init, write on
//! change": the store rehydrates from here once at construction and
//! writes back as an effect of the relevant state transitions.

mod json_file;
mod memory;

pub use json_file::JsonFilePreferenceStore;
pub use memory::MemoryPreferenceStore;

use crate::shared::error::AppError;

/// Well-known preference keys.
pub mod keys {
    /// Persisted theme name ("light"/"dark")
    pub const THEME: &str = "theme";
    /// Persisted user session snapshot (JSON)
    pub const USER: &str = "user";
}

/// String key-value persistence boundary.
///
/// Implementations must be safe to share across threads; the store calls
/// them from state-transition effects and never from the reducer itself.
pub trait PreferenceStore: Send + Sync {
    /// Read a value by key.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove a value; removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
