//! UI theme value object.

use serde::{Deserialize, Serialize};

/// UI color scheme, persisted between sessions as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Convert from persisted string representation.
    ///
    /// Unknown values fall back to the light theme.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Convert to persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite scheme.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
