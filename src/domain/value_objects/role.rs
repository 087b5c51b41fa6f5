//! Effective user roles.
//!
//! The backend exposes several overlapping role signals; the permission
//! service reduces them to one of these values. String signals are parsed
//! case-insensitively so `"Admin"` and `"admin"` resolve identically.

use serde::{Deserialize, Serialize};

/// Role name the backend uses for administrators.
pub const ROLE_ADMIN: &str = "admin";
/// Role name the backend uses for librarians.
pub const ROLE_LIBRARIAN: &str = "bibliothecaire";
/// Default role for authenticated users without any recognized signal.
pub const ROLE_STUDENT: &str = "etudiant";

/// A user's effective role after signal reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Not authenticated
    Guest,
    /// Full document-management capabilities
    Admin,
    /// Recognized librarian account (currently read-only, like students)
    Librarian,
    /// Default authenticated role
    Student,
    /// Any other role string the backend reports
    Other(String),
}

impl Role {
    /// Parse a role signal string from any of the backend fields.
    pub fn from_signal(signal: &str) -> Self {
        match signal.to_lowercase().as_str() {
            ROLE_ADMIN => Self::Admin,
            ROLE_LIBRARIAN => Self::Librarian,
            ROLE_STUDENT => Self::Student,
            _ => Self::Other(signal.to_string()),
        }
    }

    /// Role name as the backend spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Guest => "guest",
            Self::Admin => ROLE_ADMIN,
            Self::Librarian => ROLE_LIBRARIAN,
            Self::Student => ROLE_STUDENT,
            Self::Other(s) => s,
        }
    }

    /// French display label shown next to the account.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Guest => "Invité",
            Self::Admin => "Administrateur",
            Self::Librarian => "Bibliothécaire",
            Self::Student | Self::Other(_) => "Utilisateur",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn is_librarian(&self) -> bool {
        matches!(self, Self::Librarian)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
