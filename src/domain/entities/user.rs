//! User entity.
//!
//! Mirrors the account payload returned by the auth backend. Several
//! overlapping fields can each indicate an administrative account
//! (`is_staff`, `is_superuser`, `profile.user_type`, `role`, `user_type`);
//! the permission service reconciles them with a fixed precedence, so this
//! entity carries them all verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile record nested under a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account type as the profile endpoint reports it ("admin",
    /// "bibliothecaire", "etudiant", ...)
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Represents a user account as reported by the backend.
///
/// The core never writes this entity; it is replaced wholesale from
/// gateway responses or the persisted session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key
    #[serde(default)]
    pub id: i64,

    /// Login/display name
    #[serde(default)]
    pub username: String,

    /// Email address (unique)
    #[serde(default)]
    pub email: String,

    /// First name (admin user-management surface)
    #[serde(default)]
    pub first_name: String,

    /// Last name (admin user-management surface)
    #[serde(default)]
    pub last_name: String,

    /// Django-style staff flag
    #[serde(default)]
    pub is_staff: bool,

    /// Django-style superuser flag
    #[serde(default)]
    pub is_superuser: bool,

    /// Nested profile record, when the backend includes it
    #[serde(default)]
    pub profile: Option<UserProfile>,

    /// Flat role field, when the backend includes it
    #[serde(default)]
    pub role: Option<String>,

    /// Flat account-type field, when the backend includes it
    #[serde(default)]
    pub user_type: Option<String>,

    /// Account creation timestamp
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl User {
    /// The account type carried by the nested profile, if any.
    pub fn profile_user_type(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.user_type.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Full name for display, falling back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}
