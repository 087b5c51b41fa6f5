//! Resolved user capabilities.
//!
//! A `CapabilitySet` is a pure projection of a user snapshot: it has no
//! lifecycle of its own and is recomputed on every resolution call rather
//! than cached.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// The capability booleans and role label the UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// May open and read documents
    pub can_view: bool,

    /// May download document files
    pub can_download: bool,

    /// May upload new documents
    pub can_add: bool,

    /// May edit document metadata
    pub can_edit: bool,

    /// May delete documents
    pub can_delete: bool,

    /// Resolved to an administrator
    pub is_admin: bool,

    /// Resolved to a librarian
    pub is_librarian: bool,

    /// Authenticated, neither admin nor librarian
    pub is_student: bool,

    /// Effective role behind the booleans
    pub role: Role,
}

impl CapabilitySet {
    /// The all-false capability set of an unauthenticated visitor.
    pub fn guest() -> Self {
        Self {
            can_view: false,
            can_download: false,
            can_add: false,
            can_edit: false,
            can_delete: false,
            is_admin: false,
            is_librarian: false,
            is_student: false,
            role: Role::Guest,
        }
    }

    /// French display label for the resolved role.
    pub fn user_type(&self) -> &'static str {
        self.role.label()
    }
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self::guest()
    }
}
