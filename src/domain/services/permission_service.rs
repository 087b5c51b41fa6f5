//! Permission resolution domain service.
//!
//! The backend reports administrative status through several overlapping
//! fields (staff flag, superuser flag, nested profile type, flat role and
//! account-type fields) plus an email allow-list that predates all of
//! them. This service reconciles those signals into a single effective
//! role with a fixed precedence, then projects the role into the
//! capability set the UI consumes.
//!
//! Resolution is pure: the same user snapshot and settings always produce
//! the same capability set, and nothing here reads or writes external
//! state.

use crate::config::PermissionSettings;
use crate::domain::entities::User;
use crate::domain::value_objects::{CapabilitySet, Role};

/// Domain service for resolving user roles and capabilities.
pub struct PermissionService;

impl PermissionService {
    /// Resolve a user's effective role.
    ///
    /// Signals are evaluated in a fixed order, first match wins:
    ///
    /// 1. no user: guest
    /// 2. email on the configured allow-list: admin. This override is a
    ///    compatibility special-case layered on top of the structural
    ///    signals, not a general rule.
    /// 3. superuser or staff flag: admin
    /// 4. nested `profile.user_type`
    /// 5. flat `role` field
    /// 6. flat `user_type` field
    /// 7. fallback: student
    pub fn resolve_role(user: Option<&User>, settings: &PermissionSettings) -> Role {
        let Some(user) = user else {
            return Role::Guest;
        };

        if settings.is_allow_listed(&user.email) {
            return Role::Admin;
        }

        if user.is_superuser || user.is_staff {
            return Role::Admin;
        }

        if let Some(profile_type) = user.profile_user_type() {
            return Role::from_signal(profile_type);
        }

        if let Some(role) = user.role.as_deref().filter(|r| !r.is_empty()) {
            return Role::from_signal(role);
        }

        if let Some(user_type) = user.user_type.as_deref().filter(|t| !t.is_empty()) {
            return Role::from_signal(user_type);
        }

        Role::Student
    }

    /// Resolve a user's full capability set.
    ///
    /// Read access (`can_view`, `can_download`) is granted to every
    /// authenticated user regardless of role. Write access (`can_add`,
    /// `can_edit`, `can_delete`) is admin-only: librarians are listed as a
    /// privileged role in configuration but the deployed rules never
    /// granted them document writes, and that behavior is kept verbatim.
    pub fn resolve(user: Option<&User>, settings: &PermissionSettings) -> CapabilitySet {
        let role = Self::resolve_role(user, settings);

        if role == Role::Guest {
            return CapabilitySet::guest();
        }

        let is_admin = role.is_admin();
        let is_librarian = role.is_librarian();

        CapabilitySet {
            can_view: true,
            can_download: true,
            can_add: is_admin,
            can_edit: is_admin,
            can_delete: is_admin,
            is_admin,
            is_librarian,
            is_student: !is_admin && !is_librarian,
            role,
        }
    }
}
