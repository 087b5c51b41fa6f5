//! # Domain Entities
//!
//! Core domain entities of the document library client.
//!
//! ## Core Entities
//!
//! - **User**: An account as the auth backend reports it, including the
//!   redundant role signals the permission service reconciles
//! - **Document**: A library entry cached in application state
//! - **Notification**: A toast queued for display, with optional auto-expiry
//!
//! Entities mirror backend payloads; every field that the backend can omit
//! carries a serde default so partially populated records never fail to
//! decode.

mod document;
mod notification;
mod user;

// Re-export Document entity and related types
pub use document::{Document, LibraryStats, RECENT_UPLOAD_WINDOW_DAYS};

// Re-export Notification entity and related types
pub use notification::{Notification, NotificationKind};

// Re-export User entity and related types
pub use user::{User, UserProfile};
