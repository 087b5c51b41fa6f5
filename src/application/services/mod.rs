//! Orchestration Services
//!
//! Tie gateway calls to store transitions: every service clears the
//! loading flag on both success and failure and reports outcomes through
//! the notification queue, so a gateway failure can never leave the UI
//! stuck or silent.

mod admin_service;
mod library_service;
mod session_service;

pub use admin_service::AdminService;
pub use library_service::LibraryService;
pub use session_service::SessionService;
