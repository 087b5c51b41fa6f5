//! # Domain Services
//!
//! Stateless services implementing domain rules that span entities.

mod permission_service;

pub use permission_service::PermissionService;
