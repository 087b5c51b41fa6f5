//! # Domain Layer
//!
//! The domain layer contains the core business rules of the document
//! library client. It is independent of any external frameworks or
//! infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Document, Notification)
//! - **value_objects**: Immutable value types (Role, CapabilitySet, Theme)
//! - **services**: Domain services (permission resolution)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or application layers
//! - Pure business logic and domain rules
//! - Defensive normalization of data coming from the backend

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
