//! # Doctheque Client Core
//!
//! This crate provides the client-side core of a shared document library:
//! - Permission resolution from redundant user role signals
//! - A reducer-based application state store with a notification queue
//! - Gateway traits for the auth/document/admin HTTP collaborators
//! - A pluggable key-value persistence boundary for session and theme
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities, value objects, and the permission service
//! - **Application Layer**: The state store, gateway traits, DTOs, and
//!   orchestration services
//! - **Infrastructure Layer**: Preference store implementations
//!
//! ## Module Structure
//!
//! ```text
//! doctheque/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities, value objects, and the permission service
//! +-- application/   State store, gateways, DTOs, and services
//! +-- infrastructure/ Preference store implementations
//! +-- shared/        Common utilities (errors, notification ids, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - State store and services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application assembly
pub mod startup;

// Telemetry and observability
pub mod telemetry;
