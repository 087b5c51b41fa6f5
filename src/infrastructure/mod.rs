//! # Infrastructure Layer
//!
//! Concrete implementations of the boundaries the core depends on. The
//! only boundary the client core owns is preference persistence; the HTTP
//! gateways are implemented by the host application.

pub mod persistence;
