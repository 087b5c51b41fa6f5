//! Application Layer
//!
//! Contains the state store, the gateway traits for the HTTP
//! collaborators, data transfer objects (DTOs), and the orchestration
//! services that tie gateway calls to store transitions.

pub mod dto;
pub mod gateways;
pub mod services;
pub mod store;
