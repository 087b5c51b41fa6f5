//! Data Transfer Objects
//!
//! Typed payloads exchanged with the gateway collaborators. Inbound
//! requests carry `validator` rules checked by the orchestration services
//! before any gateway call is made.

mod request;
mod response;

pub use request::*;
pub use response::*;
