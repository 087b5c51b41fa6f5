//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Role**: Effective role resolved from the user's overlapping signals
//! - **CapabilitySet**: The resolved per-user permission booleans and label
//! - **Theme**: UI color scheme with string round-trip for persistence

mod capabilities;
mod role;
mod theme;

pub use capabilities::*;
pub use role::*;
pub use theme::*;
