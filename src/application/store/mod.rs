//! Application State Store
//!
//! The single authoritative state container consumed by the whole UI.
//! State is mutated only through a closed set of named actions applied by
//! a pure reducer; persistence and subscriber notification run as effects
//! after each transition, and notification auto-expiry timers are owned
//! by the store so they can be cancelled when it is torn down.

mod actions;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use actions::Action;
pub use state::{AppState, FILTER_ALL};
pub use store::AppStore;
