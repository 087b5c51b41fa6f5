//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use doctheque::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Notifications dismiss after {} ms", settings.notifications.auto_dismiss_ms);
//! ```

mod settings;

pub use settings::*;
