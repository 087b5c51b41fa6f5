//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Backend API configuration
    pub api: ApiSettings,

    /// Notification queue configuration
    pub notifications: NotificationSettings,

    /// Permission resolution configuration
    pub permissions: PermissionSettings,

    /// Preference persistence configuration
    pub storage: StorageSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Backend API configuration.
///
/// The core never calls these endpoints itself; the values are handed to
/// whichever gateway implementation the host application wires in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the REST backend
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Notification queue configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSettings {
    /// Auto-dismiss delay for toast notifications, in milliseconds
    pub auto_dismiss_ms: u64,
}

/// Permission resolution configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionSettings {
    /// Emails granted administrator capabilities regardless of any
    /// structural role signal on the account.
    ///
    /// This override predates the role fields on the user record and is
    /// kept for compatibility with accounts created before those fields
    /// existed. It is evaluated before every other signal.
    pub admin_emails: Vec<String>,
}

impl PermissionSettings {
    /// Check whether an email is on the administrator allow-list.
    pub fn is_allow_listed(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|e| e == email)
    }
}

/// Preference persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Path of the JSON file backing the preference store
    pub path: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the auto-dismiss delay is zero.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://127.0.0.1:8000/api")?
            .set_default("api.timeout_secs", 30)?
            .set_default("notifications.auto_dismiss_ms", 5000_i64)?
            .set_default(
                "permissions.admin_emails",
                vec!["azize@gmail.com", "admin@gmail.com"],
            )?
            .set_default("storage.path", "doctheque-preferences.json")?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__API__BASE_URL=... -> api.base_url = ...
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("api.base_url", std::env::var("API_BASE_URL").ok())?
            .set_override_option("storage.path", std::env::var("PREFERENCES_PATH").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.notifications.auto_dismiss_ms == 0 {
                    return Err(ConfigError::Message(
                        "notifications.auto_dismiss_ms must be greater than zero".into(),
                    ));
                }
                Ok(settings)
            })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: "http://127.0.0.1:8000/api".into(),
                timeout_secs: 30,
            },
            notifications: NotificationSettings {
                auto_dismiss_ms: 5000,
            },
            permissions: PermissionSettings {
                admin_emails: vec!["azize@gmail.com".into(), "admin@gmail.com".into()],
            },
            storage: StorageSettings {
                path: "doctheque-preferences.json".into(),
            },
            environment: "development".into(),
        }
    }
}
