//! Notification entity.
//!
//! All user-visible feedback flows through the notification queue: a
//! toast is appended by any action that wants to report an outcome and is
//! removed either by explicit dismissal or by its auto-expiry timer.

use serde::{Deserialize, Serialize};

/// Severity/kind of a notification toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Convert to wire/display string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A queued toast notification.
///
/// The id is assigned by the store when the notification is appended;
/// removal by id is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique, creation-timestamp-derived id (0 until queued)
    pub id: i64,

    /// Severity of the toast
    pub kind: NotificationKind,

    /// Optional short heading
    pub title: Option<String>,

    /// Body text
    pub message: String,

    /// Whether the expiry timer removes this toast automatically
    pub auto_remove: bool,
}

impl Notification {
    /// Create a notification with default auto-removal.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            title: None,
            message: message.into(),
            auto_remove: true,
        }
    }

    /// Attach a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Keep the toast until it is explicitly dismissed.
    pub fn sticky(mut self) -> Self {
        self.auto_remove = false;
        self
    }
}
