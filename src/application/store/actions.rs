//! Store actions.
//!
//! The closed set of state transitions. Every mutation of [`super::AppState`]
//! goes through exactly one of these variants; anything not expressible
//! here is not a legal transition.

use crate::domain::entities::{Document, Notification, User};
use crate::domain::value_objects::Theme;

/// A state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the active theme
    SetTheme(Theme),

    /// Append a notification (id already assigned by the store)
    PushNotification(Notification),

    /// Remove a notification by id; unknown ids are a no-op
    RemoveNotification(i64),

    /// Replace the loading flag
    SetLoading(bool),

    /// Replace the user snapshot; `None` means signed out
    SetUser(Option<User>),

    /// Replace the document collection and recompute stats
    SetDocuments(Vec<Document>),

    /// Prepend a document (most-recent-first invariant)
    AddDocument(Document),

    /// Replace the document with a matching id; unknown ids are a no-op
    UpdateDocument(Document),

    /// Remove the document with a matching id; unknown ids are a no-op
    RemoveDocument(i64),

    /// Replace the search query
    SetSearchQuery(String),

    /// Replace the document-type filter
    SetFilter(String),
}
