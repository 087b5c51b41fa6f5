//! Application state snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Document, LibraryStats, Notification, User};
use crate::domain::value_objects::Theme;

/// Sentinel filter value matching every document type.
pub const FILTER_ALL: &str = "all";

/// The full application state consumed by the rendering layer.
///
/// Owned exclusively by [`super::AppStore`]; pages receive clones and
/// never mutate state directly. An absent `user` is a valid state
/// distinct from "not yet loaded" — rehydration decides which it is at
/// startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Active UI color scheme
    pub theme: Theme,

    /// Authenticated user snapshot, if any
    pub user: Option<User>,

    /// Cached document collection, most-recent-first
    pub documents: Vec<Document>,

    /// Current search input
    pub search_query: String,

    /// Selected document-type filter, [`FILTER_ALL`] for no filtering
    pub selected_filter: String,

    /// Whether an asynchronous operation is in flight
    pub loading: bool,

    /// Pending toast notifications, oldest first
    pub notifications: Vec<Notification>,

    /// Aggregates recomputed when the collection is replaced
    pub stats: LibraryStats,
}

impl AppState {
    /// Documents matching the current search query and type filter.
    ///
    /// Derived read: recomputed on demand, never cached. The search is a
    /// case-insensitive substring match against title or description (an
    /// empty query matches everything); the type filter is an exact match
    /// unless it is [`FILTER_ALL`]. Collection order is preserved.
    pub fn filtered_documents(&self) -> Vec<Document> {
        let query = self.search_query.to_lowercase();

        self.documents
            .iter()
            .filter(|doc| {
                query.is_empty()
                    || doc.title.to_lowercase().contains(&query)
                    || doc.description.to_lowercase().contains(&query)
            })
            .filter(|doc| {
                self.selected_filter == FILTER_ALL || doc.document_type == self.selected_filter
            })
            .cloned()
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            user: None,
            documents: Vec::new(),
            search_query: String::new(),
            selected_filter: FILTER_ALL.to_string(),
            loading: false,
            notifications: Vec::new(),
            stats: LibraryStats::default(),
        }
    }
}
