//! State reducer.
//!
//! Applies one action to the state. The reducer is pure in the sense that
//! matters for testability: it performs no I/O, touches no state other
//! than what it is given, and the same (state, action, now) triple always
//! produces the same result. Persistence and timers live in the store,
//! not here.

use chrono::{DateTime, Utc};

use super::actions::Action;
use super::state::AppState;
use crate::domain::entities::LibraryStats;

/// Apply an action to the state in place.
///
/// `now` is the clock reading used for stats recomputation; the store
/// passes `Utc::now()` and tests pass fixed instants.
pub fn reduce(state: &mut AppState, action: Action, now: DateTime<Utc>) {
    match action {
        Action::SetTheme(theme) => {
            state.theme = theme;
        }

        Action::PushNotification(notification) => {
            state.notifications.push(notification);
        }

        Action::RemoveNotification(id) => {
            state.notifications.retain(|n| n.id != id);
        }

        Action::SetLoading(loading) => {
            state.loading = loading;
        }

        Action::SetUser(user) => {
            state.user = user;
        }

        Action::SetDocuments(documents) => {
            // Stats are recomputed atomically with the replacement; other
            // document actions deliberately leave them untouched.
            state.stats = LibraryStats::compute(&documents, now);
            state.documents = documents;
        }

        Action::AddDocument(document) => {
            state.documents.insert(0, document);
        }

        Action::UpdateDocument(document) => {
            if let Some(existing) = state.documents.iter_mut().find(|d| d.id == document.id) {
                *existing = document;
            }
        }

        Action::RemoveDocument(id) => {
            state.documents.retain(|d| d.id != id);
        }

        Action::SetSearchQuery(query) => {
            state.search_query = query;
        }

        Action::SetFilter(filter) => {
            state.selected_filter = filter;
        }
    }
}
