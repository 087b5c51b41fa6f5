//! The application store.
//!
//! Wraps [`AppState`] behind a lock, applies actions through the reducer,
//! and runs the two kinds of effects the transitions carry: preference
//! persistence (theme and user snapshot) and per-notification expiry
//! timers. The store is constructor-injected everywhere it is used, so
//! tests can run any number of independent instances.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::actions::Action;
use super::reducer::reduce;
use super::state::AppState;
use crate::config::{NotificationSettings, PermissionSettings};
use crate::domain::entities::{Document, LibraryStats, Notification, NotificationKind, User};
use crate::domain::services::PermissionService;
use crate::domain::value_objects::{CapabilitySet, Theme};
use crate::infrastructure::persistence::{keys, PreferenceStore};
use crate::shared::error::AppError;
use crate::shared::ids::NotificationIdGenerator;

/// Subscriber callback invoked with a state snapshot after each transition.
type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

/// Persistence work derived from an action, executed after the reducer.
enum PersistEffect {
    Theme(Theme),
    User(Option<User>),
}

struct StoreInner {
    state: RwLock<AppState>,
    prefs: Arc<dyn PreferenceStore>,
    ids: NotificationIdGenerator,
    /// Live expiry timers, keyed by notification id
    timers: DashMap<i64, JoinHandle<()>>,
    subscribers: RwLock<Vec<(usize, Subscriber)>>,
    next_subscriber_id: AtomicUsize,
    auto_dismiss: Duration,
}

impl StoreInner {
    fn apply(&self, action: Action) {
        let mut state = self.state.write();
        reduce(&mut state, action, Utc::now());
    }

    fn run_persist(&self, effect: PersistEffect) {
        let result = match effect {
            PersistEffect::Theme(theme) => self.prefs.set(keys::THEME, theme.as_str()),
            PersistEffect::User(Some(user)) => serde_json::to_string(&user)
                .map_err(AppError::from)
                .and_then(|json| self.prefs.set(keys::USER, &json)),
            PersistEffect::User(None) => self.prefs.remove(keys::USER),
        };

        if let Err(err) = result {
            // A failed preference write must never surface to the UI.
            tracing::warn!("Preference write failed: {}", err);
        }
    }

    fn notify_subscribers(&self) {
        let snapshot = self.state.read().clone();
        for (_, subscriber) in self.subscribers.read().iter() {
            subscriber(&snapshot);
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        for entry in self.timers.iter() {
            entry.value().abort();
        }
    }
}

/// The single authoritative state container.
///
/// Cheap to clone; clones share the same state. Dropping the last clone
/// aborts any pending notification expiry timers.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<StoreInner>,
}

impl AppStore {
    /// Create a store, rehydrating theme and user from the preference
    /// store.
    ///
    /// An unreadable or unparseable persisted snapshot degrades to the
    /// default value rather than failing construction.
    pub fn new(prefs: Arc<dyn PreferenceStore>, notifications: &NotificationSettings) -> Self {
        let mut state = AppState::default();

        match prefs.get(keys::THEME) {
            Ok(Some(value)) => state.theme = Theme::from_str(&value),
            Ok(None) => {}
            Err(err) => tracing::warn!("Could not read persisted theme: {}", err),
        }

        match prefs.get(keys::USER) {
            Ok(Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => state.user = Some(user),
                Err(err) => {
                    tracing::warn!("Persisted user snapshot is unparseable, ignoring: {}", err)
                }
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("Could not read persisted user: {}", err),
        }

        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                prefs,
                ids: NotificationIdGenerator::new(),
                timers: DashMap::new(),
                subscribers: RwLock::new(Vec::new()),
                next_subscriber_id: AtomicUsize::new(0),
                auto_dismiss: Duration::from_millis(notifications.auto_dismiss_ms),
            }),
        }
    }

    fn dispatch(&self, action: Action) {
        let persist = match &action {
            Action::SetTheme(theme) => Some(PersistEffect::Theme(*theme)),
            Action::SetUser(user) => Some(PersistEffect::User(user.clone())),
            _ => None,
        };

        self.inner.apply(action);

        if let Some(effect) = persist {
            self.inner.run_persist(effect);
        }
        self.inner.notify_subscribers();
    }

    // --- Snapshots and derived reads ---

    /// Full state snapshot.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Current user snapshot, if authenticated.
    pub fn user(&self) -> Option<User> {
        self.inner.state.read().user.clone()
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.inner.state.read().theme
    }

    /// Whether an asynchronous operation is in flight.
    pub fn loading(&self) -> bool {
        self.inner.state.read().loading
    }

    /// Pending notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.state.read().notifications.clone()
    }

    /// Aggregate library statistics.
    pub fn stats(&self) -> LibraryStats {
        self.inner.state.read().stats
    }

    /// Documents matching the current search query and type filter.
    pub fn filtered_documents(&self) -> Vec<Document> {
        self.inner.state.read().filtered_documents()
    }

    /// Capabilities of the current user.
    ///
    /// Recomputed on every call from the live user snapshot; never cached.
    pub fn capabilities(&self, permissions: &PermissionSettings) -> CapabilitySet {
        let state = self.inner.state.read();
        PermissionService::resolve(state.user.as_ref(), permissions)
    }

    // --- Theme ---

    /// Replace the active theme and persist the choice.
    pub fn set_theme(&self, theme: Theme) {
        self.dispatch(Action::SetTheme(theme));
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&self) {
        let next = self.theme().toggled();
        self.set_theme(next);
    }

    // --- User ---

    /// Replace the user snapshot and persist (or clear) it.
    pub fn set_user(&self, user: Option<User>) {
        self.dispatch(Action::SetUser(user));
    }

    // --- Loading flag ---

    /// Replace the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    // --- Documents ---

    /// Replace the document collection; stats are recomputed atomically.
    pub fn set_documents(&self, documents: Vec<Document>) {
        self.dispatch(Action::SetDocuments(documents));
    }

    /// Replace the collection from a raw backend payload.
    ///
    /// Anything that is not an array degrades to an empty collection;
    /// this never fails.
    pub fn set_documents_value(&self, payload: serde_json::Value) {
        self.set_documents(Document::collection_from_value(payload));
    }

    /// Prepend a document and raise a success notification.
    pub fn add_document(&self, document: Document) {
        self.dispatch(Action::AddDocument(document));
        self.push_notification(
            Notification::new(NotificationKind::Success, "Document ajouté avec succès")
                .with_title("Succès"),
        );
    }

    /// Replace the document with a matching id (no-op if absent) and
    /// raise a success notification.
    pub fn update_document(&self, document: Document) {
        self.dispatch(Action::UpdateDocument(document));
        self.push_notification(
            Notification::new(NotificationKind::Success, "Document modifié avec succès")
                .with_title("Succès"),
        );
    }

    /// Remove the document with a matching id; unknown ids are a no-op.
    pub fn remove_document(&self, id: i64) {
        self.dispatch(Action::RemoveDocument(id));
    }

    // --- Search and filter ---

    /// Replace the search query; filtering is recomputed lazily on read.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch(Action::SetSearchQuery(query.into()));
    }

    /// Replace the document-type filter.
    pub fn set_filter(&self, filter: impl Into<String>) {
        self.dispatch(Action::SetFilter(filter.into()));
    }

    // --- Notifications ---

    /// Queue a toast notification; returns its id.
    pub fn show_notification(&self, kind: NotificationKind, message: impl Into<String>) -> i64 {
        self.push_notification(Notification::new(kind, message))
    }

    /// Queue a toast notification with a title; returns its id.
    pub fn show_notification_with_title(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> i64 {
        self.push_notification(Notification::new(kind, message).with_title(title))
    }

    /// Queue a prepared notification, assigning it a fresh id.
    ///
    /// Unless the notification is sticky, an independent expiry timer is
    /// scheduled; timers for different notifications never interfere.
    pub fn push_notification(&self, notification: Notification) -> i64 {
        let mut notification = notification;
        notification.id = self.inner.ids.generate();
        let id = notification.id;
        let auto_remove = notification.auto_remove;

        self.dispatch(Action::PushNotification(notification));

        if auto_remove {
            self.schedule_expiry(id);
        }
        id
    }

    /// Remove a notification by id and cancel its expiry timer.
    ///
    /// Removal is idempotent: unknown ids (including ids whose timer
    /// already fired) are a no-op.
    pub fn remove_notification(&self, id: i64) {
        if let Some((_, timer)) = self.inner.timers.remove(&id) {
            timer.abort();
        }
        self.dispatch(Action::RemoveNotification(id));
    }

    fn schedule_expiry(&self, id: i64) {
        let Ok(handle) = Handle::try_current() else {
            // No runtime: the toast stays until explicitly dismissed.
            tracing::warn!("No async runtime, notification {} will not auto-expire", id);
            return;
        };

        let weak: Weak<StoreInner> = Arc::downgrade(&self.inner);
        let delay = self.inner.auto_dismiss;

        let timer = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // The store may be gone or the toast already dismissed;
            // removal by id is idempotent either way.
            if let Some(inner) = weak.upgrade() {
                inner.timers.remove(&id);
                inner.apply(Action::RemoveNotification(id));
                inner.notify_subscribers();
            }
        });

        self.inner.timers.insert(id, timer);
    }

    // --- Subscriptions ---

    /// Register a callback invoked with a snapshot after every
    /// transition; returns a token for [`Self::unsubscribe`].
    pub fn subscribe<F>(&self, subscriber: F) -> usize
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
        self.inner
            .subscribers
            .write()
            .push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber; unknown tokens are a no-op.
    pub fn unsubscribe(&self, token: usize) {
        self.inner.subscribers.write().retain(|(id, _)| *id != token);
    }
}
