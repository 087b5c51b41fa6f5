//! Application Startup
//!
//! Assembles the state store and orchestration services from settings.

use std::sync::Arc;

use anyhow::Result;

use crate::application::gateways::{AdminGateway, AuthGateway, DocumentGateway};
use crate::application::services::{AdminService, LibraryService, SessionService};
use crate::application::store::AppStore;
use crate::config::Settings;
use crate::infrastructure::persistence::JsonFilePreferenceStore;

/// Fully wired application core.
///
/// The host supplies the gateway implementations; everything else is
/// built here from settings. Cloning the embedded store is cheap and
/// every clone observes the same state.
pub struct Application<A, D, G>
where
    A: AuthGateway,
    D: DocumentGateway,
    G: AdminGateway,
{
    pub store: AppStore,
    pub session: SessionService<A>,
    pub library: LibraryService<D>,
    pub admin: AdminService<G>,
    pub settings: Arc<Settings>,
}

impl<A, D, G> Application<A, D, G>
where
    A: AuthGateway,
    D: DocumentGateway,
    G: AdminGateway,
{
    /// Build the application core from settings and gateways.
    ///
    /// Opens the preference file named by `settings.storage.path` and
    /// rehydrates the persisted theme and user snapshot into the store.
    pub fn build(
        settings: Settings,
        auth: Arc<A>,
        documents: Arc<D>,
        admin: Arc<G>,
    ) -> Result<Self> {
        let prefs = Arc::new(JsonFilePreferenceStore::open(&settings.storage.path)?);
        tracing::info!("Preference store opened at {}", settings.storage.path);

        let store = AppStore::new(prefs, &settings.notifications);

        let session = SessionService::new(auth, store.clone());
        let library = LibraryService::new(documents, store.clone());
        let admin = AdminService::new(admin, store.clone());

        Ok(Self {
            store,
            session,
            library,
            admin,
            settings: Arc::new(settings),
        })
    }

    /// Restore the persisted session against the backend.
    ///
    /// Call once after `build`; refreshes the user profile when a session
    /// exists and clears it otherwise.
    pub async fn restore_session(&self) {
        self.session.restore().await;
    }
}
