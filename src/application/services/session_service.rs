//! Session Service
//!
//! Login, registration, logout, and session restoration against the auth
//! gateway. The persisted user snapshot is already rehydrated into the
//! store at construction; `restore` refreshes it from the backend and
//! keeps the snapshot when the refresh fails, so a flaky network does
//! not sign the user out.

use std::sync::Arc;

use validator::Validate;

use crate::application::dto::{Credentials, RegisterRequest};
use crate::application::gateways::AuthGateway;
use crate::application::store::AppStore;
use crate::domain::entities::{NotificationKind, User};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Orchestrates authentication flows.
pub struct SessionService<A>
where
    A: AuthGateway,
{
    gateway: Arc<A>,
    store: AppStore,
}

impl<A> SessionService<A>
where
    A: AuthGateway,
{
    /// Create a new session service.
    pub fn new(gateway: Arc<A>, store: AppStore) -> Self {
        Self { gateway, store }
    }

    /// Log in with credentials.
    ///
    /// On success the user snapshot replaces whatever the store held; on
    /// failure an error toast is raised and the previous state is kept.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AppError> {
        credentials.validate().map_err(validation_error)?;

        self.store.set_loading(true);
        let result = self
            .gateway
            .login(&credentials.email, &credentials.password)
            .await;
        self.store.set_loading(false);

        match result {
            Ok(user) => {
                tracing::info!("User {} logged in", user.email);
                self.store.set_user(Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                tracing::warn!("Login failed: {}", err);
                self.store
                    .show_notification(NotificationKind::Error, "Erreur de connexion");
                Err(err)
            }
        }
    }

    /// Register a new account and open a session for it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AppError> {
        request.validate().map_err(validation_error)?;

        self.store.set_loading(true);
        let result = self.gateway.register(request).await;
        self.store.set_loading(false);

        match result {
            Ok(user) => {
                self.store.set_user(Some(user.clone()));
                self.store.show_notification_with_title(
                    NotificationKind::Success,
                    "Compte créé avec succès",
                    "Bienvenue",
                );
                Ok(user)
            }
            Err(err) => {
                self.store
                    .show_notification(NotificationKind::Error, "Erreur lors de l'inscription");
                Err(err)
            }
        }
    }

    /// Sign out.
    ///
    /// The local session is cleared even when the backend call fails;
    /// the user asked to leave and a dead token is not worth keeping.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.logout().await {
            tracing::warn!("Logout call failed, clearing local session anyway: {}", err);
        }
        self.store.set_user(None);
    }

    /// Restore the session at startup.
    ///
    /// Returns the effective user: the refreshed profile when the
    /// backend answers, the persisted snapshot when it does not, `None`
    /// when no session exists.
    pub async fn restore(&self) -> Option<User> {
        if !self.gateway.is_authenticated().await {
            self.store.set_user(None);
            return None;
        }

        match self.gateway.current_user().await {
            Ok(user) => {
                self.store.set_user(Some(user.clone()));
                Some(user)
            }
            Err(err) => {
                tracing::warn!("Profile refresh failed, keeping persisted snapshot: {}", err);
                self.store.user()
            }
        }
    }
}
