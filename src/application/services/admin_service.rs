//! Admin Service
//!
//! User management and usage statistics for the administration screens.
//! Results are returned to the caller rather than cached: the admin
//! pages own their listing locally, only the loading flag and toasts go
//! through the store.

use std::sync::Arc;

use validator::Validate;

use crate::application::dto::{NewUserRequest, UsageStats, UserPatch};
use crate::application::gateways::AdminGateway;
use crate::application::store::AppStore;
use crate::domain::entities::{NotificationKind, User};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Orchestrates administration flows.
pub struct AdminService<G>
where
    G: AdminGateway,
{
    gateway: Arc<G>,
    store: AppStore,
}

impl<G> AdminService<G>
where
    G: AdminGateway,
{
    /// Create a new admin service.
    pub fn new(gateway: Arc<G>, store: AppStore) -> Self {
        Self { gateway, store }
    }

    /// List all user accounts.
    pub async fn load_users(&self) -> Result<Vec<User>, AppError> {
        self.store.set_loading(true);
        let result = self.gateway.list_users().await;
        self.store.set_loading(false);

        result.map_err(|err| {
            self.store.show_notification(
                NotificationKind::Error,
                "Erreur lors du chargement des utilisateurs",
            );
            err
        })
    }

    /// Create a user account.
    pub async fn create_user(&self, request: &NewUserRequest) -> Result<User, AppError> {
        request.validate().map_err(validation_error)?;

        self.store.set_loading(true);
        let result = self.gateway.create_user(request).await;
        self.store.set_loading(false);

        match result {
            Ok(user) => {
                tracing::info!("Admin created user {}", user.username);
                self.store.show_notification_with_title(
                    NotificationKind::Success,
                    "Utilisateur créé avec succès",
                    "Succès",
                );
                Ok(user)
            }
            Err(err) => {
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors de la création de l'utilisateur",
                );
                Err(err)
            }
        }
    }

    /// Patch a user account.
    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<User, AppError> {
        patch.validate().map_err(validation_error)?;

        self.store.set_loading(true);
        let result = self.gateway.update_user(id, patch).await;
        self.store.set_loading(false);

        match result {
            Ok(user) => {
                self.store.show_notification_with_title(
                    NotificationKind::Success,
                    "Utilisateur modifié avec succès",
                    "Succès",
                );
                Ok(user)
            }
            Err(err) => {
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors de la modification de l'utilisateur",
                );
                Err(err)
            }
        }
    }

    /// Delete a user account.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.store.set_loading(true);
        let result = self.gateway.delete_user(id).await;
        self.store.set_loading(false);

        match result {
            Ok(()) => {
                self.store.show_notification_with_title(
                    NotificationKind::Success,
                    "Utilisateur supprimé avec succès",
                    "Succès",
                );
                Ok(())
            }
            Err(err) => {
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors de la suppression de l'utilisateur",
                );
                Err(err)
            }
        }
    }

    /// Fetch aggregate usage statistics for the dashboard.
    pub async fn usage_stats(&self) -> Result<UsageStats, AppError> {
        self.gateway.usage_stats().await.map_err(|err| {
            self.store.show_notification(
                NotificationKind::Error,
                "Erreur lors du chargement des statistiques",
            );
            err
        })
    }
}
