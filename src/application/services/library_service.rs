//! Library Service
//!
//! Document loading and lifecycle against the document gateway. Loads
//! replace the whole collection in one transition; mutations feed the
//! individual cache operations so the list stays consistent without a
//! refetch.

use std::sync::Arc;

use validator::Validate;

use crate::application::dto::{DocumentContent, DocumentPatch, DocumentUpload};
use crate::application::gateways::DocumentGateway;
use crate::application::store::AppStore;
use crate::domain::entities::{Document, NotificationKind};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Orchestrates the document library.
pub struct LibraryService<D>
where
    D: DocumentGateway,
{
    gateway: Arc<D>,
    store: AppStore,
}

impl<D> LibraryService<D>
where
    D: DocumentGateway,
{
    /// Create a new library service.
    pub fn new(gateway: Arc<D>, store: AppStore) -> Self {
        Self { gateway, store }
    }

    /// Fetch the collection and replace the cache.
    ///
    /// The raw payload goes through the store's normalization, so a
    /// pagination envelope or a malformed answer degrades to an empty
    /// list rather than an inconsistent one.
    pub async fn load_documents(&self) -> Result<(), AppError> {
        self.store.set_loading(true);
        let result = self.gateway.list().await;
        self.store.set_loading(false);

        match result {
            Ok(payload) => {
                self.store.set_documents_value(payload);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Document load failed: {}", err);
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors du chargement des documents",
                );
                Err(err)
            }
        }
    }

    /// Upload a document and prepend it to the cache.
    pub async fn upload(&self, request: &DocumentUpload) -> Result<Document, AppError> {
        request.validate().map_err(validation_error)?;

        self.store.set_loading(true);
        let result = self.gateway.upload(request).await;
        self.store.set_loading(false);

        match result {
            Ok(document) => {
                tracing::info!(id = document.id, "Document uploaded");
                self.store.add_document(document.clone());
                Ok(document)
            }
            Err(err) => {
                self.store
                    .show_notification(NotificationKind::Error, "Erreur lors de l'ajout du document");
                Err(err)
            }
        }
    }

    /// Patch a document's metadata and refresh its cache entry.
    pub async fn update(&self, id: i64, patch: &DocumentPatch) -> Result<Document, AppError> {
        patch.validate().map_err(validation_error)?;

        self.store.set_loading(true);
        let result = self.gateway.update(id, patch).await;
        self.store.set_loading(false);

        match result {
            Ok(document) => {
                self.store.update_document(document.clone());
                Ok(document)
            }
            Err(err) => {
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors de la modification du document",
                );
                Err(err)
            }
        }
    }

    /// Delete a document and drop it from the cache.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.set_loading(true);
        let result = self.gateway.delete(id).await;
        self.store.set_loading(false);

        match result {
            Ok(()) => {
                self.store.remove_document(id);
                self.store.show_notification_with_title(
                    NotificationKind::Success,
                    "Document supprimé avec succès",
                    "Succès",
                );
                Ok(())
            }
            Err(err) => {
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors de la suppression du document",
                );
                Err(err)
            }
        }
    }

    /// Download a document's file contents.
    ///
    /// Pure passthrough: the cache holds metadata only, file bytes are
    /// never retained.
    pub async fn download(&self, id: i64) -> Result<DocumentContent, AppError> {
        match self.gateway.download(id).await {
            Ok(content) => Ok(content),
            Err(err) => {
                self.store.show_notification(
                    NotificationKind::Error,
                    "Erreur lors du téléchargement du document",
                );
                Err(err)
            }
        }
    }
}
