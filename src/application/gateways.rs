//! Gateway traits for the HTTP collaborators.
//!
//! The core never performs network calls itself; the host application
//! implements these traits over its HTTP client of choice and the
//! orchestration services drive them. Token storage, refresh, and
//! redirect-on-expiry all live behind the gateway boundary.

use async_trait::async_trait;
use serde_json::Value;

use crate::application::dto::{
    DocumentContent, DocumentPatch, DocumentUpload, NewUserRequest, RegisterRequest, UsageStats,
    UserPatch,
};
use crate::domain::entities::{Document, User};
use crate::shared::error::AppError;

/// Authentication backend boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for an authenticated session.
    async fn login(&self, email: &str, password: &str) -> Result<User, AppError>;

    /// Create an account and open a session for it.
    async fn register(&self, request: &RegisterRequest) -> Result<User, AppError>;

    /// Terminate the current session.
    async fn logout(&self) -> Result<(), AppError>;

    /// Fetch the profile of the current session's user.
    async fn current_user(&self) -> Result<User, AppError>;

    /// Whether a usable session currently exists.
    async fn is_authenticated(&self) -> bool;
}

/// Document backend boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentGateway: Send + Sync {
    /// Fetch the document collection.
    ///
    /// Returns the raw payload: some deployments answer with a bare
    /// array, others with a pagination envelope, and the store
    /// normalizes either.
    async fn list(&self) -> Result<Value, AppError>;

    /// Fetch a single document.
    async fn fetch(&self, id: i64) -> Result<Document, AppError>;

    /// Upload a new document.
    async fn upload(&self, request: &DocumentUpload) -> Result<Document, AppError>;

    /// Patch a document's metadata.
    async fn update(&self, id: i64, patch: &DocumentPatch) -> Result<Document, AppError>;

    /// Delete a document.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Download a document's file contents.
    async fn download(&self, id: i64) -> Result<DocumentContent, AppError>;
}

/// Admin backend boundary (user management and usage statistics).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminGateway: Send + Sync {
    /// List user accounts.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Create a user account.
    async fn create_user(&self, request: &NewUserRequest) -> Result<User, AppError>;

    /// Patch a user account.
    async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<User, AppError>;

    /// Delete a user account.
    async fn delete_user(&self, id: i64) -> Result<(), AppError>;

    /// Fetch aggregate usage statistics.
    async fn usage_stats(&self) -> Result<UsageStats, AppError>;
}
