//! Request DTOs with validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "adresse email invalide"))]
    pub email: String,

    #[validate(length(min = 1, message = "mot de passe requis"))]
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "nom d'utilisateur entre 2 et 32 caractères"))]
    pub username: String,

    #[validate(email(message = "adresse email invalide"))]
    pub email: String,

    #[validate(length(min = 8, message = "mot de passe d'au moins 8 caractères"))]
    pub password: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

/// Admin user-creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUserRequest {
    #[validate(length(min = 2, max = 32, message = "nom d'utilisateur entre 2 et 32 caractères"))]
    pub username: String,

    #[validate(email(message = "adresse email invalide"))]
    pub email: String,

    #[validate(length(min = 8, message = "mot de passe d'au moins 8 caractères"))]
    pub password: String,

    /// Role to assign ("admin", "bibliothecaire", "etudiant")
    #[serde(default)]
    pub role: Option<String>,
}

/// Admin user-update payload; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserPatch {
    #[validate(email(message = "adresse email invalide"))]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}

/// Document upload payload: metadata plus file bytes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentUpload {
    #[validate(length(min = 1, max = 255, message = "titre entre 1 et 255 caractères"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "type de document requis"))]
    pub document_type: String,

    #[validate(length(min = 1, message = "nom de fichier requis"))]
    pub file_name: String,

    /// Raw file contents
    #[serde(default)]
    pub data: Vec<u8>,
}

/// Document metadata update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DocumentPatch {
    #[validate(length(min = 1, max = 255, message = "titre entre 1 et 255 caractères"))]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub document_type: Option<String>,
}
