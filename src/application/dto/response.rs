//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Usage statistics for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Registered accounts
    #[serde(default)]
    pub total_users: u64,

    /// Documents in the library
    #[serde(default)]
    pub total_documents: u64,

    /// Combined document size in bytes
    #[serde(default)]
    pub total_size: u64,

    /// Documents uploaded within the recency window
    #[serde(default)]
    pub recent_uploads: u64,
}

/// Downloaded document contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// File name suggested to the user
    pub file_name: String,

    /// MIME type reported by the backend
    pub content_type: String,

    /// Raw file bytes
    pub data: Vec<u8>,
}
