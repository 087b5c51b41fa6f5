//! Document entity and aggregate statistics.
//!
//! Documents are cached in application state as the backend reports them.
//! The core does not validate or transform them beyond defensive decoding:
//! any field the backend omits defaults to blank/zero, and a payload that
//! is not a sequence degrades to an empty collection.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Window, in days, within which an upload counts as "recent".
pub const RECENT_UPLOAD_WINDOW_DAYS: i64 = 7;

/// Represents a document in the shared library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Backend primary key
    #[serde(default)]
    pub id: i64,

    /// Title shown in lists and search results
    #[serde(default)]
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Type used by the exact-match filter ("pdf", "image", ...)
    #[serde(default)]
    pub document_type: String,

    /// Original file name
    #[serde(default)]
    pub file_name: String,

    /// Size in bytes
    #[serde(default)]
    pub file_size: u64,

    /// Upload timestamp
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Whether the document was uploaded within the recency window.
    pub fn is_recent_upload(&self, now: DateTime<Utc>) -> bool {
        self.uploaded_at
            .map(|at| at > now - Duration::days(RECENT_UPLOAD_WINDOW_DAYS))
            .unwrap_or(false)
    }

    /// Decode a backend payload into a document collection.
    ///
    /// The list endpoint answers with either a bare array or a pagination
    /// envelope carrying the array under `results`; anything else degrades
    /// to an empty collection. Elements that fail to decode are skipped
    /// rather than failing the whole payload.
    pub fn collection_from_value(payload: Value) -> Vec<Document> {
        let payload = match payload {
            Value::Object(mut envelope) => match envelope.remove("results") {
                Some(results) => results,
                None => Value::Object(envelope),
            },
            other => other,
        };
        match payload {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<Document>(item) {
                    Ok(doc) => Some(doc),
                    Err(err) => {
                        tracing::warn!("Skipping undecodable document: {}", err);
                        None
                    }
                })
                .collect(),
            other => {
                tracing::warn!(
                    "Document payload was not an array (got {}), treating as empty",
                    type_name(&other)
                );
                Vec::new()
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Aggregate statistics over the cached document collection.
///
/// Recomputed atomically whenever the collection is replaced wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStats {
    /// Number of cached documents
    pub total_documents: usize,

    /// Combined size of all cached documents, in bytes
    pub total_size: u64,

    /// Documents uploaded within the recency window
    pub recent_uploads: usize,
}

impl LibraryStats {
    /// Compute statistics for a document collection.
    pub fn compute(documents: &[Document], now: DateTime<Utc>) -> Self {
        Self {
            total_documents: documents.len(),
            total_size: documents.iter().map(|d| d.file_size).sum(),
            recent_uploads: documents
                .iter()
                .filter(|d| d.is_recent_upload(now))
                .count(),
        }
    }
}
