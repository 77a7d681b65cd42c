//! Upload history types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known storage key for the history list
pub const HISTORY_KEY: &str = "uploadHistory";

/// Maximum retained entries, newest first
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// One past upload-and-search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Uploaded file name
    pub file_name: String,

    /// Query that was searched
    pub search_text: String,

    /// When the search completed
    pub timestamp: DateTime<Utc>,

    /// Matches found, when the search succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_matches: Option<u64>,
}

impl HistoryEntry {
    /// Entry stamped with the current time
    pub fn new(file_name: &str, search_text: &str, total_matches: Option<u64>) -> Self {
        Self {
            file_name: file_name.to_string(),
            search_text: search_text.to_string(),
            timestamp: Utc::now(),
            total_matches,
        }
    }
}

/// Errors from the history storage backend
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
