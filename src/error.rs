//! Pipeline error taxonomy
//!
//! Errors are not retried internally; they propagate to the caller, which
//! owns user messaging. A failed invocation never writes to the result cache.

use thiserror::Error;

/// Error type for one upload-and-search invocation
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The owning session was torn down; the invocation unwinds silently
    #[error("operation cancelled")]
    Cancelled,

    /// A chunk or finalize request failed; no partial-result fallback
    #[error("upload failed: {0}")]
    Upload(String),

    /// The remote search returned a failure or a malformed response
    #[error("search failed: {0}")]
    Search(String),

    /// Rejected before any network activity
    #[error("invalid request: {0}")]
    Validation(String),
}

impl PipelineError {
    /// Whether this error is a caller-initiated cancellation rather than a
    /// user-facing failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
