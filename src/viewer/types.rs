//! Viewer-facing types

use thiserror::Error;

use crate::highlight::PointRect;

/// A rectangle overlay to draw on one page
///
/// The tag marks which component owns the overlay, so one owner's
/// annotations can later be removed without disturbing anything else drawn
/// on the document.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightAnnotation {
    /// Caller-assigned annotation id, unique per overlay
    pub id: String,

    /// Page number (1-indexed)
    pub page: u32,

    /// Position and size in page points
    pub rect: PointRect,

    /// Owner tag for selective removal
    pub tag: String,
}

/// Load-lifecycle events emitted by the rendering surface
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// The document finished loading and pages are addressable
    DocumentLoaded,

    /// The document could not be loaded
    DocumentLoadFailed(String),
}

/// Errors surfaced by the rendering collaborator
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("document load failed: {0}")]
    LoadFailed(String),

    #[error("page {0} not present in document")]
    PageNotFound(u32),

    #[error("annotation rejected: {0}")]
    AnnotationRejected(String),
}
