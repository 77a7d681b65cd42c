//! Rendering-surface capability
//!
//! The concrete surface is an external collaborator; this trait is the
//! narrow waist the highlight layer drives it through.

use async_trait::async_trait;

use super::types::{HighlightAnnotation, ViewerError};

/// Document viewer with page navigation and rectangle overlays
#[async_trait]
pub trait AnnotationSurface: Send + Sync {
    /// Load a document from raw bytes under a display filename
    ///
    /// Completion or failure is also announced through the surface's
    /// `ViewerEvent` lifecycle.
    async fn load_document(&self, bytes: &[u8], file_name: &str) -> Result<(), ViewerError>;

    /// Scroll/jump the view to a page (1-indexed)
    async fn set_current_page(&self, page: u32) -> Result<(), ViewerError>;

    /// Draw a rectangle overlay
    async fn add_annotation(&self, annotation: HighlightAnnotation) -> Result<(), ViewerError>;

    /// Remove previously added overlays by id
    ///
    /// Ids not present are ignored; other owners' annotations are untouched.
    async fn delete_annotations(&self, ids: &[String]) -> Result<(), ViewerError>;
}
