//! Viewer Module
//!
//! Contract with the external document-rendering surface, and the painter
//! that projects search matches onto it as tagged rectangle overlays.
//!
//! The surface itself (load lifecycle, page rendering, annotation drawing)
//! lives outside this crate; everything here talks to it through the
//! `AnnotationSurface` capability.

pub mod painter;
pub mod traits;
pub mod types;

pub use painter::{HighlightPainter, HIGHLIGHT_TAG};
pub use traits::AnnotationSurface;
pub use types::{HighlightAnnotation, ViewerError, ViewerEvent};
