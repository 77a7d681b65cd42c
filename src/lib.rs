//! PDF Highlighter Core
//!
//! Search orchestration and highlight mapping for a scanned-PDF excerpt
//! finder. The OCR/search computation and the document-rendering surface are
//! external collaborators; this crate owns everything between them:
//!
//! - `search`: upload-and-search orchestration, result cache, progress
//! - `upload`: content fingerprinting and the chunked upload protocol
//! - `highlight`: pixel-to-point mapping and match navigation
//! - `viewer`: the rendering-surface contract and highlight painting
//! - `history`: the persisted upload-history list
//! - `cancel`: per-session cooperative cancellation
//! - `config`: environment-driven configuration

pub mod cancel;
pub mod config;
pub mod error;
pub mod highlight;
pub mod history;
pub mod search;
pub mod upload;
pub mod viewer;

pub use cancel::CancellationToken;
pub use config::ServiceConfig;
pub use error::{PipelineError, Result};
pub use highlight::{HighlightIndex, HighlightUnit, PixelRect, PointRect};
pub use search::{ResultCache, SearchResult, SearchService};
pub use upload::SourceDocument;
