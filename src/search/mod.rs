//! Search Module
//!
//! Turns a local document and a query into a result from the remote OCR/
//! search service:
//! - `SearchService` sequences fingerprinting, the cache lookup, the chunked
//!   upload, the simulated analysis phase, and the search call
//! - `ResultCache` guarantees an identical (bytes, query) pair is never
//!   re-processed
//! - `ProgressEstimator` animates the analysis phase, whose true progress
//!   the service does not expose
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pdf_highlighter_core::cancel::CancellationToken;
//! use pdf_highlighter_core::config::ServiceConfig;
//! use pdf_highlighter_core::search::SearchService;
//! use pdf_highlighter_core::upload::SourceDocument;
//!
//! let service = SearchService::new(ServiceConfig::from_env());
//! let token = CancellationToken::new();
//! let document = SourceDocument::new("scan.pdf", bytes);
//!
//! let result = service
//!     .perform_search(&document, "the excerpt", &token, Some(&|p| println!("{p}%")))
//!     .await?;
//! ```

pub mod cache;
pub mod progress;
pub mod service;
pub mod types;

pub use cache::{cache_key, ResultCache, DEFAULT_CACHE_CAPACITY};
pub use progress::{
    FixedPacing, PacingStrategy, ProgressCallback, ProgressEstimator, RandomPacing,
    ANALYSIS_PHASE_FLOOR, UPLOAD_PHASE_CEILING,
};
pub use service::SearchService;
pub use types::{MatchGroup, PageMatch, SearchResult};
