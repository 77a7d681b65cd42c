//! Search result types
//!
//! Field names follow the service's JSON contract, so these types are both
//! the wire representation and the in-memory model. Results are immutable
//! once produced; a cached result and a fresh one are interchangeable.

use serde::{Deserialize, Serialize};

use crate::highlight::PixelRect;

/// Outcome of one search over an uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Whether the service completed the search
    pub success: bool,

    /// Failure message, populated only when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Total match groups across the document
    pub total_matches: u64,

    /// Page count of the scanned document
    pub total_pages: u32,

    /// Number of pages with at least one match
    pub pages_with_matches: u32,

    /// The query that produced this result
    #[serde(rename = "search_query")]
    pub query: String,

    /// Per-page matches, ascending page order; pages without matches are
    /// absent
    #[serde(default)]
    pub matches: Vec<PageMatch>,
}

/// Matches found on a single page
///
/// A page appears at most once in `SearchResult::matches`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMatch {
    /// Page number (1-indexed)
    pub page: u32,

    /// Match groups on this page, in reading order
    pub locations: Vec<MatchGroup>,
}

/// One logical text match
///
/// A match that wraps across lines spans multiple rectangles, so `locations`
/// may hold more than one entry; all of them belong to this single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGroup {
    /// The text the service matched
    pub matched_text: String,

    /// Surrounding words, for display alongside the highlight
    pub context: String,

    /// Bounding rectangles in scanner pixel space
    pub locations: Vec<PixelRect>,
}
