//! Highlight Module
//!
//! Converts search results into a navigable, page-accurate highlight model:
//! - `PixelRect`/`PointRect` and the scan-resolution coordinate transform
//! - `HighlightIndex`, a flat document-ordered view over nested matches with
//!   a wrapping navigation cursor

pub mod coords;
pub mod index;
pub mod types;

pub use coords::{group_to_points, to_points, POINTS_PER_INCH, SCAN_DPI};
pub use index::{HighlightIndex, HighlightUnit};
pub use types::{PixelRect, PointRect};
