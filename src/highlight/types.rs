//! Rectangle types for the two coordinate spaces
//!
//! The OCR service reports match locations in scanner pixels at a known DPI;
//! the rendering surface consumes page points (72 per inch). Both spaces use
//! a top-left origin with y increasing downward.

use serde::{Deserialize, Serialize};

/// Rectangle in scanner pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rectangle in page-point space (72 points/inch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}
