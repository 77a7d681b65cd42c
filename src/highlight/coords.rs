//! Pixel-to-point coordinate transform
//!
//! Match rectangles arrive in scanner pixels at a fixed DPI and must be
//! re-expressed in page points before the rendering surface can draw them.
//! Every field scales by `72 / dpi`; no vertical-axis flip is applied, since
//! the surface's page space shares the scan's top-left origin convention.

use crate::search::MatchGroup;

use super::types::{PixelRect, PointRect};

/// Resolution the documents are scanned at
pub const SCAN_DPI: u32 = 300;

/// Points per inch in page space
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a pixel rectangle to page points at the given scan resolution
pub fn to_points(rect: PixelRect, dpi: u32) -> PointRect {
    let scale = POINTS_PER_INCH / f64::from(dpi);
    PointRect {
        left: rect.left * scale,
        top: rect.top * scale,
        width: rect.width * scale,
        height: rect.height * scale,
    }
}

/// Convert every rectangle of a match group
///
/// A match wrapping across lines carries one rectangle per line; all of them
/// must be rendered, so the transform is applied to each independently.
pub fn group_to_points(group: &MatchGroup, dpi: u32) -> Vec<PointRect> {
    group
        .locations
        .iter()
        .map(|rect| to_points(*rect, dpi))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_at_scan_dpi() {
        let rect = PixelRect {
            left: 400.0,
            top: 400.0,
            width: 400.0,
            height: 400.0,
        };

        let points = to_points(rect, SCAN_DPI);

        assert_eq!(points.left, 96.0);
        assert_eq!(points.top, 96.0);
        assert_eq!(points.width, 96.0);
        assert_eq!(points.height, 96.0);
    }

    #[test]
    fn test_no_vertical_flip() {
        // A rect near the top of the scan stays near the top of the page.
        let near_top = PixelRect {
            left: 0.0,
            top: 10.0,
            width: 100.0,
            height: 30.0,
        };
        let points = to_points(near_top, SCAN_DPI);
        assert!(points.top < 3.0);
    }

    #[test]
    fn test_group_maps_every_rect() {
        let group = MatchGroup {
            matched_text: "wrapped match".to_string(),
            context: "a wrapped match across lines".to_string(),
            locations: vec![
                PixelRect {
                    left: 1200.0,
                    top: 300.0,
                    width: 600.0,
                    height: 50.0,
                },
                PixelRect {
                    left: 150.0,
                    top: 350.0,
                    width: 450.0,
                    height: 50.0,
                },
            ],
        };

        let points = group_to_points(&group, SCAN_DPI);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].left, 288.0);
        assert_eq!(points[1].top, 84.0);
    }
}
