//! Highlight painter
//!
//! Projects a search result onto the rendering surface: converts every match
//! rectangle to page points, draws one tagged annotation per rectangle, and
//! remembers the ids it created so it can later remove exactly its own
//! overlays and nothing else.

use uuid::Uuid;

use crate::highlight::{group_to_points, HighlightUnit, SCAN_DPI};
use crate::search::SearchResult;

use super::traits::AnnotationSurface;
use super::types::{HighlightAnnotation, ViewerError, ViewerEvent};

/// Tag applied to every overlay this painter creates
pub const HIGHLIGHT_TAG: &str = "search-highlight";

/// Draws and manages search-match overlays on one surface
pub struct HighlightPainter {
    tag: String,
    dpi: u32,
    painted: Vec<String>,
}

impl Default for HighlightPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightPainter {
    /// Painter with the default tag and scan resolution
    pub fn new() -> Self {
        Self {
            tag: HIGHLIGHT_TAG.to_string(),
            dpi: SCAN_DPI,
            painted: Vec::new(),
        }
    }

    /// Use a custom owner tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    /// Use a custom scan resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Ids of the overlays currently owned by this painter
    pub fn painted_ids(&self) -> &[String] {
        &self.painted
    }

    /// Replace this painter's overlays with the given result's matches
    ///
    /// Previously painted overlays are removed first (by id, so foreign
    /// annotations survive). Every rectangle of every match group is drawn,
    /// including the extra rectangles of multi-line matches. Returns the
    /// number of overlays drawn.
    pub async fn paint(
        &mut self,
        surface: &dyn AnnotationSurface,
        result: &SearchResult,
    ) -> Result<usize, ViewerError> {
        self.clear(surface).await?;

        for page_match in &result.matches {
            for group in &page_match.locations {
                for rect in group_to_points(group, self.dpi) {
                    let annotation = HighlightAnnotation {
                        id: Uuid::new_v4().to_string(),
                        page: page_match.page,
                        rect,
                        tag: self.tag.clone(),
                    };
                    let id = annotation.id.clone();
                    surface.add_annotation(annotation).await?;
                    self.painted.push(id);
                }
            }
        }

        tracing::debug!(
            count = self.painted.len(),
            tag = %self.tag,
            "Painted search highlights"
        );

        Ok(self.painted.len())
    }

    /// Remove this painter's overlays from the surface
    pub async fn clear(&mut self, surface: &dyn AnnotationSurface) -> Result<(), ViewerError> {
        if self.painted.is_empty() {
            return Ok(());
        }
        surface.delete_annotations(&self.painted).await?;
        self.painted.clear();
        Ok(())
    }

    /// Navigate the surface to a highlight's page
    pub async fn focus(
        &self,
        surface: &dyn AnnotationSurface,
        unit: &HighlightUnit,
    ) -> Result<(), ViewerError> {
        surface.set_current_page(unit.page).await
    }

    /// React to the surface's load lifecycle
    ///
    /// A reload (successful or failed) discards whatever was drawn on the
    /// previous document instance, so the painter forgets its ids instead of
    /// trying to delete overlays that no longer exist.
    pub fn on_event(&mut self, event: &ViewerEvent) {
        match event {
            ViewerEvent::DocumentLoaded => self.painted.clear(),
            ViewerEvent::DocumentLoadFailed(reason) => {
                tracing::warn!(reason = %reason, "Document load failed, dropping highlight state");
                self.painted.clear();
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::highlight::{to_points, HighlightIndex, PixelRect};
    use crate::search::{MatchGroup, PageMatch};

    /// Surface double that records calls
    #[derive(Default)]
    struct MockSurface {
        annotations: Mutex<Vec<HighlightAnnotation>>,
        current_page: Mutex<Option<u32>>,
    }

    #[async_trait]
    impl AnnotationSurface for MockSurface {
        async fn load_document(&self, _bytes: &[u8], _file_name: &str) -> Result<(), ViewerError> {
            Ok(())
        }

        async fn set_current_page(&self, page: u32) -> Result<(), ViewerError> {
            *self.current_page.lock().unwrap() = Some(page);
            Ok(())
        }

        async fn add_annotation(
            &self,
            annotation: HighlightAnnotation,
        ) -> Result<(), ViewerError> {
            self.annotations.lock().unwrap().push(annotation);
            Ok(())
        }

        async fn delete_annotations(&self, ids: &[String]) -> Result<(), ViewerError> {
            self.annotations
                .lock()
                .unwrap()
                .retain(|a| !ids.contains(&a.id));
            Ok(())
        }
    }

    fn rect(left: f64, top: f64) -> PixelRect {
        PixelRect {
            left,
            top,
            width: 300.0,
            height: 50.0,
        }
    }

    fn sample_result() -> SearchResult {
        SearchResult {
            success: true,
            error: None,
            total_matches: 2,
            total_pages: 6,
            pages_with_matches: 2,
            query: "alpha".to_string(),
            matches: vec![
                PageMatch {
                    page: 2,
                    locations: vec![MatchGroup {
                        matched_text: "alpha beta".to_string(),
                        context: "… alpha beta …".to_string(),
                        // Wrapped across two lines
                        locations: vec![rect(1500.0, 300.0), rect(150.0, 370.0)],
                    }],
                },
                PageMatch {
                    page: 4,
                    locations: vec![MatchGroup {
                        matched_text: "alpha".to_string(),
                        context: "… alpha …".to_string(),
                        locations: vec![rect(600.0, 900.0)],
                    }],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_paint_draws_every_rect() {
        let surface = MockSurface::default();
        let mut painter = HighlightPainter::new();

        let count = painter.paint(&surface, &sample_result()).await.unwrap();

        assert_eq!(count, 3);
        let annotations = surface.annotations.lock().unwrap();
        assert_eq!(annotations.len(), 3);
        assert!(annotations.iter().all(|a| a.tag == HIGHLIGHT_TAG));
        // First rect of the wrapped match, converted at 300 dpi
        assert_eq!(annotations[0].page, 2);
        assert_eq!(annotations[0].rect.left, 360.0);
        assert_eq!(annotations[0].rect.height, 12.0);
        assert_eq!(annotations[2].page, 4);
    }

    #[tokio::test]
    async fn test_repaint_replaces_own_overlays_only() {
        let surface = MockSurface::default();

        // A foreign annotation someone else drew
        surface
            .add_annotation(HighlightAnnotation {
                id: "foreign".to_string(),
                page: 1,
                rect: to_points(rect(0.0, 0.0), SCAN_DPI),
                tag: "user-note".to_string(),
            })
            .await
            .unwrap();

        let mut painter = HighlightPainter::new();
        painter.paint(&surface, &sample_result()).await.unwrap();
        painter.paint(&surface, &sample_result()).await.unwrap();

        let annotations = surface.annotations.lock().unwrap();
        // 1 foreign + 3 from the latest paint; the first paint was removed
        assert_eq!(annotations.len(), 4);
        assert!(annotations.iter().any(|a| a.id == "foreign"));
    }

    #[tokio::test]
    async fn test_clear_removes_all_owned() {
        let surface = MockSurface::default();
        let mut painter = HighlightPainter::new();
        painter.paint(&surface, &sample_result()).await.unwrap();

        painter.clear(&surface).await.unwrap();

        assert!(surface.annotations.lock().unwrap().is_empty());
        assert!(painter.painted_ids().is_empty());
    }

    #[tokio::test]
    async fn test_focus_follows_navigation() {
        let surface = MockSurface::default();
        let painter = HighlightPainter::new();
        let result = sample_result();
        let mut index = HighlightIndex::new(&result);

        // Wrapped match counts once; next lands on the page-4 match
        index.next();
        painter
            .focus(&surface, index.current().unwrap())
            .await
            .unwrap();

        assert_eq!(*surface.current_page.lock().unwrap(), Some(4));
    }

    #[tokio::test]
    async fn test_reload_forgets_painted_ids() {
        let surface = MockSurface::default();
        let mut painter = HighlightPainter::new();
        painter.paint(&surface, &sample_result()).await.unwrap();

        painter.on_event(&ViewerEvent::DocumentLoaded);

        assert!(painter.painted_ids().is_empty());
    }
}
