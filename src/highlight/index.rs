//! Flattened highlight index and navigation cursor
//!
//! The nested per-page result shape is awkward for "next match" navigation,
//! so it is flattened into one unit per match group in document order:
//! ascending page, then reading order within the page. The index is a pure
//! function of the result; rebuild it whenever the result changes.

use crate::search::{MatchGroup, SearchResult};

use super::types::PixelRect;

/// One navigable highlight: a single match group on a single page
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightUnit {
    /// Page number (1-indexed)
    pub page: u32,

    /// Index of the originating page entry in `SearchResult::matches`
    pub match_index: usize,

    /// The match group, including every rectangle it spans
    pub group: MatchGroup,
}

impl HighlightUnit {
    /// Rectangles of this match in scanner pixel space
    pub fn locations(&self) -> &[PixelRect] {
        &self.group.locations
    }
}

/// Flat, ordered view over a result's matches with a selection cursor
///
/// A fresh index auto-selects the first unit. `clear` moves to an explicit
/// "nothing selected" state, which is distinct from having unit 0 selected.
#[derive(Debug, Clone)]
pub struct HighlightIndex {
    units: Vec<HighlightUnit>,
    cursor: Option<usize>,
}

impl HighlightIndex {
    /// Flatten a search result into document order
    pub fn new(result: &SearchResult) -> Self {
        let mut units = Vec::new();
        for (match_index, page_match) in result.matches.iter().enumerate() {
            for group in &page_match.locations {
                units.push(HighlightUnit {
                    page: page_match.page,
                    match_index,
                    group: group.clone(),
                });
            }
        }

        let cursor = if units.is_empty() { None } else { Some(0) };
        Self { units, cursor }
    }

    /// Number of navigable highlights
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the result had no matches
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units in document order
    pub fn units(&self) -> &[HighlightUnit] {
        &self.units
    }

    /// Position of the selected unit, if any
    pub fn selected(&self) -> Option<usize> {
        self.cursor
    }

    /// The selected unit, if any
    pub fn current(&self) -> Option<&HighlightUnit> {
        self.cursor.and_then(|i| self.units.get(i))
    }

    /// Advance the cursor, wrapping past the last unit to the first
    ///
    /// From the cleared state this selects unit 0. No-op when empty.
    pub fn next(&mut self) {
        if self.units.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1) % self.units.len(),
            None => 0,
        });
    }

    /// Step the cursor back, wrapping from the first unit to the last
    pub fn previous(&mut self) {
        if self.units.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) if i > 0 => i - 1,
            _ => self.units.len() - 1,
        });
    }

    /// Deselect; `current` returns `None` until the cursor moves again
    pub fn clear(&mut self) {
        self.cursor = None;
    }
}
