//! Elided comment regions.
//!
//! Authors bracket content they want left out of the deck with two sentinel
//! paragraphs. Everything from the opening sentinel through the closing one
//! is suppressed.

use super::options::{DEFAULT_COMMENT_END, DEFAULT_COMMENT_START};
use crate::model::{Block, Element, Tag};

/// Whether the walk is inside an elided region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegionState {
    /// Content is processed
    #[default]
    Outside,
    /// Content is suppressed
    Inside,
}

/// A sentinel paragraph kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Opens a region
    Start,
    /// Closes a region
    End,
}

/// Decision for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Build outline lines from the block
    Process,
    /// Drop the block
    Suppress,
}

/// Two-state filter over top-level blocks.
#[derive(Debug, Clone)]
pub struct CommentRegionFilter {
    state: RegionState,
    start_marker: String,
    end_marker: String,
}

impl CommentRegionFilter {
    /// Create a filter with the given markers.
    ///
    /// Markers are compared with spaces removed and case folded.
    pub fn new(start_marker: &str, end_marker: &str) -> Self {
        Self {
            state: RegionState::Outside,
            start_marker: fold(start_marker),
            end_marker: fold(end_marker),
        }
    }

    /// Get the current state.
    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Return to the outside state, for a new walk.
    pub fn reset(&mut self) {
        self.state = RegionState::Outside;
    }

    /// Classify a block as a sentinel. Only paragraphs can be sentinels.
    pub fn sentinel(&self, block: &Block) -> Option<Sentinel> {
        let Block::Paragraph(p) = block else {
            return None;
        };
        let text = sentinel_text(p);
        if text == self.start_marker {
            Some(Sentinel::Start)
        } else if text == self.end_marker {
            Some(Sentinel::End)
        } else {
            None
        }
    }

    /// Decide whether a block is processed, updating the state.
    pub fn admit(&mut self, block: &Block) -> Verdict {
        match (self.state, self.sentinel(block)) {
            (_, Some(Sentinel::Start)) => {
                if self.state == RegionState::Outside {
                    log::debug!("Entering comment region");
                }
                self.state = RegionState::Inside;
                Verdict::Suppress
            }
            (RegionState::Inside, Some(Sentinel::End)) => {
                log::debug!("Leaving comment region");
                self.state = RegionState::Outside;
                Verdict::Suppress
            }
            (RegionState::Inside, None) => Verdict::Suppress,
            // A stray end marker is ordinary content.
            (RegionState::Outside, _) => Verdict::Process,
        }
    }
}

impl Default for CommentRegionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_START, DEFAULT_COMMENT_END)
    }
}

/// Span text of a paragraph with spaces removed, lowercased.
pub fn sentinel_text(p: &Element) -> String {
    fold(&p.descendant_text(&Tag::Span))
}

fn fold(text: &str) -> String {
    text.replace(' ', "").to_lowercase()
}
