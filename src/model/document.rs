//! Document-level types.

use super::{Element, Tag};
use serde::{Deserialize, Serialize};

/// A parsed source document.
///
/// Holds everything the outline pipeline reads: the deck title, the raw text
/// of every stylesheet, and the top-level blocks in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document title, used as the deck name
    pub title: String,

    /// Raw text of each `<style>` element
    pub stylesheets: Vec<String>,

    /// Top-level paragraphs and tables
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheets: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Add a stylesheet.
    pub fn add_stylesheet(&mut self, css: impl Into<String>) {
        self.stylesheets.push(css.into());
    }

    /// Add a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A top-level block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "element", rename_all = "lowercase")]
pub enum Block {
    /// A `<p>` element
    Paragraph(Element),
    /// A `<table>` element
    Table(Element),
}

impl Block {
    /// Wrap an element as a block, if it is a paragraph or table.
    pub fn from_element(el: Element) -> Option<Self> {
        match el.tag {
            Tag::Paragraph => Some(Block::Paragraph(el)),
            Tag::Table => Some(Block::Table(el)),
            _ => None,
        }
    }

    /// Get the underlying element.
    pub fn element(&self) -> &Element {
        match self {
            Block::Paragraph(el) | Block::Table(el) => el,
        }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }
}
