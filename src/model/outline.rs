//! Outline types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of an outline line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Bare paragraph text
    #[default]
    Body,
    /// Heading derived from a table's first row (`*`)
    Heading,
    /// Sub-heading derived from a later table row (`**`)
    SubHeading,
}

impl Depth {
    /// Get the marker prefix, if any.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Depth::Body => None,
            Depth::Heading => Some("*"),
            Depth::SubHeading => Some("**"),
        }
    }
}

/// A single line of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineLine {
    /// Heading depth
    pub depth: Depth,

    /// Line content (plain text or cell markup)
    pub content: String,
}

impl OutlineLine {
    /// Create a line with the given depth.
    pub fn new(depth: Depth, content: impl Into<String>) -> Self {
        Self {
            depth,
            content: content.into(),
        }
    }

    /// Create a bare paragraph line.
    pub fn body(content: impl Into<String>) -> Self {
        Self::new(Depth::Body, content)
    }

    /// Create a heading line.
    pub fn heading(content: impl Into<String>) -> Self {
        Self::new(Depth::Heading, content)
    }

    /// Create a sub-heading line.
    pub fn sub_heading(content: impl Into<String>) -> Self {
        Self::new(Depth::SubHeading, content)
    }
}

impl fmt::Display for OutlineLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.depth.marker() {
            Some(marker) => write!(f, "{} {}", marker, self.content),
            None => write!(f, "{}", self.content),
        }
    }
}

/// An ordered outline with its deck title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Deck title
    pub title: String,

    /// Lines in document order
    pub lines: Vec<OutlineLine>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Add a line.
    pub fn push(&mut self, line: OutlineLine) {
        self.lines.push(line);
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the outline has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the lines in their textual `*`/`**`/bare form.
    pub fn to_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }

    /// Build the record handed to deck assembly.
    pub fn to_record(&self) -> DeckRecord {
        DeckRecord {
            deck_name: self.title.clone(),
            data: self.to_lines(),
        }
    }
}

/// The `{deckName, data}` record consumed by deck assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    /// Deck name (the document title)
    #[serde(rename = "deckName")]
    pub deck_name: String,

    /// Outline lines in textual form
    pub data: Vec<String>,
}
