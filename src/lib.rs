//! # docdeck
//!
//! Turns a published word-processor page into a depth-tagged outline ready
//! for flashcard import.
//!
//! The exported HTML is parsed once into an owned document tree. Tables become
//! a heading line from their first row followed by one sub-heading per later
//! row; the cell markup has its class-based styles inlined, images replaced
//! by placeholders and `$$...$$` aliases rewritten to cloze deletions.
//! Paragraphs become plain lines, and everything between the comment markers
//! is skipped.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docdeck::{outline_file, render};
//!
//! fn main() -> docdeck::Result<()> {
//!     let outline = outline_file("deck.html")?;
//!
//!     println!("{}", render::to_org(&outline));
//!     println!("{}", render::to_json(&outline, render::JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style inlining**: `.cN{...}` rules resolved to inline `style` attributes
//! - **Cloze aliases**: `$$text$$` and `$N$text$$` become `{{cN::text}}`
//! - **Image placeholders**: `<img>` replaced by `[image=..., height=..., width=...]`
//! - **Comment regions**: blocks between marker paragraphs are skipped
//! - **Source checks**: published-link validation and page classification

pub mod error;
pub mod model;
pub mod outline;
pub mod parser;
pub mod render;
pub mod rewrite;
pub mod source;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, DeckRecord, Depth, Document, Element, Node, Outline, OutlineLine, Tag,
};
pub use outline::{OutlineBuilder, OutlineOptions};
pub use parser::{parse_html, HtmlParser};
pub use render::JsonFormat;
pub use source::PageType;

use std::path::Path;

/// Parse an HTML file into a document.
///
/// The bytes are decoded the same way as a downloaded page.
///
/// # Example
///
/// ```no_run
/// use docdeck::parse_file;
///
/// let doc = parse_file("deck.html").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    HtmlParser::open(path)?.parse()
}

/// Convert HTML text to an outline with default options.
///
/// # Example
///
/// ```
/// use docdeck::to_outline;
///
/// let html = "<div id=\"title\">Deck</div><p><span>Intro</span></p>";
/// let outline = to_outline(html).unwrap();
/// assert_eq!(outline.title, "Deck");
/// assert_eq!(outline.to_lines(), vec!["Intro"]);
/// ```
pub fn to_outline(html: &str) -> Result<Outline> {
    to_outline_with_options(html, &OutlineOptions::default())
}

/// Convert HTML text to an outline with custom options.
///
/// # Example
///
/// ```
/// use docdeck::{to_outline_with_options, OutlineOptions};
///
/// let options = OutlineOptions::new().with_comment_markers("#skip", "#resume");
/// let html = "<p><span>#skip</span></p><p><span>hidden</span></p>\
///     <p><span>#resume</span></p><p><span>shown</span></p>";
/// let outline = to_outline_with_options(html, &options).unwrap();
/// assert_eq!(outline.to_lines(), vec!["shown"]);
/// ```
pub fn to_outline_with_options(html: &str, options: &OutlineOptions) -> Result<Outline> {
    let document = parse_html(html)?;
    Ok(OutlineBuilder::with_options(options.clone()).build(document))
}

/// Convert an HTML file to an outline.
///
/// # Example
///
/// ```no_run
/// use docdeck::outline_file;
///
/// let outline = outline_file("deck.html").unwrap();
/// for line in outline.to_lines() {
///     println!("{}", line);
/// }
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<Outline> {
    let document = parse_file(path)?;
    Ok(OutlineBuilder::new().build(document))
}

/// Convert a downloaded page body to an outline.
pub fn outline_bytes(data: &[u8]) -> Result<Outline> {
    let document = HtmlParser::from_bytes(data).parse()?;
    Ok(OutlineBuilder::new().build(document))
}

/// Builder for converting pages to outlines.
///
/// # Example
///
/// ```no_run
/// use docdeck::Docdeck;
///
/// let json = Docdeck::new()
///     .without_images()
///     .with_comment_markers("#hide", "#show")
///     .parse("deck.html")?
///     .to_json(docdeck::JsonFormat::Compact)?;
/// # Ok::<(), docdeck::Error>(())
/// ```
pub struct Docdeck {
    options: OutlineOptions,
}

impl Docdeck {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: OutlineOptions::default(),
        }
    }

    /// Set the comment region markers.
    pub fn with_comment_markers(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.options = self.options.with_comment_markers(start, end);
        self
    }

    /// Keep `<img>` elements in cell markup.
    pub fn without_images(mut self) -> Self {
        self.options = self.options.with_images(false);
        self
    }

    /// Leave `$$...$$` aliases untouched.
    pub fn without_cloze(mut self) -> Self {
        self.options = self.options.with_cloze(false);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Parse an HTML file and build its outline.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocdeckResult> {
        let document = parse_file(path)?;
        Ok(self.finish(document))
    }

    /// Parse a downloaded page body and build its outline.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DocdeckResult> {
        let document = HtmlParser::from_bytes(data).parse()?;
        Ok(self.finish(document))
    }

    /// Parse HTML text and build its outline.
    pub fn parse_str(self, html: &str) -> Result<DocdeckResult> {
        let document = parse_html(html)?;
        Ok(self.finish(document))
    }

    fn finish(self, document: Document) -> DocdeckResult {
        DocdeckResult {
            outline: OutlineBuilder::with_options(self.options).build(document),
        }
    }
}

impl Default for Docdeck {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of converting a page.
pub struct DocdeckResult {
    /// The built outline
    pub outline: Outline,
}

impl DocdeckResult {
    /// Render as org-style text.
    pub fn to_org(&self) -> String {
        render::to_org(&self.outline)
    }

    /// Render as the `{deckName, data}` JSON record.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.outline, format)
    }

    /// Get the deck record.
    pub fn record(&self) -> DeckRecord {
        self.outline.to_record()
    }

    /// Get the outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><style>.c1{font-weight:700}</style></head>
<body><div id="title">Geography</div>
<p><span>Intro</span></p>
<table><tr><td>Capitals</td></tr><tr><td class="c2"><span class="c1">$$Paris$$</span></td></tr></table>
</body></html>"#;

    #[test]
    fn test_docdeck_builder_default() {
        let builder = Docdeck::default();
        assert!(builder.options.rewrite_images);
        assert!(builder.options.rewrite_cloze);
    }

    #[test]
    fn test_docdeck_builder_chained() {
        let builder = Docdeck::new()
            .without_images()
            .without_cloze()
            .with_comment_markers("#a", "#b")
            .sequential();

        assert!(!builder.options.parallel);
        assert!(!builder.options.rewrite_images);
        assert!(!builder.options.rewrite_cloze);
        assert_eq!(builder.options.comment_start, "#a");
        assert_eq!(builder.options.comment_end, "#b");
    }

    #[test]
    fn test_to_outline() {
        let outline = to_outline(PAGE).unwrap();
        assert_eq!(outline.title, "Geography");
        assert_eq!(
            outline.to_lines(),
            vec![
                "Intro",
                "* Capitals",
                r#"** <span style="font-weight:700; ">{{c1::Paris}}</span>"#,
            ]
        );
    }

    #[test]
    fn test_parse_str_without_cloze() {
        let result = Docdeck::new().without_cloze().parse_str(PAGE).unwrap();
        let lines = result.outline().to_lines();
        assert!(lines[2].contains("$$Paris$$"));
    }

    #[test]
    fn test_outline_bytes_normalizes_nbsp() {
        let html = "<div id=\"title\">T</div><p><span>a\u{a0}b</span></p>";
        let outline = outline_bytes(html.as_bytes()).unwrap();
        assert_eq!(outline.to_lines(), vec!["a b"]);
    }

    #[test]
    fn test_result_record() {
        let result = Docdeck::new().parse_str(PAGE).unwrap();
        let record = result.record();
        assert_eq!(record.deck_name, "Geography");
        assert_eq!(record.data.len(), 3);
        assert!(result.to_org().starts_with("Intro\n* Capitals"));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/deck.html");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
