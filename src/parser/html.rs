//! HTML parser built on html5ever.

use crate::error::Result;
use crate::model::{Block, Document, Element, Node, Tag};
use crate::source;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::fs;
use std::path::Path;

const TITLE_ID: &str = "title";

/// HTML document parser.
///
/// Parses the exported page once into an owned [`Document`]: the deck title,
/// the stylesheet texts and the top-level paragraphs and tables.
pub struct HtmlParser {
    html: String,
}

impl HtmlParser {
    /// Create a parser over decoded HTML text.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Create a parser from raw bytes, normalizing them like a download.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::new(source::decode_body(data))
    }

    /// Open an HTML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(Self::from_bytes(&data))
    }

    /// Parse the document.
    pub fn parse(&self) -> Result<Document> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut self.html.as_bytes())?;

        let mut root = Element::new(Tag::Other("#document".into()));
        root.children = convert_children(&dom.document);

        let mut document = Document::new(find_title(&root));
        for style in root.descendants(&Tag::Other("style".into())) {
            document.add_stylesheet(style.text_content());
        }
        collect_blocks(root, &mut document);

        log::debug!(
            "Parsed \"{}\": {} stylesheets, {} blocks",
            document.title,
            document.stylesheets.len(),
            document.block_count()
        );

        Ok(document)
    }
}

/// Parse HTML text into a document.
pub fn parse_html(html: &str) -> Result<Document> {
    HtmlParser::new(html).parse()
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle.children.borrow().iter().filter_map(convert).collect()
}

fn convert(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let mut el = Element::new(Tag::from_name(&name.local));
            for attr in attrs.borrow().iter() {
                let key: &str = &attr.name.local;
                if key == "class" {
                    el.classes = attr.value.split_whitespace().map(String::from).collect();
                } else {
                    el.attrs.push((key.to_string(), attr.value.to_string()));
                }
            }
            el.children = convert_children(handle);
            Some(Node::Element(el))
        }
        // Comments, doctypes and processing instructions carry no content.
        _ => None,
    }
}

/// Title from `id="title"`, falling back to `<title>`.
fn find_title(root: &Element) -> String {
    if let Some(el) = find_element(root, &|el| el.attr("id") == Some(TITLE_ID)) {
        return el.text_content();
    }
    match find_element(root, &|el| el.tag.is("title")) {
        Some(el) => el.text_content(),
        None => {
            log::warn!("Document has no title element, using an empty deck name");
            String::new()
        }
    }
}

fn find_element<'a, F>(el: &'a Element, pred: &F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    for child in &el.children {
        if let Node::Element(child) = child {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = find_element(child, pred) {
                return Some(found);
            }
        }
    }
    None
}

/// Move paragraphs and tables into the document, in order.
///
/// A table is taken whole; its inner paragraphs belong to its cells.
fn collect_blocks(el: Element, document: &mut Document) {
    for child in el.children {
        if let Node::Element(child) = child {
            if matches!(child.tag, Tag::Paragraph | Tag::Table) {
                if let Some(block) = Block::from_element(child) {
                    document.add_block(block);
                }
            } else {
                collect_blocks(child, document);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><title>Fallback</title>
        <style>.c1{color:#ff0000}</style></head>
        <body><div id="title">Geography</div>
        <div><p class="c2"><span>Intro</span></p></div>
        <table><tr><td><p><span>Capitals</span></p></td></tr></table>
        <style>.c3{font-weight:700}</style>
        </body></html>"#;

    #[test]
    fn test_parse_title_and_styles() {
        let doc = parse_html(PAGE).unwrap();
        assert_eq!(doc.title, "Geography");
        assert_eq!(doc.stylesheets.len(), 2);
        assert_eq!(doc.stylesheets[0], ".c1{color:#ff0000}");
        // Body stylesheets are kept after head ones, in document order.
        assert_eq!(doc.stylesheets[1], ".c3{font-weight:700}");
    }

    #[test]
    fn test_parse_blocks_in_order() {
        let doc = parse_html(PAGE).unwrap();
        assert_eq!(doc.block_count(), 2);
        assert!(doc.blocks[0].is_paragraph());
        assert_eq!(doc.blocks[0].element().classes, vec!["c2"]);
        assert!(matches!(doc.blocks[1], Block::Table(_)));
    }

    #[test]
    fn test_title_fallback() {
        let doc = parse_html("<html><head><title>Only</title></head><body></body></html>").unwrap();
        assert_eq!(doc.title, "Only");

        let doc = parse_html("<p><span>x</span></p>").unwrap();
        assert_eq!(doc.title, "");
    }

    #[test]
    fn test_comments_dropped() {
        let doc = parse_html("<p><!-- note --><span>x</span></p>").unwrap();
        let p = doc.blocks[0].element();
        assert_eq!(p.children.len(), 1);
    }

    #[test]
    fn test_from_bytes_normalizes_nbsp() {
        let doc = HtmlParser::from_bytes("<p><span>a\u{a0}b</span></p>".as_bytes())
            .parse()
            .unwrap();
        assert_eq!(doc.blocks[0].element().text_content(), "a b");
    }
}
