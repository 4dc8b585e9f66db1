//! Image placeholder rewriting.

use crate::model::{Element, Node, Tag};
use once_cell::sync::Lazy;
use regex::Regex;

static WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"width: (.+?);").unwrap());
static HEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"height: (.+?);").unwrap());

/// Source and dimensions of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    /// Image source, empty when absent
    pub src: String,
    /// Width from the inline style, empty when absent
    pub width: String,
    /// Height from the inline style, empty when absent
    pub height: String,
}

impl ImageRef {
    /// Read an image element. Missing attributes yield empty fields.
    pub fn from_element(img: &Element) -> Self {
        let style = img.attr("style").unwrap_or_default();
        Self {
            src: img.attr("src").unwrap_or_default().to_string(),
            width: capture(&WIDTH, style),
            height: capture(&HEIGHT, style),
        }
    }

    /// Get the textual placeholder.
    pub fn placeholder(&self) -> String {
        format!(
            "[image={}, height={}, width={}]",
            self.src, self.height, self.width
        )
    }
}

fn capture(pattern: &Regex, style: &str) -> String {
    pattern
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Replace every image in a cell with its placeholder text.
///
/// The placeholder lands right after the element wrapping the image, and a
/// wrapper left empty by the removal is pruned. An image sitting directly in
/// the cell is replaced where it stands. The cell itself is never removed.
///
/// Returns the number of images rewritten.
pub fn rewrite_images(cell: &mut Element) -> usize {
    let mut count = 0;
    rewrite_within(cell, true, &mut count);
    if count > 0 {
        log::debug!("Rewrote {} images into placeholders", count);
    }
    count
}

/// Nodes to place after an element, and whether removals emptied it.
struct Hoisted {
    placeholders: Vec<Node>,
    emptied: bool,
}

fn rewrite_within(el: &mut Element, is_cell: bool, count: &mut usize) -> Hoisted {
    let children = std::mem::take(&mut el.children);
    let mut placeholders = Vec::new();
    let mut removed = false;

    for child in children {
        match child {
            Node::Element(img) if img.tag == Tag::Image => {
                *count += 1;
                let text = Node::Text(ImageRef::from_element(&img).placeholder());
                if is_cell {
                    el.children.push(text);
                } else {
                    placeholders.push(text);
                    removed = true;
                }
            }
            Node::Element(mut child) => {
                let hoisted = rewrite_within(&mut child, false, count);
                if hoisted.emptied {
                    removed = true;
                } else {
                    el.children.push(Node::Element(child));
                }
                el.children.extend(hoisted.placeholders);
            }
            text => el.children.push(text),
        }
    }

    Hoisted {
        placeholders,
        emptied: removed && el.children.is_empty(),
    }
}
