//! Owned node tree for parsed document content.

use serde::{Deserialize, Serialize};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Tag kind of an element.
///
/// The pipeline only distinguishes the kinds it acts on; every other element
/// keeps its lowercase name in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// `<p>`
    Paragraph,
    /// `<table>`
    Table,
    /// `<tr>`
    Row,
    /// `<td>`
    Cell,
    /// `<span>`
    Span,
    /// `<a>`
    Link,
    /// `<img>`
    Image,
    /// Any other element, by name
    Other(String),
}

impl Tag {
    /// Map an element name to its tag kind.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "p" => Tag::Paragraph,
            "table" => Tag::Table,
            "tr" => Tag::Row,
            "td" => Tag::Cell,
            "span" => Tag::Span,
            "a" => Tag::Link,
            "img" => Tag::Image,
            other => Tag::Other(other.to_string()),
        }
    }

    /// Get the element name.
    pub fn name(&self) -> &str {
        match self {
            Tag::Paragraph => "p",
            Tag::Table => "table",
            Tag::Row => "tr",
            Tag::Cell => "td",
            Tag::Span => "span",
            Tag::Link => "a",
            Tag::Image => "img",
            Tag::Other(name) => name,
        }
    }

    /// Check if this is a void element.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name())
    }

    /// Check if this tag is the named element.
    pub fn is(&self, name: &str) -> bool {
        self.name() == name
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// An element with children
    Element(Element),
    /// A text run
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Get the concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element node.
///
/// Class names are kept apart from the other attributes because styling
/// consumes them; `attrs` preserves source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag kind
    pub tag: Tag,

    /// Class names, in attribute order
    pub classes: Vec<String>,

    /// Attributes other than `class`
    pub attrs: Vec<(String, String)>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class name and return self.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute and return self.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child and return self.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Append text onto an attribute, creating it when absent.
    pub fn append_attr(&mut self, name: &str, suffix: &str) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1.push_str(suffix),
            None => self.attrs.push((name.to_string(), suffix.to_string())),
        }
    }

    /// Check if the element carries class names.
    pub fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Check if the element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Collect descendant elements of the given kind in document order.
    ///
    /// Matches nested inside other matches are included.
    pub fn descendants(&self, tag: &Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_descendants(self, tag, &mut found);
        found
    }

    /// Concatenated text of every descendant element of the given kind.
    pub fn descendant_text(&self, tag: &Tag) -> String {
        self.descendants(tag)
            .iter()
            .map(|el| el.text_content())
            .collect()
    }

    /// Find the first descendant element matching a predicate.
    pub fn find_mut<F>(&mut self, pred: &F) -> Option<&mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        for child in self.children.iter_mut() {
            if let Node::Element(el) = child {
                if pred(el) {
                    return Some(el);
                }
                if let Some(found) = el.find_mut(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Visit descendant elements of the given kind mutably, in document order.
    ///
    /// The walk does not descend into a visited element.
    pub fn for_each_mut<F>(&mut self, tag: &Tag, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        for child in self.children.iter_mut() {
            if let Node::Element(el) = child {
                if el.tag == *tag {
                    f(el);
                } else {
                    el.for_each_mut(tag, f);
                }
            }
        }
    }
}

fn collect_descendants<'a>(el: &'a Element, tag: &Tag, found: &mut Vec<&'a Element>) {
    for child in &el.children {
        if let Node::Element(child) = child {
            if child.tag == *tag {
                found.push(child);
            }
            collect_descendants(child, tag, found);
        }
    }
}
