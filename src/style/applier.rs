//! Inline style application and tree simplification.

use super::StyleMap;
use crate::model::{Element, Node, Tag};

const STYLE_ATTR: &str = "style";
const DECLARATION_SUFFIX: &str = "; ";

/// Where a node sits relative to the styling root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Distance from the styling root (root = 0)
    pub depth: usize,
    /// Number of children of the node's parent, the node included
    pub siblings: usize,
}

/// Post-order rewrite rules applied to styled nodes.
///
/// Each rule replaces the matched node by its own children in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Simplification {
    /// A paragraph directly inside a cell that only wraps one node.
    ///
    /// Exported cells wrap plain text in a paragraph; `<td><p>x</p></td>`
    /// becomes `<td>x</td>`.
    UnwrapCellParagraph,

    /// A span with no attributes left after class removal.
    UnwrapBareSpan,
}

impl Simplification {
    /// Rules in evaluation order.
    pub const ALL: [Simplification; 2] = [
        Simplification::UnwrapCellParagraph,
        Simplification::UnwrapBareSpan,
    ];

    /// Check if the rule applies to a node.
    pub fn matches(self, el: &Element, position: Position) -> bool {
        match self {
            Simplification::UnwrapCellParagraph => {
                el.tag == Tag::Paragraph
                    && position.depth == 1
                    && position.siblings == 1
                    && el.children.len() == 1
            }
            Simplification::UnwrapBareSpan => el.tag == Tag::Span && el.attrs.is_empty(),
        }
    }

    /// Find the first rule that applies to a node.
    pub fn find(el: &Element, position: Position) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.matches(el, position))
    }

    /// Apply the rule, returning the nodes that replace the element.
    pub fn apply(self, el: Element) -> Vec<Node> {
        el.children
    }
}

/// Converts class-based styling into inline `style` attributes.
///
/// Only nodes carrying classes are rewritten, and the walk stops at nodes
/// without classes.
pub struct StyleApplier<'a> {
    styles: &'a StyleMap,
}

impl<'a> StyleApplier<'a> {
    /// Create an applier over a style map.
    pub fn new(styles: &'a StyleMap) -> Self {
        Self { styles }
    }

    /// Style an element and its descendants in place.
    ///
    /// The element itself is the root at depth 0 and is never replaced.
    pub fn apply(&self, root: &mut Element) {
        self.apply_at(root, 0);
    }

    /// Returns whether the element was styled.
    fn apply_at(&self, el: &mut Element, depth: usize) -> bool {
        if !el.has_classes() {
            return false;
        }

        let classes = std::mem::take(&mut el.classes);
        for class in &classes {
            for declaration in self.styles.declarations(class) {
                el.append_attr(STYLE_ATTR, declaration);
                el.append_attr(STYLE_ATTR, DECLARATION_SUFFIX);
            }
        }

        let children = std::mem::take(&mut el.children);
        let siblings = children.len();
        for child in children {
            match child {
                Node::Element(mut child) => {
                    if !self.apply_at(&mut child, depth + 1) {
                        el.children.push(Node::Element(child));
                        continue;
                    }
                    let position = Position {
                        depth: depth + 1,
                        siblings,
                    };
                    match Simplification::find(&child, position) {
                        Some(rule) => el.children.extend(rule.apply(child)),
                        None => el.children.push(Node::Element(child)),
                    }
                }
                text => el.children.push(text),
            }
        }
        true
    }
}
