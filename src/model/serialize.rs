//! Markup serialization of the node tree.

use super::{Element, Node};

/// Serialize an element's children, without the element's own tags.
pub fn inner_html(el: &Element) -> String {
    let mut out = String::new();
    for child in &el.children {
        write_node(child, &mut out);
    }
    out
}

/// Serialize a node including its own tags.
pub fn outer_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_text(text, out),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    let name = el.tag.name();
    out.push('<');
    out.push_str(name);

    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        escape_attr(&el.classes.join(" "), out);
        out.push('"');
    }
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }

    if el.tag.is_void() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Escape text content. `>` is legal in text and kept verbatim.
fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}
