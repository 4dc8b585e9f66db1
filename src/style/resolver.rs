//! Class stylesheet resolution.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// A `.c<N>{...}` rule block with a one or two digit class suffix.
static RULE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.c\d{1,2}\{[^}]+\}").unwrap());

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"c\d+").unwrap());

/// Resolved properties with the declaration that counts as default, in
/// output order.
const PROPERTIES: [(&str, &str); 5] = [
    ("color", "color:#000000"),
    ("font-style", "font-style:normal"),
    ("font-weight", "font-weight:400"),
    ("text-decoration", "text-decoration:none"),
    ("vertical-align", "vertical-align:baseline"),
];

/// Declaration patterns anchored on the preceding `;` or `{`.
static DECLARATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    PROPERTIES
        .iter()
        .map(|(name, default)| {
            let pattern = format!(r"[;{{]{}:[^;^}}\s]+[;}}]", regex::escape(name));
            (Regex::new(&pattern).unwrap(), *default)
        })
        .collect()
});

/// Mapping from class name to its non-default declarations.
///
/// Lookups are total: an unknown class resolves to no declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    rules: HashMap<String, Vec<String>>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style map from one stylesheet.
    pub fn from_css(css: &str) -> Self {
        let mut map = Self::new();
        map.extend_from_css(css);
        map
    }

    /// Build a style map from every stylesheet of a document.
    ///
    /// A class defined again in a later stylesheet replaces the earlier rule.
    pub fn from_stylesheets<I, S>(sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for css in sheets {
            map.extend_from_css(css.as_ref());
        }
        map
    }

    /// Add the rules of a stylesheet.
    pub fn extend_from_css(&mut self, css: &str) {
        for block in RULE_BLOCK.find_iter(css) {
            let block = block.as_str();
            let Some(name) = CLASS_NAME.find(block) else {
                continue;
            };
            self.rules
                .insert(name.as_str().to_string(), resolve_rule(block));
        }
    }

    /// Get the declarations of a class.
    pub fn declarations(&self, class: &str) -> &[String] {
        self.rules.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a class has a rule (possibly empty).
    pub fn contains(&self, class: &str) -> bool {
        self.rules.contains_key(class)
    }

    /// Get the number of classes.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Resolve one rule block into its non-default declarations.
///
/// Only the first occurrence of each property counts. Each declaration is
/// returned without its surrounding delimiters, e.g. `color:#ff0000`.
pub fn resolve_rule(block: &str) -> Vec<String> {
    DECLARATIONS
        .iter()
        .filter_map(|(pattern, default)| {
            let found = pattern.find(block)?.as_str();
            if found.contains(default) {
                return None;
            }
            Some(strip_delimiters(found).to_string())
        })
        .collect()
}

fn strip_delimiters(declaration: &str) -> &str {
    let mut chars = declaration.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
