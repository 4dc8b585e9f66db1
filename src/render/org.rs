//! Org-style text rendering.

use crate::model::Outline;

/// Render an outline as org-style text, one line per outline line.
pub fn to_org(outline: &Outline) -> String {
    outline.to_lines().join("\n")
}
