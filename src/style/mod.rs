//! Class-based styling.
//!
//! [`StyleMap`] resolves the document's class stylesheets once; the
//! [`StyleApplier`] then inlines those declarations into table cell markup.

mod applier;
mod resolver;

pub use applier::{Position, Simplification, StyleApplier};
pub use resolver::{resolve_rule, StyleMap};
