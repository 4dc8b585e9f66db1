//! Per-cell content rewriting.
//!
//! Table cells are rewritten in two passes: images become textual
//! placeholders on the tree, then cloze aliases are rewritten on the
//! serialized markup so that nested markup inside a cloze survives.

mod cloze;
mod image;

pub use cloze::{find_alias, rewrite_cloze_aliases, ClozeAlias};
pub use image::{rewrite_images, ImageRef};
