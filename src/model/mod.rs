//! Document model types.
//!
//! This module defines the owned tree produced by parsing and the outline
//! produced by the pipeline. Nodes are exclusively owned by their parent and
//! are rewritten in place while the outline is built.

mod document;
mod node;
mod outline;
pub mod serialize;

pub use document::{Block, Document};
pub use node::{Element, Node, Tag};
pub use outline::{DeckRecord, Depth, Outline, OutlineLine};
