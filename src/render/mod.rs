//! Rendering module for converting outlines to output formats.

mod json;
mod org;

pub use json::{to_json, JsonFormat};
pub use org::to_org;
