//! Outline building module.

mod builder;
pub mod comment;
mod options;

pub use builder::{cell_content, paragraph_line, OutlineBuilder};
pub use comment::{CommentRegionFilter, RegionState, Sentinel, Verdict};
pub use options::{OutlineOptions, DEFAULT_COMMENT_END, DEFAULT_COMMENT_START};
