//! Error types for docdeck library.

use std::io;
use thiserror::Error;

/// Result type alias for docdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving a source or building an outline.
///
/// The outline transformation itself is total over parseable input; these
/// variants cover the steps around it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The URL points at neither a document nor a spreadsheet.
    #[error("Unsupported source: {0} is not a published document or spreadsheet")]
    UnsupportedSource(String),

    /// A sharing link was supplied where a published link is required.
    #[error("Wrong link kind: {0} is a sharing link, use the published link instead")]
    WrongLinkKind(String),

    /// Error during rendering (org text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
