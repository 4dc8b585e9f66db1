//! Source URL classification and body decoding.
//!
//! Fetching is left to the caller; this module only decides whether a URL
//! can feed the outline pipeline and normalizes the downloaded bytes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Kind of page a source URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// A published document, rendered as HTML. Feeds the outline pipeline.
    Document,
    /// A published spreadsheet. Handled by a different pipeline.
    Spreadsheet,
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageType::Document => write!(f, "document"),
            PageType::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

const DOCUMENT_MARKER: &str = "/document/";
const SPREADSHEET_MARKER: &str = "/spreadsheets/";
const HOSTED_PREFIX: &str = "https://docs.google.com/";
const PUBLISHED_SUFFIX: &str = "pub";

/// Classify a URL by its path markers.
///
/// # Returns
/// * `Ok(PageType::Document)` if the URL contains `/document/`
/// * `Ok(PageType::Spreadsheet)` if the URL contains `/spreadsheets/`
/// * `Err(Error::UnsupportedSource)` otherwise
///
/// # Example
/// ```
/// use docdeck::source::{classify_url, PageType};
///
/// let kind = classify_url("https://docs.google.com/document/d/e/abc/pub").unwrap();
/// assert_eq!(kind, PageType::Document);
/// ```
pub fn classify_url(url: &str) -> Result<PageType> {
    if url.contains(DOCUMENT_MARKER) {
        Ok(PageType::Document)
    } else if url.contains(SPREADSHEET_MARKER) {
        Ok(PageType::Spreadsheet)
    } else {
        Err(Error::UnsupportedSource(url.to_string()))
    }
}

/// Reject sharing links for hosted documents.
///
/// Hosted documents must be given by their published link, which ends in
/// `pub`. URLs on other hosts are not checked.
pub fn validate_link(url: &str) -> Result<()> {
    if url.starts_with(HOSTED_PREFIX) && !url.ends_with(PUBLISHED_SUFFIX) {
        return Err(Error::WrongLinkKind(url.to_string()));
    }
    Ok(())
}

/// Validate the link kind, then classify the URL.
pub fn resolve(url: &str) -> Result<PageType> {
    validate_link(url)?;
    let kind = classify_url(url)?;
    log::debug!("Resolved {} as {}", url, kind);
    Ok(kind)
}

/// Decode a downloaded body into text ready for parsing.
///
/// Invalid UTF-8 is replaced, and non-breaking spaces become plain spaces so
/// that sentinel and link comparisons see ordinary whitespace.
pub fn decode_body(bytes: &[u8]) -> String {
    normalize_spaces(&String::from_utf8_lossy(bytes))
}

/// Replace non-breaking spaces with ordinary spaces.
pub fn normalize_spaces(text: &str) -> String {
    text.replace('\u{a0}', " ")
}

/// Check if a URL can feed the outline pipeline.
pub fn is_document_url(url: &str) -> bool {
    matches!(resolve(url), Ok(PageType::Document))
}
