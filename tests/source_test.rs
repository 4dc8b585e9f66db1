//! Integration tests for source URL handling.

use docdeck::source::{classify_url, decode_body, is_document_url, resolve, validate_link};
use docdeck::{Error, PageType};

const PUBLISHED_DOC: &str = "https://docs.google.com/document/d/e/2PACX-1vQ/pub";
const PUBLISHED_SHEET: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR/pub";

#[test]
fn test_resolve_published_links() {
    assert_eq!(resolve(PUBLISHED_DOC).unwrap(), PageType::Document);
    assert_eq!(resolve(PUBLISHED_SHEET).unwrap(), PageType::Spreadsheet);
}

#[test]
fn test_resolve_checks_link_kind_first() {
    // A sharing link to a document is reported as the wrong kind of link,
    // not as an unsupported source.
    let result = resolve("https://docs.google.com/document/d/1AbC/edit?usp=sharing");
    assert!(matches!(result, Err(Error::WrongLinkKind(_))));
}

#[test]
fn test_other_hosts_skip_link_check() {
    assert!(validate_link("https://example.com/page").is_ok());

    let result = resolve("https://example.com/page");
    assert!(matches!(result, Err(Error::UnsupportedSource(_))));
}

#[test]
fn test_classify_ignores_link_kind() {
    let kind = classify_url("https://docs.google.com/document/d/1AbC/edit").unwrap();
    assert_eq!(kind, PageType::Document);
}

#[test]
fn test_is_document_url() {
    assert!(is_document_url(PUBLISHED_DOC));
    assert!(!is_document_url(PUBLISHED_SHEET));
    assert!(!is_document_url("https://docs.google.com/document/d/1AbC/edit"));
}

#[test]
fn test_error_messages_name_url() {
    let err = resolve("https://example.com/x").unwrap_err();
    assert!(err.to_string().contains("https://example.com/x"));
}

#[test]
fn test_decode_body() {
    assert_eq!(decode_body("a\u{a0}b".as_bytes()), "a b");
    assert_eq!(decode_body(&[b'o', b'k', 0xFF]), "ok\u{fffd}");
}

#[test]
fn test_page_type_serializes_lowercase() {
    let json = serde_json::to_string(&PageType::Spreadsheet).unwrap();
    assert_eq!(json, "\"spreadsheet\"");
    assert_eq!(PageType::Document.to_string(), "document");
}
