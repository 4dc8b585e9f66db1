//! Document parsing module.

mod html;

pub use html::{parse_html, HtmlParser};
