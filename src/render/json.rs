//! JSON rendering of the deck record.

use crate::error::{Error, Result};
use crate::model::Outline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an outline to the `{deckName, data}` JSON record.
pub fn to_json(outline: &Outline, format: JsonFormat) -> Result<String> {
    let record = outline.to_record();
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&record),
        JsonFormat::Compact => serde_json::to_string(&record),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
