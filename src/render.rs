//! JSON rendering for extracted datasets.

use crate::error::{Error, Result};
use crate::model::Dataset;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a dataset to JSON.
pub fn to_json(dataset: &Dataset, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(dataset),
        JsonFormat::Compact => serde_json::to_string(dataset),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
