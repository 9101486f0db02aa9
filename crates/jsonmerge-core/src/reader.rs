//! Reading record files.
//!
//! Inputs are JSON documents, but often saved with a `.txt` extension or
//! with stray whitespace and a byte-order mark around them. A file is accepted
//! when its trimmed text is bracketed like a JSON object or array; anything
//! else is rejected before parsing.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A single JSON object record.
pub type Record = Map<String, Value>;

const BOM: char = '\u{feff}';

/// Read and parse a record file.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    parse_document(path, &content)
}

/// Parse record file content. `path` is only used for error reporting.
pub fn parse_document(path: &Path, content: &str) -> Result<Value> {
    let text = content.trim_start_matches(BOM).trim();

    let bracketed = (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'));
    if !bracketed {
        return Err(Error::format(path));
    }

    serde_json::from_str(text).map_err(|e| Error::parse(path, e.to_string()))
}

/// Extract the object records from a parsed document.
///
/// An array yields its object elements in order, skipping anything else.
/// A single object yields itself. Empty objects and scalars yield nothing.
pub fn records_of(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        Value::Object(map) if !map.is_empty() => vec![map],
        _ => Vec::new(),
    }
}
