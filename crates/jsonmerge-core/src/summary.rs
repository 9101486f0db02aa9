//! Plain-text merge summaries.

use serde_json::Value;

use crate::normalize::fields::*;
use crate::reader::Record;

const NOT_AVAILABLE: &str = "N/A";

/// Render a summary listing every merged record.
pub fn render_summary(records: &[Record]) -> String {
    let mut out = format!(
        "=== Merge Summary ===\nTotal items merged: {}\n\n",
        records.len()
    );
    for record in records {
        out.push_str(&render_record(record));
    }
    out
}

fn render_record(record: &Record) -> String {
    [
        format!(
            "• {} ({})",
            display(record.get(NAME)),
            display(record.get(SLUG))
        ),
        format!("  Category: {}", display(record.get(CATEGORY))),
        format!("  Thumb: {}", display(record.get(THUMB))),
        format!("  Websites: {}", count(record.get(WEBSITES))),
        format!("  Gallery: {}", count(record.get(GALLERY))),
        format!("  Views: {}", display(record.get(VIEWS))),
        format!("  Created: {}", display(record.get(CREATED_AT))),
    ]
    .join("\n")
        + "\n\n"
}

fn display(value: Option<&Value>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Element count of a list or map field; scalars and missing fields count 0.
fn count(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(map)) => map.len(),
        Some(Value::String(s)) => s.chars().count(),
        _ => 0,
    }
}
