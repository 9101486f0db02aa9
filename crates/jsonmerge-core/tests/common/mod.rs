//! Common test utilities for jsonmerge-core integration tests.

use std::path::{Path, PathBuf};

use jsonmerge_core::Record;
use serde_json::Value;
use tempfile::TempDir;

/// Fixed `createdAt` stamp used for records created during a test run.
pub const RUN_STAMP: &str = "2026-10-18T09:30:00.000Z";

/// Temporary workspace holding input files and the merge output.
pub struct Workspace {
    /// Backing directory, removed on drop
    pub dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes an input file and returns its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write input file");
        path
    }

    /// Path for the merged output.
    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out").join("merged_output.txt")
    }
}

/// Reads a merged output file back as records.
pub fn read_output(path: &Path) -> Vec<Record> {
    let text = std::fs::read_to_string(path).expect("read output");
    match serde_json::from_str::<Value>(&text).expect("output is JSON") {
        Value::Array(items) => items
            .into_iter()
            .map(|v| match v {
                Value::Object(map) => map,
                other => panic!("non-object in output: {other}"),
            })
            .collect(),
        other => panic!("output is not an array: {other}"),
    }
}

/// Slugs of records in order.
pub fn slugs(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}
