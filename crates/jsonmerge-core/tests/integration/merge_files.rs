//! End-to-end merges through `Merger::merge`.

use jsonmerge_core::{FileOutcome, MergeSettings, Merger, NoProgress};
use serde_json::json;

use crate::common::{RUN_STAMP, Workspace, read_output, slugs};

fn merger() -> Merger {
    Merger::new(MergeSettings::default()).with_created_at(RUN_STAMP)
}

#[test]
fn test_merges_objects_and_arrays() {
    let ws = Workspace::new();
    let a = ws.file(
        "alice.json",
        r#"{"slug": "alice", "name": "Alice", "createdAt": "2024-05-01T00:00:00.000Z"}"#,
    );
    let b = ws.file(
        "group.txt",
        r#"[
            {"slug": "bella", "createdAt": "2024-06-01T00:00:00.000Z"},
            {"slug": "cara", "createdAt": "2023-01-01T00:00:00.000Z"}
        ]"#,
    );

    let report = merger().merge(&[a, b], &ws.output(), &NoProgress).unwrap();

    assert_eq!(slugs(&report.records), vec!["bella", "alice", "cara"]);
    assert_eq!(report.processed_files(), 2);
    assert_eq!(report.skipped_files(), 0);

    let written = read_output(&ws.output());
    assert_eq!(written, report.records);
}

#[test]
fn test_first_occurrence_of_slug_wins() {
    let ws = Workspace::new();
    let first = ws.file(
        "first.json",
        r#"{"slug": "dana", "category": "first", "createdAt": "2020-01-01T00:00:00.000Z"}"#,
    );
    let second = ws.file(
        "second.json",
        r#"{"slug": "dana", "category": "second", "createdAt": "2025-01-01T00:00:00.000Z"}"#,
    );

    let report = merger()
        .merge(&[first, second], &ws.output(), &NoProgress)
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0]["category"], "first");
    assert_eq!(report.duplicates_removed(), 1);
}

#[test]
fn test_bad_files_are_skipped() {
    let ws = Workspace::new();
    let good = ws.file("good.json", r#"{"slug": "good"}"#);
    let prose = ws.file("notes.txt", "just some notes");
    let broken = ws.file("broken.json", r#"{"slug": }"#);
    let empty = ws.file("empty.json", "[]");
    let missing = ws.dir.path().join("missing.json");

    let report = merger()
        .merge(
            &[good, prose, broken, empty, missing],
            &ws.output(),
            &NoProgress,
        )
        .unwrap();

    assert_eq!(slugs(&report.records), vec!["good"]);
    assert_eq!(report.processed_files(), 1);
    assert_eq!(report.skipped_files(), 4);

    let reasons: Vec<&str> = report
        .files
        .iter()
        .filter_map(|f| match &f.outcome {
            FileOutcome::Skipped { reason } => Some(reason.as_str()),
            FileOutcome::Processed { .. } => None,
        })
        .collect();
    assert!(reasons[0].starts_with("Invalid JSON format in"));
    assert!(reasons[1].starts_with("Error parsing"));
    assert_eq!(reasons[2], "No records found");
    assert!(reasons[3].starts_with("I/O error at"));
}

#[test]
fn test_all_files_skipped_still_writes_empty_array() {
    let ws = Workspace::new();
    let bad = ws.file("bad.txt", "nope");

    let report = merger().merge(&[bad], &ws.output(), &NoProgress).unwrap();

    assert!(report.records.is_empty());
    assert_eq!(std::fs::read_to_string(ws.output()).unwrap(), "[]");
}

#[test]
fn test_records_without_metadata_use_file_name() {
    let ws = Workspace::new();
    let path = ws.file(
        "Mary_Ann-Smith.json",
        r#"{"gallery": ["1.jpg", "https://cdn.example.com/2.jpg"], "tags": ["new"]}"#,
    );

    let report = merger().merge(&[path], &ws.output(), &NoProgress).unwrap();
    let r = &report.records[0];

    assert_eq!(r["slug"], "mary_ann-smith");
    assert_eq!(r["name"], "Mary Ann Smith");
    assert_eq!(r["category"], "onlyfans");
    assert_eq!(r["thumb"], "images/actresses/mary_ann-smith/thumb.jpg");
    assert_eq!(
        r["gallery"],
        json!([
            "images/actresses/mary_ann-smith/1.jpg",
            "https://cdn.example.com/2.jpg"
        ])
    );
    assert_eq!(r["tags"], json!(["new"]));
    assert_eq!(r["createdAt"], RUN_STAMP);
}

#[test]
fn test_rebuild_mode_keys_by_file_name() {
    let ws = Workspace::new();
    let a = ws.file("one.json", r#"[{"slug": "x", "views": 3}, {"slug": "y"}]"#);

    let settings = MergeSettings {
        preserve_metadata: false,
        ..MergeSettings::default()
    };
    let report = Merger::new(settings)
        .with_created_at(RUN_STAMP)
        .merge(&[a], &ws.output(), &NoProgress)
        .unwrap();

    // Both records derive slug "one" from the file name, so one survives.
    assert_eq!(slugs(&report.records), vec!["one"]);
    assert!(!report.records[0].contains_key("views"));
}

#[test]
fn test_remerging_output_is_stable() {
    let ws = Workspace::new();
    let input = ws.file(
        "people.json",
        r#"[{"slug": "eve", "gallery": ["a.jpg"]}, {"slug": "fay", "thumb": "https://via.placeholder.com/200"}]"#,
    );
    let first = merger().merge(&[input], &ws.output(), &NoProgress).unwrap();

    let second_out = ws.dir.path().join("again.json");
    let second = merger()
        .merge(&[ws.output()], &second_out, &NoProgress)
        .unwrap();

    assert_eq!(first.records, second.records);
    assert_eq!(first.records[1]["thumb"], "images/actresses/fay/thumb.jpg");
}
