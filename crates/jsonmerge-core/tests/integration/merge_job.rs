//! Merges run on the background worker via `MergeJob`.

use jsonmerge_core::{MergeEvent, MergeJob, MergeSettings, Merger, Selection};

use crate::common::{RUN_STAMP, Workspace, slugs};

#[tokio::test]
async fn test_job_streams_events_in_order() {
    let ws = Workspace::new();
    let good = ws.file("good.json", r#"{"slug": "good"}"#);
    let bad = ws.file("bad.txt", "not json");

    let mut selection = Selection::new();
    selection.add(good.clone());
    selection.add(bad.clone());
    selection.set_output(ws.output());

    let merger = Merger::new(MergeSettings::default()).with_created_at(RUN_STAMP);
    let mut job = MergeJob::spawn(merger, &selection).unwrap();

    let mut events = Vec::new();
    while let Some(event) = job.next_event().await {
        events.push(event);
    }
    let report = job.join().await.unwrap();

    assert_eq!(events.len(), 7);
    assert_eq!(events[0], MergeEvent::Started { files: 2 });
    assert_eq!(events[1], MergeEvent::FileStarted { path: good.clone() });
    assert_eq!(
        events[2],
        MergeEvent::FileProcessed {
            path: good,
            items: 1
        }
    );
    assert_eq!(events[3], MergeEvent::FileStarted { path: bad.clone() });
    assert!(matches!(&events[4], MergeEvent::FileSkipped { path, .. } if *path == bad));
    assert_eq!(events[5], MergeEvent::Deduplicated { before: 1, after: 1 });
    assert_eq!(
        events[6],
        MergeEvent::Written {
            path: ws.output(),
            items: 1
        }
    );
    assert_eq!(slugs(&report.records), vec!["good"]);
}

#[tokio::test]
async fn test_job_rejects_empty_selection() {
    let ws = Workspace::new();
    let mut selection = Selection::new();
    selection.set_output(ws.output());

    let merger = Merger::new(MergeSettings::default());
    let err = MergeJob::spawn(merger, &selection).unwrap_err();
    assert_eq!(err.to_string(), "Validation error: Select files to merge");
}

#[tokio::test]
async fn test_job_join_without_reading_events() {
    let ws = Workspace::new();
    let file = ws.file("a.json", r#"{"slug": "a"}"#);

    let mut selection = Selection::new();
    selection.add(file);
    selection.set_output(ws.output());

    let job = MergeJob::spawn(Merger::new(MergeSettings::default()), &selection).unwrap();
    let report = job.join().await.unwrap();
    assert_eq!(report.records.len(), 1);
}
