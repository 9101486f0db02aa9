//! Progress events emitted by the merge pipeline.

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;

/// A step in a merge run, in the order they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    /// The run began with this many input files
    Started {
        /// Number of input files
        files: usize,
    },
    /// An input file is being read
    FileStarted {
        /// Input file
        path: PathBuf,
    },
    /// An input file contributed records
    FileProcessed {
        /// Input file
        path: PathBuf,
        /// Records taken from it
        items: usize,
    },
    /// An input file was skipped
    FileSkipped {
        /// Input file
        path: PathBuf,
        /// Why it was skipped
        reason: String,
    },
    /// Duplicate slugs were removed
    Deduplicated {
        /// Records before deduplication
        before: usize,
        /// Records after deduplication
        after: usize,
    },
    /// The merged output was written
    Written {
        /// Output file
        path: PathBuf,
        /// Records written
        items: usize,
    },
}

/// Receives progress events from a running merge.
pub trait ProgressObserver: Send {
    /// Handle one event. Must not block for long.
    fn notify(&self, event: MergeEvent);
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn notify(&self, _event: MergeEvent) {}
}

impl ProgressObserver for UnboundedSender<MergeEvent> {
    fn notify(&self, event: MergeEvent) {
        // A dropped receiver just means nobody is watching.
        let _ = self.send(event);
    }
}
