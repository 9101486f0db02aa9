//! The merge pipeline: read → normalize → deduplicate → sort → write.
//!
//! Files are processed strictly in selection order. A file that cannot be
//! read, is not JSON-shaped, fails to parse, or holds no object records is
//! logged and skipped; only an empty selection or a failed write aborts the
//! run.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jsonmerge_core::{MergeSettings, Merger, NoProgress};
//! use std::path::{Path, PathBuf};
//!
//! let merger = Merger::new(MergeSettings::default());
//! let files = vec![PathBuf::from("a.json"), PathBuf::from("b.txt")];
//! let report = merger.merge(&files, Path::new("merged.txt"), &NoProgress)?;
//! println!("{} records", report.records.len());
//! # Ok::<(), jsonmerge_core::Error>(())
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use crate::config::MergeSettings;
use crate::error::{Error, Result};
use crate::normalize::{created_at_now, created_at_of, normalize_record, slug_of};
use crate::progress::{MergeEvent, ProgressObserver};
use crate::reader::{Record, read_document, records_of};
use crate::selection::Selection;

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Records were taken from the file
    Processed {
        /// Number of records
        items: usize,
    },
    /// The file was skipped
    Skipped {
        /// Why
        reason: String,
    },
}

/// Per-file result of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Input file
    pub path: PathBuf,
    /// Outcome
    pub outcome: FileOutcome,
}

/// Result of a completed merge.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Merged records, deduplicated and sorted newest first
    pub records: Vec<Record>,
    /// Per-file outcomes in selection order
    pub files: Vec<FileReport>,
    /// Records collected before deduplication
    pub collected: usize,
    /// Where the records were written
    pub output: PathBuf,
}

impl MergeReport {
    /// Number of files that contributed records.
    pub fn processed_files(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Processed { .. }))
            .count()
    }

    /// Number of files that were skipped.
    pub fn skipped_files(&self) -> usize {
        self.files.len() - self.processed_files()
    }

    /// Records dropped because their slug was already taken.
    pub fn duplicates_removed(&self) -> usize {
        self.collected - self.records.len()
    }
}

/// Runs merges with a fixed set of settings.
#[derive(Debug, Clone)]
pub struct Merger {
    settings: MergeSettings,
    created_at: String,
}

impl Merger {
    /// Create a merger stamping new records with the current time.
    pub fn new(settings: MergeSettings) -> Self {
        Self {
            settings,
            created_at: created_at_now(),
        }
    }

    /// Use a fixed `createdAt` value for records that lack one.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// The settings in effect.
    pub fn settings(&self) -> &MergeSettings {
        &self.settings
    }

    /// Read one file and normalize its records.
    pub fn process_file(&self, path: &Path) -> Result<Vec<Record>> {
        let document = read_document(path)?;
        Ok(records_of(document)
            .iter()
            .map(|item| normalize_record(item, path, &self.settings, &self.created_at))
            .collect())
    }

    /// Merge `files` into `output`.
    pub fn merge(
        &self,
        files: &[PathBuf],
        output: &Path,
        observer: &dyn ProgressObserver,
    ) -> Result<MergeReport> {
        if files.is_empty() {
            return Err(Error::validation("Please select at least 1 file to merge"));
        }

        tracing::info!(files = files.len(), "Starting merge");
        observer.notify(MergeEvent::Started { files: files.len() });

        let mut collected = Vec::new();
        let mut reports = Vec::with_capacity(files.len());

        for path in files {
            observer.notify(MergeEvent::FileStarted { path: path.clone() });
            tracing::debug!(path = %path.display(), "Processing");

            let outcome = match self.process_file(path) {
                Ok(records) if records.is_empty() => FileOutcome::Skipped {
                    reason: "No records found".to_string(),
                },
                Ok(records) => {
                    let items = records.len();
                    collected.extend(records);
                    FileOutcome::Processed { items }
                }
                Err(e) if e.is_skippable() => FileOutcome::Skipped {
                    reason: e.to_string(),
                },
                Err(e) => return Err(e),
            };

            match &outcome {
                FileOutcome::Processed { items } => {
                    tracing::info!(path = %path.display(), items, "Processed file");
                    observer.notify(MergeEvent::FileProcessed {
                        path: path.clone(),
                        items: *items,
                    });
                }
                FileOutcome::Skipped { reason } => {
                    tracing::warn!(path = %path.display(), %reason, "Skipped file");
                    observer.notify(MergeEvent::FileSkipped {
                        path: path.clone(),
                        reason: reason.clone(),
                    });
                }
            }

            reports.push(FileReport {
                path: path.clone(),
                outcome,
            });
        }

        let total = collected.len();
        let mut records = dedupe_by_slug(collected);
        observer.notify(MergeEvent::Deduplicated {
            before: total,
            after: records.len(),
        });
        if records.len() < total {
            tracing::info!(removed = total - records.len(), "Removed duplicate slugs");
        }

        sort_newest_first(&mut records);
        write_output(output, &records)?;

        tracing::info!(
            items = records.len(),
            output = %output.display(),
            "Merge complete"
        );
        observer.notify(MergeEvent::Written {
            path: output.to_path_buf(),
            items: records.len(),
        });

        Ok(MergeReport {
            records,
            files: reports,
            collected: total,
            output: output.to_path_buf(),
        })
    }
}

/// Keep the first record for each slug, preserving order.
pub fn dedupe_by_slug(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| match slug_of(r) {
            Some(slug) => seen.insert(slug.to_string()),
            None => true,
        })
        .collect()
}

/// Sort by `createdAt`, newest first. Ties keep their relative order.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| created_at_of(b).cmp(created_at_of(a)));
}

/// Write records as a pretty-printed JSON array, creating parent directories.
pub fn write_output(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|e| Error::io_with_path(e, path))
}

/// A merge running on a background worker.
///
/// Events arrive on [`MergeJob::next_event`] until the worker finishes, then
/// [`MergeJob::join`] yields the report.
#[derive(Debug)]
pub struct MergeJob {
    handle: JoinHandle<Result<MergeReport>>,
    events: UnboundedReceiver<MergeEvent>,
}

impl MergeJob {
    /// Start merging `selection` on the blocking thread pool.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(merger: Merger, selection: &Selection) -> Result<Self> {
        if !selection.readiness().is_ready() {
            return Err(Error::validation(selection.readiness().to_string()));
        }
        let files = selection.files().to_vec();
        let output = selection
            .output()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::validation("Please choose where to save the merged file"))?;

        let (tx, events) = mpsc::unbounded_channel();
        let handle =
            tokio::task::spawn_blocking(move || merger.merge(&files, &output, &tx));

        Ok(Self { handle, events })
    }

    /// Next progress event, or `None` once the worker is done.
    pub async fn next_event(&mut self) -> Option<MergeEvent> {
        self.events.recv().await
    }

    /// Wait for the worker and return its result.
    pub async fn join(self) -> Result<MergeReport> {
        self.handle.await.map_err(|e| Error::Worker {
            message: e.to_string(),
        })?
    }
}
