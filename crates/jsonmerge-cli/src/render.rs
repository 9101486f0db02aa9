//! Terminal rendering of merge progress.

use std::io::{self, Write};
use std::path::Path;

use jsonmerge_core::{MergeEvent, MergeReport};

/// Writes one status line per progress event.
#[derive(Debug)]
pub struct ProgressView<W: Write> {
    out: W,
    total: usize,
    current: usize,
}

impl<W: Write> ProgressView<W> {
    /// Create a view writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            total: 0,
            current: 0,
        }
    }

    /// Render one event.
    pub fn handle(&mut self, event: &MergeEvent) -> io::Result<()> {
        match event {
            MergeEvent::Started { files } => {
                self.total = *files;
                writeln!(self.out, "Merging {files} file(s)...")
            }
            MergeEvent::FileStarted { path } => {
                self.current += 1;
                writeln!(
                    self.out,
                    "[{}/{}] Processing: {}",
                    self.current,
                    self.total,
                    file_name(path)
                )
            }
            MergeEvent::FileProcessed { path, items } => writeln!(
                self.out,
                "  ✓ Successfully processed: {} ({items} items)",
                file_name(path)
            ),
            MergeEvent::FileSkipped { path, reason } => writeln!(
                self.out,
                "  ✗ Failed to process: {} ({reason})",
                file_name(path)
            ),
            MergeEvent::Deduplicated { before, after } if before > after => writeln!(
                self.out,
                "Removed {} duplicate slug(s)",
                before - after
            ),
            MergeEvent::Deduplicated { .. } => Ok(()),
            MergeEvent::Written { path, items } => writeln!(
                self.out,
                "✓ Successfully merged {items} items into: {}",
                path.display()
            ),
        }
    }

    /// Consume the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Closing message shown after a successful merge.
pub fn completion_message(report: &MergeReport) -> String {
    let mut msg = format!(
        "Files merged successfully!\n\nSaved to: {}\n\nTotal items merged: {}",
        report.output.display(),
        report.records.len()
    );
    if report.skipped_files() > 0 {
        msg.push_str(&format!(
            "\nSkipped files: {} of {}",
            report.skipped_files(),
            report.files.len()
        ));
    }
    msg
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
