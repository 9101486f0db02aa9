//! Input file selection.
//!
//! A [`Selection`] is the list of files to merge plus the output location.
//! Files keep the order they were added in, and adding a file twice is a
//! no-op. That order matters: when two files contain the same slug, the
//! record from the earlier file wins.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::paths::expand_input;

/// Files chosen for a merge and where to write the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
}

/// Whether a selection is complete enough to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Neither files nor output chosen
    Empty,
    /// Output chosen but no files
    NeedsFiles,
    /// Files chosen but no output
    NeedsOutput,
    /// Ready to merge
    Ready,
}

impl Readiness {
    /// Returns whether a merge can start.
    pub fn is_ready(self) -> bool {
        self == Readiness::Ready
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Readiness::Empty => "Select files and choose save location",
            Readiness::NeedsFiles => "Select files to merge",
            Readiness::NeedsOutput => "Choose where to save the merged file",
            Readiness::Ready => "Ready to merge files!",
        };
        f.write_str(msg)
    }
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. Returns `false` if it was already selected.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.files.contains(&path) {
            return false;
        }
        self.files.push(path);
        true
    }

    /// Add several files, returning how many were new.
    pub fn add_all<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(|p| self.add(p))
            .filter(|added| *added)
            .count()
    }

    /// Add a path or glob pattern, returning how many files were new.
    pub fn add_input(&mut self, arg: &str) -> Result<usize> {
        let paths = expand_input(arg)?;
        if paths.is_empty() {
            tracing::warn!(pattern = %arg, "Pattern matched no files");
        }
        Ok(self.add_all(paths))
    }

    /// Remove the file at `index`.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    /// Remove every file. The output location is kept.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Selected files in order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of selected files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns whether no files are selected.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Set where the merged file is written.
    pub fn set_output(&mut self, path: impl Into<PathBuf>) {
        self.output = Some(path.into());
    }

    /// The output location, if chosen.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Human-readable file count.
    pub fn count_label(&self) -> String {
        match self.files.len() {
            0 => "No files selected".to_string(),
            n => format!("{n} file(s) selected"),
        }
    }

    /// How close the selection is to being mergeable.
    pub fn readiness(&self) -> Readiness {
        let has_output = self
            .output
            .as_deref()
            .is_some_and(|p| !p.as_os_str().is_empty());
        match (self.files.is_empty(), has_output) {
            (true, false) => Readiness::Empty,
            (true, true) => Readiness::NeedsFiles,
            (false, false) => Readiness::NeedsOutput,
            (false, true) => Readiness::Ready,
        }
    }
}
