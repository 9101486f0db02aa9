//! Error types for jsonmerge-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading, merging, or writing record files.
///
/// Per-file errors ([`Error::Io`] on read, [`Error::Parse`], [`Error::Format`])
/// are logged and skipped by the merge pipeline; the rest abort the run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error in an input file
    #[error("Error parsing {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Input text is not shaped like a JSON object or array
    #[error("Invalid JSON format in {path}")]
    Format {
        /// Offending file
        path: PathBuf,
    },

    /// Input validation error
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Background worker failed to complete
    #[error("Merge worker failed: {message}")]
    Worker {
        /// Join error description
        message: String,
    },
}

/// Convenience `Result` type alias for jsonmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error only affects a single input file.
    ///
    /// The merge pipeline logs skippable errors and moves on to the next file.
    pub fn is_skippable(&self) -> bool {
        match self {
            Error::Io { .. } => true,
            Error::Parse { .. } => true,
            Error::Format { .. } => true,
            Error::Validation { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
            Error::Worker { .. } => false,
        }
    }

    /// Creates an I/O error annotated with the path involved.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for the given file.
    pub fn parse<S: Into<String>>(path: impl AsRef<Path>, message: S) -> Self {
        Error::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Creates a format error for the given file.
    pub fn format(path: impl AsRef<Path>) -> Self {
        Error::Format {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
