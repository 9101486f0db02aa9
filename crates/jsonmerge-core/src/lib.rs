#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! jsonmerge Core Library
//!
//! Merges JSON record files into one deduplicated, sorted JSON array.
//!
//! # Modules
//!
//! - [`reader`]: Loading loosely-formatted JSON record files
//! - [`normalize`]: Per-record field normalization
//! - [`pipeline`]: The merge itself, inline or on a background worker
//! - [`selection`]: Input file selection and readiness
//! - [`summary`]: Plain-text merge summaries
//! - [`progress`]: Progress events
//! - [`config`]: TOML configuration
//! - [`util`]: Slug, name, and path helpers

pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod reader;
pub mod selection;
pub mod summary;
pub mod util;

#[cfg(test)]
mod proptests;

// Re-exports for convenience
pub use config::{Config, MergeSettings};
pub use error::{Error, Result};
pub use pipeline::{FileOutcome, FileReport, MergeJob, MergeReport, Merger};
pub use progress::{MergeEvent, NoProgress, ProgressObserver};
pub use reader::Record;
pub use selection::{Readiness, Selection};
pub use summary::render_summary;
