//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jsonmerge_core::MergeSettings;

/// jsonmerge - merge JSON record files into one deduplicated, sorted array
#[derive(Parser, Debug)]
#[command(name = "jsonmerge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "JSONMERGE_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge record files into one output file
    Merge(MergeArgs),

    /// Print the summary of an existing merged file
    Summary {
        /// Merged file to summarize
        file: PathBuf,
    },

    /// Configuration operations
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `jsonmerge merge`.
#[derive(Args, Debug, Clone, Default)]
pub struct MergeArgs {
    /// Input files or glob patterns (JSON or JSON-shaped .txt)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Where to save the merged file [default: output.default_file_name]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Root for generated thumbnail and gallery paths
    #[arg(long, value_name = "PATH")]
    pub image_base: Option<String>,

    /// Rebuild records from file names instead of preserving their metadata
    #[arg(long)]
    pub no_preserve_metadata: bool,

    /// Category given to records that lack one
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Open the folder containing the output after merging
    #[arg(long)]
    pub open: bool,

    /// Don't print the merge summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl MergeArgs {
    /// Apply command-line overrides on top of configured settings.
    pub fn apply(&self, settings: &mut MergeSettings) {
        if let Some(base) = self.image_base.as_deref().map(str::trim) {
            if !base.is_empty() {
                settings.image_base_path = base.to_string();
            }
        }
        if self.no_preserve_metadata {
            settings.preserve_metadata = false;
        }
        if let Some(category) = &self.category {
            settings.default_category = category.clone();
        }
    }
}

/// `jsonmerge config` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Get a value by dotted key (e.g. merge.image_base_path)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },

    /// Write a default config file
    Init {
        /// Where to write it [default: platform config dir]
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
