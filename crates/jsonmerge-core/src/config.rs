//! Configuration for jsonmerge.
//!
//! Configuration lives in a TOML file, by default at
//! `<config dir>/jsonmerge/config.toml`. A missing file is not an error: every
//! field has a default, and command-line flags override whatever is loaded.
//!
//! ```toml
//! [merge]
//! image_base_path = "images/actresses"
//! preserve_metadata = true
//! default_category = "onlyfans"
//! placeholder_prefix = "https://via.placeholder.com"
//!
//! [output]
//! default_file_name = "merged_output.txt"
//! open_folder = false
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::paths::expand_tilde;

/// Project name used for the config directory.
pub const PROJECT_NAME: &str = "jsonmerge";

/// Config file name inside the project config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default root for generated image paths.
pub const DEFAULT_IMAGE_BASE_PATH: &str = "images/actresses";

/// Default category assigned to records without one.
pub const DEFAULT_CATEGORY: &str = "onlyfans";

/// Thumbnails under this prefix are always regenerated.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "https://via.placeholder.com";

/// Default output file name when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "merged_output.txt";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record normalization settings
    pub merge: MergeSettings,
    /// Output file settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Settings that control how records are normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    /// Root for generated thumbnail and gallery paths
    pub image_base_path: String,
    /// Use the input record as the base and only fill in missing fields
    pub preserve_metadata: bool,
    /// Category given to records that lack one
    pub default_category: String,
    /// Thumbnail URL prefix treated as "no real thumbnail"
    pub placeholder_prefix: String,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            image_base_path: DEFAULT_IMAGE_BASE_PATH.to_string(),
            preserve_metadata: true,
            default_category: DEFAULT_CATEGORY.to_string(),
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
        }
    }
}

impl MergeSettings {
    /// Image base path without surrounding whitespace or trailing slashes.
    ///
    /// Falls back to [`DEFAULT_IMAGE_BASE_PATH`] when blank.
    pub fn image_base(&self) -> &str {
        let base = self.image_base_path.trim().trim_end_matches('/');
        if base.is_empty() {
            DEFAULT_IMAGE_BASE_PATH
        } else {
            base
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// File written when no output path is given
    pub default_file_name: String,
    /// Open the containing folder after a successful merge
    pub open_folder: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_file_name: DEFAULT_OUTPUT_FILE.to_string(),
            open_folder: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Platform default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join(CONFIG_FILE))
    }

    /// Resolve the config file path: the explicit path if given, otherwise
    /// the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(p) => Some(expand_tilde(p)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize to a pretty TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
