//! Record normalization.
//!
//! Every record that comes out of an input file is rewritten into the shape
//! the merged output uses: a slug and display name, a category, a thumbnail,
//! gallery paths rooted under the image base path, and a creation timestamp.
//!
//! With `preserve_metadata` on, the input record is the starting point and
//! only missing (or placeholder) fields are filled in. With it off, the record
//! is rebuilt from the file name plus the content fields (`gallery`,
//! `websites`, `tags`), and viewing statistics are dropped.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::MergeSettings;
use crate::reader::Record;
use crate::util::ids::{name_from_path, slug_from_path};

/// Record field names.
pub mod fields {
    /// Unique record key
    pub const SLUG: &str = "slug";
    /// Display name
    pub const NAME: &str = "name";
    /// Category label
    pub const CATEGORY: &str = "category";
    /// Thumbnail path or URL
    pub const THUMB: &str = "thumb";
    /// Gallery image paths or URLs
    pub const GALLERY: &str = "gallery";
    /// External links
    pub const WEBSITES: &str = "websites";
    /// Tag list
    pub const TAGS: &str = "tags";
    /// Creation timestamp
    pub const CREATED_AT: &str = "createdAt";
    /// View counter
    pub const VIEWS: &str = "views";
    /// Last viewed timestamp
    pub const LAST_VIEWED: &str = "lastViewed";
}

use fields::*;

/// Thumbnail file name under each record's image directory.
pub const THUMB_FILE: &str = "thumb.jpg";

/// Format a timestamp the way `createdAt` values are stored.
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

/// Timestamp for records created in this run.
pub fn created_at_now() -> String {
    format_created_at(Utc::now())
}

/// Normalize one record read from `source`.
///
/// `created_at` is stamped on records that have no `createdAt` (or on every
/// record when metadata is not preserved).
pub fn normalize_record(
    item: &Record,
    source: &Path,
    settings: &MergeSettings,
    created_at: &str,
) -> Record {
    let preserve = settings.preserve_metadata;
    let base = settings.image_base();

    let slug = match non_empty_str(item, SLUG) {
        Some(s) if preserve => s.to_string(),
        _ => slug_from_path(source),
    };
    let name = match non_empty_str(item, NAME) {
        Some(s) if preserve => s.to_string(),
        _ => name_from_path(source),
    };

    let mut merged = if preserve { item.clone() } else { Record::new() };
    merged.insert(SLUG.to_string(), Value::String(slug.clone()));
    merged.insert(NAME.to_string(), Value::String(name));

    if !preserve || !merged.contains_key(CATEGORY) {
        merged.insert(
            CATEGORY.to_string(),
            Value::String(settings.default_category.clone()),
        );
    }

    let needs_thumb = !preserve
        || match merged.get(THUMB) {
            Some(Value::String(thumb)) => is_placeholder(thumb, settings),
            _ => true,
        };
    if needs_thumb {
        let thumb = match item.get(THUMB) {
            Some(Value::String(url)) if is_url(url) && !is_placeholder(url, settings) => {
                url.clone()
            }
            _ => format!("{base}/{slug}/{THUMB_FILE}"),
        };
        merged.insert(THUMB.to_string(), Value::String(thumb));
    }

    if let Some(Value::Array(gallery)) = item.get(GALLERY) {
        let gallery = gallery
            .iter()
            .map(|entry| match entry {
                Value::String(s) => Value::String(gallery_path(s, base, &slug)),
                other => other.clone(),
            })
            .collect();
        merged.insert(GALLERY.to_string(), Value::Array(gallery));
    }

    for key in [WEBSITES, TAGS] {
        if let Some(value) = item.get(key) {
            if !preserve || !merged.contains_key(key) {
                merged.insert(key.to_string(), value.clone());
            }
        }
    }

    if !preserve || !merged.contains_key(CREATED_AT) {
        merged.insert(
            CREATED_AT.to_string(),
            Value::String(created_at.to_string()),
        );
    }

    if preserve {
        for key in [VIEWS, LAST_VIEWED] {
            if let Some(value) = item.get(key) {
                merged.insert(key.to_string(), value.clone());
            }
        }
    }

    merged
}

/// Slug of a normalized record.
pub fn slug_of(record: &Record) -> Option<&str> {
    record.get(SLUG).and_then(Value::as_str)
}

/// Sort key for a normalized record: `createdAt` as a string, or empty.
pub fn created_at_of(record: &Record) -> &str {
    record
        .get(CREATED_AT)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn non_empty_str<'a>(item: &'a Record, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn is_url(s: &str) -> bool {
    s.starts_with("http")
}

fn is_placeholder(s: &str, settings: &MergeSettings) -> bool {
    !settings.placeholder_prefix.is_empty() && s.starts_with(&settings.placeholder_prefix)
}

fn gallery_path(entry: &str, base: &str, slug: &str) -> String {
    if is_url(entry) || entry.starts_with(&format!("{base}/")) {
        entry.to_string()
    } else {
        format!("{base}/{slug}/{}", entry.trim_start_matches('/'))
    }
}
