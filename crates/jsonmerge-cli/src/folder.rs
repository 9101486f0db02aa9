//! Opening the folder that holds the merged file.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory containing `file`, or `.` for a bare file name.
pub fn containing_folder(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Open the folder containing `file` in the platform file manager.
pub fn open_containing_folder(file: &Path) -> io::Result<()> {
    let folder = containing_folder(file);
    tracing::debug!(folder = %folder.display(), "Opening folder");
    Command::new(opener()).arg(&folder).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn opener() -> &'static str {
    "explorer"
}

#[cfg(target_os = "macos")]
fn opener() -> &'static str {
    "open"
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener() -> &'static str {
    "xdg-open"
}
