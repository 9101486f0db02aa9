//! Slug and display-name derivation from file names.
//!
//! Records that carry no `slug` or `name` of their own are keyed by the file
//! they came from. Both helpers work on the file stem, so `jane-doe.json` and
//! `jane-doe.txt` derive the same slug.

use std::path::Path;

/// Derive a slug from a file path's stem.
///
/// Lowercases, then keeps only alphanumeric characters, `-` and `_`.
/// Returns an empty string if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jsonmerge_core::util::ids::slug_from_path;
///
/// assert_eq!(slug_from_path(Path::new("/data/Jane-Doe.json")), "jane-doe");
/// assert_eq!(slug_from_path(Path::new("Mia Khalif (2).txt")), "miakhalif2");
/// assert_eq!(slug_from_path(Path::new("/")), "");
/// ```
pub fn slug_from_path(path: &Path) -> String {
    stem(path)
        .map(|s| {
            s.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect()
        })
        .unwrap_or_default()
}

/// Derive a display name from a file path's stem.
///
/// Separators (`-`, `_`) become spaces and the result is title-cased.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jsonmerge_core::util::ids::name_from_path;
///
/// assert_eq!(name_from_path(Path::new("jane-doe.json")), "Jane Doe");
/// assert_eq!(name_from_path(Path::new("MARY_ann.txt")), "Mary Ann");
/// ```
pub fn name_from_path(path: &Path) -> String {
    stem(path)
        .map(|s| title_case(&s.replace(['-', '_'], " ")))
        .unwrap_or_default()
}

/// Title-case a string: each run of letters starts uppercase and continues
/// lowercase. Any non-letter ends a run.
///
/// ```
/// use jsonmerge_core::util::ids::title_case;
///
/// assert_eq!(title_case("o'neil smith"), "O'Neil Smith");
/// assert_eq!(title_case("abc1def"), "Abc1Def");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

fn stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}
