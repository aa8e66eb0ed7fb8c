//! Physical file names for rotated output.
//!
//! Rotated names are always derived from the original destination, so
//! `out.log` rotates to `out1.log`, `out2.log`, never `out12.log`.

use std::path::{Path, PathBuf};

/// Splits `path` at the last `.` of its final component.
///
/// The extension keeps its dot. A dot inside a directory name is not an
/// extension: `logs.d/out` has none.
#[must_use]
pub fn split_extension(path: &str) -> (&str, &str) {
    for (i, c) in path.char_indices().rev() {
        if std::path::is_separator(c) {
            break;
        }
        if c == '.' {
            return path.split_at(i);
        }
    }
    (path, "")
}

/// Inserts `index` between the stem and the extension of `base`.
///
/// `data.tar.gz` with index 3 becomes `data.tar3.gz`.
#[must_use]
pub fn next_name(base: &Path, index: u32) -> PathBuf {
    let base = base.to_string_lossy();
    let (stem, ext) = split_extension(&base);
    PathBuf::from(format!("{stem}{index}{ext}"))
}
