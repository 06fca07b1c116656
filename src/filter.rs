//! Reduces the modified-file list to paths worth scanning.

use crate::patterns::ExclusionPatterns;
use std::path::PathBuf;

/// Keep paths that still exist on disk and match no exclusion pattern.
///
/// Input order is preserved. Files deleted since the diff baseline are
/// dropped silently.
pub fn retain_scannable(files: Vec<PathBuf>, exclusions: &ExclusionPatterns) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|path| path.exists())
        .filter(|path| !exclusions.is_excluded(path))
        .collect()
}
