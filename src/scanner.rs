//! Marker-substring scan over candidate files.

use crate::error::{HookError, Result};
use std::fs;
use std::path::Path;

/// Default marker searched for in file contents.
pub const DEFAULT_MARKER: &str = "console.log";

/// Literal-substring scanner for a single debug-print marker.
///
/// Detection is intentionally approximate: a marker inside a string or a
/// comment still counts. No parsing is attempted.
pub struct MarkerScanner {
    marker: String,
}

impl MarkerScanner {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Check raw content for the marker.
    pub fn scan_content(&self, content: &str) -> bool {
        content.contains(&self.marker)
    }

    /// Read `path` in full and check it for the marker.
    pub fn scan_file(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).map_err(|source| HookError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.scan_content(&content))
    }
}
