//! Exclusion patterns for files where console.log is expected.

use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Default exclusions: test files, spec files, config files, and anything
/// under a scripts/, __tests__/ or __mocks__/ path segment.
const DEFAULT_PATTERNS: &[&str] = &[
    r"\.test\.[jt]sx?$",
    r"\.spec\.[jt]sx?$",
    r"\.config\.[jt]s$",
    r"scripts/",
    r"__tests__/",
    r"__mocks__/",
];

/// Immutable set of compiled exclusion matchers.
///
/// A path matching ANY pattern is excluded. Patterns are evaluated
/// independently; there is no combination logic.
#[derive(Debug, Clone)]
pub struct ExclusionPatterns {
    patterns: Vec<Regex>,
}

impl ExclusionPatterns {
    /// Compile the default exclusion set.
    pub fn default_set() -> Result<Self> {
        Self::from_patterns(DEFAULT_PATTERNS)
    }

    /// Compile an alternate pattern set.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Check whether `path` matches any exclusion pattern.
    ///
    /// Separators are normalized to `/` first so segment patterns match on
    /// Windows as well.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let normalized = path.to_string_lossy().replace('\\', "/");
        self.patterns.iter().any(|p| p.is_match(&normalized))
    }
}
