//! Read-only queries against the local git working tree.

use crate::error::{HookError, Result};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use std::process::Command;

/// Narrow version-control capability consumed by the hook pipeline.
///
/// Kept to two methods so tests can substitute a double returning fixed
/// path lists.
pub trait Vcs {
    /// Whether the working directory is inside a git work tree.
    ///
    /// Never errors; any probe failure (git missing, permission denied)
    /// reads as false.
    fn is_repository(&self) -> bool;

    /// Paths changed in the working tree whose path matches at least one of
    /// the supplied patterns. Ordered, deduplicated. Empty when nothing
    /// changed.
    fn modified_files(&self, patterns: &[Regex]) -> Result<Vec<PathBuf>>;
}

/// `Vcs` implementation that shells out to the system `git` binary.
pub struct SystemGit {
    workdir: PathBuf,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemGit {
    /// Query git in the current working directory.
    pub fn new() -> Self {
        Self {
            workdir: PathBuf::from("."),
        }
    }

    /// Query git in a specific directory.
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|_| HookError::GitUnavailable)?;

        if !output.status.success() {
            return Err(HookError::GitCommand {
                args: args.join(" "),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Vcs for SystemGit {
    fn is_repository(&self) -> bool {
        self.run_git(&["rev-parse", "--is-inside-work-tree"])
            .map(|out| out.trim() == "true")
            .unwrap_or(false)
    }

    fn modified_files(&self, patterns: &[Regex]) -> Result<Vec<PathBuf>> {
        // Unstaged, staged, and untracked files, in that order.
        let listings = [
            self.run_git(&["diff", "--name-only"])?,
            self.run_git(&["diff", "--name-only", "--cached"])?,
            self.run_git(&["ls-files", "--others", "--exclude-standard"])?,
        ];

        let mut seen = FxHashSet::default();
        let mut files = Vec::new();

        for listing in &listings {
            for line in listing.lines() {
                let line = line.trim();
                if line.is_empty() || !seen.insert(line.to_string()) {
                    continue;
                }
                if patterns.iter().any(|p| p.is_match(line)) {
                    files.push(PathBuf::from(line));
                }
            }
        }

        Ok(files)
    }
}
