//! Stop-hook pipeline: capture stdin, check modified files, pass input through.
//!
//! The hook is a transparent filter. Whatever arrives on stdin is written
//! back to stdout byte-for-byte after the checks have run, including when the
//! working directory is not a repository or a check fails internally. The
//! process never signals failure to its caller.

use crate::cli::Cli;
use crate::error::Result;
use crate::filter::retain_scannable;
use crate::patterns::ExclusionPatterns;
use crate::reporter::{Reporter, Sink, StderrSink};
use crate::scanner::MarkerScanner;
use crate::vcs::{SystemGit, Vcs};
use regex::Regex;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing::{debug, warn};

/// Immutable per-invocation settings, compiled once from the CLI.
pub struct HookConfig {
    pub marker: String,
    pub extension_patterns: Vec<Regex>,
    pub exclusions: ExclusionPatterns,
    pub quiet: bool,
}

impl HookConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let extension_patterns = cli
            .extension_patterns()
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            marker: cli.marker.clone(),
            extension_patterns,
            exclusions: ExclusionPatterns::default_set()?,
            quiet: cli.quiet,
        })
    }
}

/// Run the Stop hook end to end.
pub fn run_hook(cli: &Cli) -> ExitCode {
    // The whole input is captured before any other stage runs.
    let mut input = Vec::new();
    if let Err(error) = io::stdin().read_to_end(&mut input) {
        warn!(%error, "failed to read stdin");
    }

    match HookConfig::from_cli(cli) {
        Ok(config) => {
            let git = SystemGit::new();
            let sink = StderrSink;
            if let Err(error) = check_modified_files(&config, &git, &sink) {
                // Git may be missing or misbehaving; the hook stays silent
                // and transparent either way.
                debug!(%error, "console check skipped");
            }
        }
        Err(error) => {
            warn!(%error, "invalid hook configuration");
        }
    }

    let mut stdout = io::stdout().lock();
    if let Err(error) = stdout.write_all(&input).and_then(|()| stdout.flush()) {
        debug!(%error, "failed to write pass-through output");
    }

    ExitCode::SUCCESS
}

/// Repository guard, change discovery, filter, scan, and report.
///
/// Returns whether any scanned file contained the marker.
pub fn check_modified_files(
    config: &HookConfig,
    vcs: &dyn Vcs,
    sink: &dyn Sink,
) -> Result<bool> {
    if !vcs.is_repository() {
        return Ok(false);
    }

    let files = vcs.modified_files(&config.extension_patterns)?;
    let files = retain_scannable(files, &config.exclusions);

    let scanner = MarkerScanner::new(&config.marker);
    let reporter = Reporter::new(sink).with_quiet(config.quiet);

    let mut any_match = false;
    for file in &files {
        match scanner.scan_file(file) {
            Ok(true) => {
                reporter.warn_file(scanner.marker(), file);
                any_match = true;
            }
            Ok(false) => {}
            Err(error) => {
                // A file can vanish between the existence check and the
                // read; the rest of the set is still scanned.
                warn!(file = %file.display(), %error, "skipping unreadable file");
            }
        }
    }

    if any_match {
        reporter.remind(scanner.marker());
    }

    Ok(any_match)
}
