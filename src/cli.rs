use crate::scanner::DEFAULT_MARKER;
use clap::Parser;

/// Extension patterns handed to change discovery when `--ext` is not given.
pub const DEFAULT_EXTENSION_PATTERNS: &[&str] = &[r"\.tsx?$", r"\.jsx?$"];

#[derive(Parser, Debug)]
#[command(
    name = "console-guard",
    version,
    about = "Stop hook that warns about console.log statements in modified files",
    long_about = "console-guard runs as a Claude Code Stop hook. It checks modified JavaScript/TypeScript files for leftover console.log statements, warns on stderr, and echoes stdin to stdout unchanged so the surrounding hook pipeline is never disturbed."
)]
pub struct Cli {
    /// Marker substring to search for in file contents
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Extension pattern for change discovery (regex, repeatable)
    #[arg(long = "ext", value_name = "REGEX")]
    pub extensions: Vec<String>,

    /// Suppress warning output (pass-through still runs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extension patterns to pass to change discovery.
    pub fn extension_patterns(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSION_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect()
        } else {
            self.extensions.clone()
        }
    }
}
