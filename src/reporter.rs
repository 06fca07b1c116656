//! Warning output for files that still contain debug statements.

use colored::Colorize;
use std::path::Path;
use std::sync::Mutex;

/// Destination for operator-visible diagnostic lines.
///
/// stdout is reserved for the pass-through payload, so no sink may write
/// there.
pub trait Sink {
    fn log(&self, message: &str);
}

/// Writes diagnostic lines to stderr.
pub struct StderrSink;

impl Sink for StderrSink {
    fn log(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Collects diagnostic lines for assertions in tests.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for MemorySink {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Formats per-file warnings and the closing reminder.
pub struct Reporter<'a> {
    sink: &'a dyn Sink,
    quiet: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a dyn Sink) -> Self {
        Self { sink, quiet: false }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// One line per file still carrying the marker.
    pub fn warn_file(&self, marker: &str, path: &Path) {
        if self.quiet {
            return;
        }
        self.sink.log(&format!(
            "[Hook] {} {} found in {}",
            "WARNING:".yellow().bold(),
            marker,
            path.display()
        ));
    }

    /// Emitted once, after all per-file lines, when anything matched.
    pub fn remind(&self, marker: &str) {
        if self.quiet {
            return;
        }
        self.sink
            .log(&format!("[Hook] Remove {marker} statements before committing"));
    }
}
