pub mod cli;
pub mod error;
pub mod filter;
pub mod hook;
pub mod patterns;
pub mod reporter;
pub mod scanner;
pub mod vcs;

pub use cli::{Cli, DEFAULT_EXTENSION_PATTERNS};
pub use error::{HookError, Result};
pub use hook::{HookConfig, check_modified_files, run_hook};
pub use patterns::ExclusionPatterns;
pub use reporter::{MemorySink, Reporter, Sink, StderrSink};
pub use scanner::{DEFAULT_MARKER, MarkerScanner};
pub use vcs::{SystemGit, Vcs};
