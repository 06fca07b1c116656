use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("git executable not found")]
    GitUnavailable,

    #[error("git {args} failed: {message}")]
    GitCommand { args: String, message: String },

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HookError>;
