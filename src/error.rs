use thiserror::Error;

/// Classifies source fetch errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, DNS or timeout failure before a response arrived
    Transport,
    /// Server answered with a non-success status
    Status,
    /// Response body could not be read or was not UTF-8
    Body,
}

/// TLD compiler error types
#[derive(Error, Debug)]
pub enum TldError {
    #[error("Decode error for label '{label}': {reason}")]
    DecodeError { label: String, reason: String },

    #[error("Invalid label at line {line}: {label:?}")]
    InvalidLabel { line: usize, label: String },

    #[error("Fetch error: {message}")]
    FetchError {
        kind: FetchErrorKind,
        message: String,
    },

    #[error("Pattern for {variant} corpus does not match entry '{entry}'")]
    PatternMismatch { variant: String, entry: String },

    #[error("Emit error: {0}")]
    EmitError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TldError>;
