use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

/// All errors produced by the guard log analyser.
#[derive(Error, Debug)]
pub enum GuardLogError {
    /// A line did not match `[YYYY-MM-DD HH:MM] <action>`.
    #[error("Failed to parse log line \"{line}\": {reason}")]
    Parse { line: String, reason: String },

    /// A shift-start action carried no usable `#<digits>` token.
    #[error("No guard id found in action: {0}")]
    MissingGuardId(String),

    /// The action text matched none of the known guard actions.
    #[error("Unrecognised guard action: {0}")]
    UnknownAction(String),

    /// An event arrived in a state where it is not allowed.
    #[error("Malformed log at {timestamp}: {reason}")]
    MalformedLog {
        timestamp: NaiveDateTime,
        reason: String,
    },

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `.txt` log files were found under the given directory.
    #[error("No log files found in {0}")]
    NoLogFiles(PathBuf),

    /// A report could not be serialised.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GuardLogError {
    /// `true` for errors raised while reading a single line.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingGuardId(_))
    }

    /// `true` for structural violations found while rebuilding shifts.
    pub fn is_malformed_log(&self) -> bool {
        matches!(self, Self::UnknownAction(_) | Self::MalformedLog { .. })
    }
}

/// Convenience alias used throughout the guard log crates.
pub type Result<T> = std::result::Result<T, GuardLogError>;
