//! Unified error type for all tlog operations.

use std::path::PathBuf;

/// Error type for tlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// File sink enabled without a path to write to.
    MissingFilePath,
    /// A zero-sized message buffer can't hold even the prefix.
    InvalidBufferSize,
    /// The log file could not be opened. The console sink keeps working.
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A writer panicked while holding the logger lock.
    LockPoisoned,
    /// The composed line would not fit in the message buffer.
    Overflow { capacity: usize },
    /// A `Display` impl in the caller's arguments returned an error.
    Format,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::MissingFilePath => write!(f, "file logging enabled but no file path given"),
            Self::InvalidBufferSize => write!(f, "max buffer size must be positive"),
            Self::FileOpen { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::LockPoisoned => write!(f, "logger lock poisoned"),
            Self::Overflow { capacity } => {
                write!(f, "log line exceeds buffer capacity of {capacity} bytes")
            }
            Self::Format => write!(f, "formatting error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::FileOpen { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Self::Format
    }
}
