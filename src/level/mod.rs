//! Severity levels and their fixed display table.
//!
//! No filtering happens on levels; they only select the tag character, the
//! display name and the console color of a line.

use crate::fmt::{Color, Style};
use std::fmt;
use std::str::FromStr;

/// Ordered by severity index, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Broken invariants the program can't continue past.
    Assert = 0,
    /// Failures that prevent an operation from completing.
    Error = 1,
    /// Non-fatal anomalies.
    Warn = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Development-time diagnostics.
    Debug = 4,
    /// High-volume tracing.
    Verbose = 5,
}

impl Level {
    /// Single character leading every line (`I/INFO ...`).
    #[must_use]
    pub const fn tag_char(self) -> char {
        match self {
            Self::Assert => 'A',
            Self::Error => 'E',
            Self::Warn => 'W',
            Self::Info => 'I',
            Self::Debug => 'D',
            Self::Verbose => 'V',
        }
    }

    /// Uppercase name printed after the tag character.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assert => "ASSERT",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
        }
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assert => "assert",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }

    /// Position in the severity table, 0 for `Assert`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Console colors per level.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Assert => Style::on(Color::Red, Color::White),
            Self::Error => Style::fg(Color::Red),
            Self::Warn => Style::fg(Color::Yellow),
            Self::Info => Style::fg(Color::Green),
            Self::Debug => Style::fg(Color::White),
            Self::Verbose => Style::on(Color::Black, Color::White),
        }
    }

    /// All levels in severity order — used by the demo binary and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Assert,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Verbose,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "assert" => Ok(Self::Assert),
            "e" | "error" | "err" => Ok(Self::Error),
            "w" | "warn" | "warning" => Ok(Self::Warn),
            "i" | "info" => Ok(Self::Info),
            "d" | "debug" => Ok(Self::Debug),
            "v" | "verbose" => Ok(Self::Verbose),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
