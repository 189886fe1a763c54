//! Configuration struct definitions.

use crate::fmt::{DEFAULT_MAX_BUFFER_SIZE, DEFAULT_TIMESTAMP_FORMAT};
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Report tlog's own trouble (file open failures, dropped writes) on stderr.
    pub diagnostics: bool,
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable level colors.
    pub colors: bool,
    /// How colors are applied (ansi, attributes).
    pub color_model: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            colors: true,
            color_model: "ansi".to_string(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Enable the file sink.
    pub enabled: bool,
    /// Log file, appended to. Required when enabled; `~` is expanded.
    pub path: Option<String>,
}

/// Line layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Message buffer capacity in bytes, color codes included.
    pub max_buffer_size: usize,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
    /// Add a `[pid:NNNN]` segment.
    pub process_info: bool,
    /// Add a `[tid:NNNN]` segment.
    pub thread_info: bool,
    /// Terminate each line with a newline.
    pub newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            process_info: false,
            thread_info: false,
            newline: true,
        }
    }
}
