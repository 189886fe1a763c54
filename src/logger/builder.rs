//! Stepwise construction of a [`Logger`].

use super::Logger;
use crate::fmt::{ColorMode, FormatOptions};
use crate::output::{Output, TerminalOutput};
use crate::state::LoggerState;
use std::path::PathBuf;

/// Defaults: stdout console, ANSI colors, no file sink, 1024-byte buffer.
pub struct LoggerBuilder {
    console: Box<dyn Output>,
    file_path: Option<PathBuf>,
    format: FormatOptions,
    diagnostics: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            console: Box::new(TerminalOutput::stdout()),
            file_path: None,
            format: FormatOptions::default(),
            diagnostics: true,
        }
    }

    /// Replaces the stdout console sink.
    #[must_use]
    pub fn console(mut self, output: impl Output + 'static) -> Self {
        self.console = Box::new(output);
        self
    }

    /// Enables the file sink, appending to `path`.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Message buffer capacity in bytes, color codes included.
    #[must_use]
    pub const fn max_buffer_size(mut self, size: usize) -> Self {
        self.format.max_buffer_size = size;
        self
    }

    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.format.color_mode = mode;
        self
    }

    /// strftime pattern for the timestamp segment.
    #[must_use]
    pub fn timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.format.timestamp_format = pattern.into();
        self
    }

    #[must_use]
    pub const fn process_info(mut self, enabled: bool) -> Self {
        self.format.process_info = enabled;
        self
    }

    #[must_use]
    pub const fn thread_info(mut self, enabled: bool) -> Self {
        self.format.thread_info = enabled;
        self
    }

    /// Without it the caller supplies line endings in the message.
    #[must_use]
    pub const fn newline(mut self, enabled: bool) -> Self {
        self.format.newline = enabled;
        self
    }

    /// Report dropped writes and file sink failures to the internal diagnostics logger.
    #[must_use]
    pub const fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// The logger starts uninitialized; the first `emit` or an explicit `init` opens the sinks.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            state: LoggerState::new(self.console, self.file_path, self.diagnostics),
            format: self.format,
        }
    }
}
