//! The emitter: one lock, one bounded buffer per call, two sinks.
//!
//! A [`Logger`] is built once through [`LoggerBuilder`] (or from a
//! [`Config`](crate::Config)) and then shared by reference. The process-wide
//! instance behind [`Logger::global`] is what the level macros and the
//! crate-level `init`/`deinit`/`emit` functions use.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::Error;
use crate::config::Config;
use crate::fmt::{BoundedBuffer, FormatOptions, compose};
use crate::internal;
use crate::level::Level;
use crate::record::{Location, LogRecord};
use crate::state::LoggerState;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Shared, lock-serialized logger. `Sync`, so `&Logger` can cross threads.
pub struct Logger {
    state: LoggerState,
    format: FormatOptions,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The process-wide logger. Built from the default config file on first
    /// use unless one was [`install`](Self::install)ed before.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::from_default_config)
    }

    /// Makes `self` the process-wide logger.
    ///
    /// # Errors
    /// Hands the logger back if the global one already exists.
    pub fn install(self) -> Result<(), Self> {
        GLOBAL.set(self)
    }

    fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_default();
        internal::init_with_config(&config);
        Self::from_config(&config).unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Unusable config, using defaults: {e}"));
            Self::builder().build()
        })
    }

    /// Opens the file sink (if configured) and marks the logger ready.
    /// Calling it again reopens the file.
    ///
    /// # Errors
    /// [`Error::FileOpen`]; the logger is ready anyway and logs to the console only.
    pub fn init(&self) -> Result<(), Error> {
        self.state.init()
    }

    /// Closes the file sink and marks the logger uninitialized. The next
    /// `emit` initializes it again.
    ///
    /// # Errors
    /// [`Error::LockPoisoned`] if a writer panicked under the lock.
    pub fn deinit(&self) -> Result<(), Error> {
        self.state.deinit()
    }

    /// Composes one line and writes it to the sinks, all under the lock.
    ///
    /// Returns the number of bytes written to the console, color codes
    /// included. Nothing is written unless the whole line fits.
    ///
    /// # Errors
    /// - [`Error::LockPoisoned`]: a writer panicked under the lock; nothing is composed.
    /// - [`Error::Overflow`]: the line doesn't fit in the message buffer.
    /// - [`Error::Format`]: a `Display` impl in `args` failed.
    pub fn emit(
        &self,
        level: Level,
        tag: &str,
        location: Location<'_>,
        args: fmt::Arguments<'_>,
    ) -> Result<usize, Error> {
        let mut sinks = self.state.acquire().inspect_err(|_| {
            if self.diagnostics() {
                internal::error("LOGGER", "Lock poisoned, line dropped");
            }
        })?;

        let record = LogRecord {
            level,
            tag,
            location,
            args,
        };
        let mut buf = BoundedBuffer::with_capacity(self.format.max_buffer_size);
        let file_range = match compose(&mut buf, &record, &self.format) {
            Ok(range) => range,
            Err(e) => {
                drop(sinks);
                if self.diagnostics() {
                    internal::debug("LOGGER", &format!("Line from {tag} dropped: {e}"));
                }
                return Err(e);
            }
        };

        sinks.write(
            buf.as_bytes(),
            file_range,
            level.style(),
            self.format.color_mode,
        );
        Ok(buf.len())
    }

    /// Flushes the console and the file sink.
    ///
    /// # Errors
    /// The first I/O error, or [`Error::LockPoisoned`].
    pub fn flush(&self) -> Result<(), Error> {
        self.state.flush()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Whether the file sink currently has an open handle.
    #[must_use]
    pub fn file_active(&self) -> bool {
        self.state.file_active()
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.state.file_path()
    }

    #[must_use]
    pub const fn format_options(&self) -> &FormatOptions {
        &self.format
    }

    const fn diagnostics(&self) -> bool {
        self.state.diagnostics()
    }
}
