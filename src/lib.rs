#![forbid(unsafe_code)]

//! `tlog` - tagged, leveled logging to the console and an optional file.
//!
//! Every call composes one line into a fixed-capacity buffer and writes it
//! under a single lock, so lines from concurrent threads never interleave:
//!
//! ```text
//! I/INFO [03-07 14:05:06.123][NET][src/net.rs(42):connect] connected to 10.0.0.1
//! ```
//!
//! The console receives the line with level colors; the file sink receives
//! the same line without them. A line that doesn't fit the buffer is dropped
//! whole and the call returns an error.
//!
//! # Example
//!
//! ```
//! use tlog::{ColorMode, Logger, MemoryOutput, logi, logw};
//!
//! let console = MemoryOutput::new();
//! let logger = Logger::builder()
//!     .console(console.clone())
//!     .colors(ColorMode::Off)
//!     .build();
//!
//! logi!(in &logger, "MAIN", "started with {} workers", 4).unwrap();
//! logw!(in &logger, "NET", "connection timeout").unwrap();
//!
//! let out = console.contents();
//! assert!(out.contains("I/INFO ["));
//! assert!(out.contains("[NET]"));
//! ```
//!
//! Without `in <logger>,` the macros use the process-wide [`Logger::global`].
//!
//! # Features
//!
//! - `cli` (default): builds the `tlog` demo binary

// Core modules (always available)
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod record;
pub mod state;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{BoundedBuffer, Color, ColorMode, FormatOptions, Style};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{FileOutput, MemoryOutput, Output, TerminalOutput};
pub use record::{Location, LogRecord};

/// Initializes the process-wide logger (see [`Logger::init`]).
///
/// # Errors
/// [`Error::FileOpen`]; console logging works regardless.
pub fn init() -> Result<(), Error> {
    Logger::global().init()
}

/// Tears down the process-wide logger (see [`Logger::deinit`]).
///
/// # Errors
/// [`Error::LockPoisoned`] if a writer panicked under the lock.
pub fn deinit() -> Result<(), Error> {
    Logger::global().deinit()
}

/// Emits through the process-wide logger (see [`Logger::emit`]). The level
/// macros call this with the call site filled in.
///
/// # Errors
/// See [`Logger::emit`].
pub fn emit(
    level: Level,
    tag: &str,
    location: Location<'_>,
    args: std::fmt::Arguments<'_>,
) -> Result<usize, Error> {
    Logger::global().emit(level, tag, location, args)
}
