//! Serializes one record into a [`BoundedBuffer`].
//!
//! Layout: `[color] C/NAME [timestamp][pid][tid][tag][file(line):function] body[\n] [reset]`.
//! The returned range covers prefix through body (and newline), which is
//! exactly what the file sink receives.

use super::buffer::BoundedBuffer;
use super::color::Color;
use super::time::{self, DEFAULT_TIMESTAMP_FORMAT};
use crate::Error;
use crate::record::LogRecord;
use chrono::Local;
use std::ops::Range;

/// Default message buffer capacity in bytes.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1024;

/// How level colors reach the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Plain text.
    Off,
    /// Escape sequences embedded in the buffer around the line.
    #[default]
    Ansi,
    /// The console sink switches its display attributes before the write and
    /// restores them afterwards; the buffer itself stays plain.
    Attributes,
}

/// Everything composition needs besides the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub max_buffer_size: usize,
    pub color_mode: ColorMode,
    /// strftime pattern for the timestamp segment.
    pub timestamp_format: String,
    /// Adds a `[pid:NNNN]` segment after the timestamp.
    pub process_info: bool,
    /// Adds a `[tid:NNNN]` segment after the timestamp.
    pub thread_info: bool,
    /// Terminates each line with `\n`.
    pub newline: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
            color_mode: ColorMode::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            process_info: false,
            thread_info: false,
            newline: true,
        }
    }
}

/// Composes `record` into `buf` and returns the uncolored range.
///
/// # Errors
/// Stops at the first step that doesn't fit ([`Error::Overflow`]) or whose
/// formatting fails ([`Error::Format`]). The buffer content is unspecified
/// afterwards and must be discarded.
pub fn compose(
    buf: &mut BoundedBuffer,
    record: &LogRecord<'_>,
    options: &FormatOptions,
) -> Result<Range<usize>, Error> {
    let ansi = options.color_mode == ColorMode::Ansi;

    if ansi {
        buf.write_args(format_args!("{}", record.level.style()))?;
    }

    let start = buf.len();
    write_prefix(buf, record, options)?;
    buf.write_args(record.args)?;
    if options.newline {
        buf.push_str("\n")?;
    }
    let end = buf.len();

    if ansi {
        buf.push_str(Color::RESET)?;
    }

    Ok(start..end)
}

fn write_prefix(
    buf: &mut BoundedBuffer,
    record: &LogRecord<'_>,
    options: &FormatOptions,
) -> Result<(), Error> {
    let level = record.level;
    let timestamp = time::format_timestamp(&Local::now(), &options.timestamp_format);
    buf.write_args(format_args!(
        "{}/{} [{timestamp}]",
        level.tag_char(),
        level.name()
    ))?;

    if options.process_info {
        buf.write_args(format_args!("[{}]", time::process_info()))?;
    }
    if options.thread_info {
        buf.write_args(format_args!("[{}]", time::thread_info()))?;
    }

    let location = &record.location;
    buf.write_args(format_args!(
        "[{}][{}({}):{}] ",
        record.tag, location.file, location.line, location.function
    ))
}
