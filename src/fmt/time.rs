//! Timestamp, process and thread helpers for the line prefix.
//!
//! All of them return owned strings and touch no shared state, so they are
//! safe to call from any thread with or without the logger lock.

use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

/// `MM-DD HH:MM:SS.mmm` in local time.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S%.3f";

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Current local time in the default prefix format.
#[must_use]
pub fn timestamp() -> String {
    format_timestamp(&Local::now(), DEFAULT_TIMESTAMP_FORMAT)
}

/// Formats `time` with a strftime pattern.
///
/// A malformed pattern falls back to [`DEFAULT_TIMESTAMP_FORMAT`] instead of
/// panicking inside chrono's `Display` impl.
#[must_use]
pub fn format_timestamp(time: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        out = time.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
    }
    out
}

/// `pid:NNNN`, zero-padded to four digits.
#[must_use]
pub fn process_info() -> String {
    format!("pid:{:04}", std::process::id())
}

/// `tid:NNNN`. Ids are handed out per thread on first use, starting at 1.
#[must_use]
pub fn thread_info() -> String {
    THREAD_ID.with(|id| format!("tid:{id:04}"))
}
