//! Tests for the emitter against an in-memory console.

use regex::Regex;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tlog::{ColorMode, Error, Level, Location, Logger, MemoryOutput, Output};

fn plain_logger() -> (Logger, MemoryOutput) {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Off)
        .build();
    (logger, console)
}

#[test]
fn builder_defaults() {
    let logger = Logger::builder().build();
    assert!(!logger.is_initialized());
    assert!(logger.file_path().is_none());
    assert_eq!(logger.format_options().max_buffer_size, 1024);
    assert_eq!(logger.format_options().color_mode, ColorMode::Ansi);
}

#[test]
fn round_trip_line() {
    let (logger, console) = plain_logger();
    logger.init().unwrap();

    let written = logger
        .emit(
            Level::Info,
            "T",
            Location::new("f.c", "fn", 10),
            format_args!("x={}", 5),
        )
        .unwrap();

    let out = console.contents();
    let pattern =
        Regex::new(r"^I/INFO \[\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\]\[T\]\[f\.c\(10\):fn\] x=5\n$")
            .unwrap();
    assert!(pattern.is_match(&out), "unexpected line: {out:?}");
    assert_eq!(written, out.len());
}

#[test]
fn every_level_macro_uses_its_tag() {
    let (logger, console) = plain_logger();

    tlog::loga!(in &logger, "LOG", "a").unwrap();
    tlog::loge!(in &logger, "LOG", "e").unwrap();
    tlog::logw!(in &logger, "LOG", "w").unwrap();
    tlog::logi!(in &logger, "LOG", "i").unwrap();
    tlog::logd!(in &logger, "LOG", "d").unwrap();
    tlog::logv!(in &logger, "LOG", "v").unwrap();

    let out = console.contents();
    let prefixes: Vec<&str> = out
        .lines()
        .map(|line| line.split(' ').next().unwrap())
        .collect();
    assert_eq!(
        prefixes,
        vec!["A/ASSERT", "E/ERROR", "W/WARN", "I/INFO", "D/DEBUG", "V/VERBOSE"]
    );
}

#[test]
fn macro_captures_call_site() {
    let (logger, console) = plain_logger();
    let line = line!() + 1;
    tlog::logi!(in &logger, "T", "hi {}", "there").unwrap();

    let out = console.contents();
    let expected = format!("[T][tests/logger.rs({line}):macro_captures_call_site] hi there\n");
    assert!(out.ends_with(&expected), "unexpected line: {out:?}");
}

#[test]
fn emit_initializes_lazily() {
    let (logger, console) = plain_logger();
    assert!(!logger.is_initialized());
    tlog::logi!(in &logger, "T", "first").unwrap();
    assert!(logger.is_initialized());
    assert_eq!(console.write_count(), 1);
}

#[test]
fn emit_after_deinit_reinitializes() {
    let (logger, console) = plain_logger();
    logger.init().unwrap();
    logger.deinit().unwrap();
    assert!(!logger.is_initialized());

    tlog::logi!(in &logger, "T", "again").unwrap();
    assert!(logger.is_initialized());
    assert!(console.contents().ends_with("] again\n"));
}

#[test]
fn oversized_body_writes_nothing() {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Off)
        .max_buffer_size(64)
        .build();

    let body = "x".repeat(100);
    let result = tlog::logi!(in &logger, "T", "{body}");

    assert!(matches!(result, Err(Error::Overflow { capacity: 64 })));
    assert_eq!(console.write_count(), 0);
    assert!(console.contents().is_empty());
}

#[test]
fn line_that_exactly_fits_is_written() {
    let (probe, probe_console) = plain_logger();
    let location = Location::new("f.c", "fn", 1);
    let len = probe
        .emit(Level::Info, "T", location, format_args!("body"))
        .unwrap();
    assert_eq!(len, probe_console.contents().len());

    let console = MemoryOutput::new();
    let exact = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Off)
        .max_buffer_size(len)
        .build();
    assert_eq!(
        exact
            .emit(Level::Info, "T", location, format_args!("body"))
            .unwrap(),
        len
    );

    let short = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Off)
        .max_buffer_size(len - 1)
        .build();
    assert!(
        short
            .emit(Level::Info, "T", location, format_args!("body"))
            .is_err()
    );
    assert_eq!(console.write_count(), 1);
}

#[test]
fn ansi_colors_wrap_the_console_line() {
    let console = MemoryOutput::new();
    let logger = Logger::builder().console(console.clone()).build();

    let written = tlog::loge!(in &logger, "T", "bad").unwrap();

    let out = console.contents();
    assert!(out.starts_with("\x1b[31mE/ERROR ["));
    assert!(out.ends_with("] bad\n\x1b[0m"));
    assert_eq!(written, out.len());
}

#[test]
fn attribute_colors_go_through_the_sink() {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Attributes)
        .build();

    tlog::logw!(in &logger, "T", "careful").unwrap();

    assert_eq!(console.styles(), vec![Level::Warn.style()]);
    assert_eq!(console.restore_count(), 1);
    assert!(!console.contents().contains('\x1b'));
}

#[test]
fn display_error_drops_the_line() {
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    let (logger, console) = plain_logger();
    let result = tlog::logi!(in &logger, "T", "value={}", Broken);
    assert!(matches!(result, Err(Error::Format)));
    assert_eq!(console.write_count(), 0);
}

/// Panics on any line containing "boom", leaving the logger lock poisoned.
struct Exploding(MemoryOutput);

impl Output for Exploding {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        assert!(!bytes.windows(4).any(|w| w == b"boom"), "sink exploded");
        self.0.write(bytes)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

#[test]
fn poisoned_lock_drops_only_the_next_line() {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(Exploding(console.clone()))
        .colors(ColorMode::Off)
        .build();

    let panicked = catch_unwind(AssertUnwindSafe(|| {
        let _ = tlog::logi!(in &logger, "T", "boom");
    }));
    assert!(panicked.is_err());

    let result = tlog::logi!(in &logger, "T", "lost");
    assert!(matches!(result, Err(Error::LockPoisoned)));
    assert_eq!(console.write_count(), 0);

    tlog::logi!(in &logger, "T", "back").unwrap();
    assert!(console.contents().ends_with("] back\n"));
}

/// Panics while being formatted, i.e. under the lock but before any sink is touched.
struct Panicky;

impl fmt::Display for Panicky {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("display exploded")
    }
}

#[test]
fn panicking_display_does_not_stop_other_threads() {
    let (logger, console) = plain_logger();

    std::thread::scope(|s| {
        let joined = s
            .spawn(|| tlog::logi!(in &logger, "T", "{}", Panicky))
            .join();
        assert!(joined.is_err());
    });

    let results: Vec<_> = (0..3)
        .map(|i| tlog::logi!(in &logger, "T", "after {i}"))
        .collect();
    assert!(matches!(results[0], Err(Error::LockPoisoned)));
    assert!(results[1..].iter().all(Result::is_ok));
    assert_eq!(console.write_count(), 2);
    assert!(console.contents().ends_with("] after 2\n"));
}

#[test]
fn deinit_reports_poisoned_lock_and_recovers() {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(Exploding(console.clone()))
        .colors(ColorMode::Off)
        .build();

    let _ = catch_unwind(AssertUnwindSafe(|| {
        let _ = tlog::logi!(in &logger, "T", "boom");
    }));

    assert!(matches!(logger.deinit(), Err(Error::LockPoisoned)));
    tlog::logi!(in &logger, "T", "fresh").unwrap();
    assert_eq!(console.write_count(), 1);
}

#[test]
fn process_and_thread_segments() {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Off)
        .process_info(true)
        .thread_info(true)
        .build();

    tlog::logi!(in &logger, "T", "ids").unwrap();

    let pattern = Regex::new(r"^I/INFO \[[^\]]+\]\[pid:\d{4,}\]\[tid:\d{4,}\]\[T\]").unwrap();
    assert!(pattern.is_match(&console.contents()));
}

#[test]
fn custom_timestamp_format() {
    let console = MemoryOutput::new();
    let logger = Logger::builder()
        .console(console.clone())
        .colors(ColorMode::Off)
        .timestamp_format("%Y")
        .newline(false)
        .build();

    tlog::logi!(in &logger, "T", "y").unwrap();

    let pattern = Regex::new(r"^I/INFO \[\d{4}\]\[T\]\[[^\]]+\] y$").unwrap();
    assert!(pattern.is_match(&console.contents()));
}
