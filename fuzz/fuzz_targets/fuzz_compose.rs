#![no_main]
use libfuzzer_sys::fuzz_target;
use tlog::fmt::{BoundedBuffer, FormatOptions, compose};
use tlog::{ColorMode, Error, Level, Location, LogRecord};

fuzz_target!(|data: &str| {
    let (tag, body) = data.split_once('|').unwrap_or(("FUZZ", data));
    let level = Level::all()[data.len() % 6];

    for (capacity, color_mode) in [
        (16, ColorMode::Off),
        (96, ColorMode::Ansi),
        (1024, ColorMode::Attributes),
    ] {
        let options = FormatOptions {
            max_buffer_size: capacity,
            color_mode,
            ..FormatOptions::default()
        };
        let mut buf = BoundedBuffer::with_capacity(capacity);
        let result = compose(
            &mut buf,
            &LogRecord {
                level,
                tag,
                location: Location::new("fuzz.rs", "fuzz", 1),
                args: format_args!("{body}"),
            },
            &options,
        );

        // Never exceeds capacity; a line either fits whole or overflows.
        assert!(buf.len() <= capacity);
        match result {
            Ok(range) => assert!(range.end <= buf.len()),
            Err(Error::Overflow { .. }) => assert!(buf.overflowed()),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
});
