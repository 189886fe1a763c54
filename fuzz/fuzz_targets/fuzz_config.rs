#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    if let Ok(config) = tlog::Config::parse(data) {
        let _ = config.validate();
        let _ = config.file_path();
        let _ = config.format_options();
    }
});
