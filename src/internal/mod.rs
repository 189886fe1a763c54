//! tlog's own diagnostic logger, for trouble the public API deliberately
//! keeps quiet about (file sink failing to open, dropped writes).
//!
//! It is a separate [`Logger`] writing to stderr with its own lock, so it can
//! be called while another logger holds its lock. It never reports about
//! itself. Calls made before [`init`] silently vanish.

use crate::config::Config;
use crate::fmt::ColorMode;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::TerminalOutput;
use crate::record::Location;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Turns diagnostics on regardless of config. Only the first call takes effect.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(build_internal_logger);
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Turns diagnostics on when `general.diagnostics` is set.
pub fn init_with_config(config: &Config) {
    if !config.general.diagnostics {
        return;
    }
    init();
    debug(
        "INTERNAL",
        &format!(
            "Console: colors={:?}, file={}",
            config.color_mode(),
            config
                .file_path()
                .filter(|_| config.file.enabled)
                .map_or_else(|| "disabled".to_string(), |p| p.display().to_string())
        ),
    );
}

fn build_internal_logger() -> Logger {
    Logger::builder()
        .console(TerminalOutput::stderr())
        .colors(ColorMode::Off)
        .diagnostics(false)
        .build()
}

#[track_caller]
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let caller = std::panic::Location::caller();
        let location = Location::new(caller.file(), "tlog", caller.line());
        let _ = logger.emit(level, scope, location, format_args!("{msg}"));
    }
}

/// Startup and teardown details.
#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Config loaded, sink opened.
#[track_caller]
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Degraded but working: file sink inert, write dropped.
#[track_caller]
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

#[track_caller]
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
