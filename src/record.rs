//! The per-call record handed from the entry points to the composer.

use crate::level::Level;
use std::fmt;

/// Call site of a log statement, captured by the level macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> Location<'a> {
    #[must_use]
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// Borrowed for the duration of one `emit` call, never stored.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub tag: &'a str,
    pub location: Location<'a>,
    pub args: fmt::Arguments<'a>,
}

/// Reduces the type name of a marker fn (`krate::module::outer::__f`) to `outer`.
///
/// Closures add `{{closure}}` segments; those are skipped so a log call
/// inside a closure still reports the enclosing function.
#[doc(hidden)]
#[must_use]
pub fn function_name(marker: &'static str) -> &'static str {
    let mut path = marker.strip_suffix("::__f").unwrap_or(marker);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marker_and_module_path() {
        assert_eq!(function_name("app::net::connect::__f"), "connect");
    }

    #[test]
    fn skips_closure_segments() {
        assert_eq!(
            function_name("app::run::{{closure}}::{{closure}}::__f"),
            "run"
        );
    }

    #[test]
    fn bare_name_passes_through() {
        assert_eq!(function_name("main"), "main");
    }

    #[test]
    fn macro_reports_enclosing_function() {
        assert_eq!(crate::function!(), "macro_reports_enclosing_function");
        let inner = || crate::function!();
        assert_eq!(inner(), "macro_reports_enclosing_function");
    }
}
