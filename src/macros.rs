//! Call-site capturing entry points.
//!
//! Each level macro binds `file!()`, the enclosing function name and
//! `line!()`, then forwards the tag and `format_args!` to `emit`. A leading
//! `in <logger>,` targets an explicit [`Logger`](crate::Logger) instead of the
//! process-wide one.

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function {
    () => {{
        fn __f() {}
        $crate::record::function_name(::std::any::type_name_of_val(&__f))
    }};
}

/// [`Location`](crate::Location) of the invocation.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(::std::file!(), $crate::function!(), ::std::line!())
    };
}

/// Logs at an explicit level.
///
/// ```
/// use tlog::{Level, Logger, MemoryOutput};
///
/// let console = MemoryOutput::new();
/// let logger = Logger::builder().console(console.clone()).build();
/// tlog::emit!(in &logger, Level::Warn, "NET", "retry {} of {}", 1, 3).unwrap();
/// assert!(console.contents().contains("W/WARN"));
/// ```
#[macro_export]
macro_rules! emit {
    (in $logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {
        $logger.emit($level, $tag, $crate::location!(), ::std::format_args!($($arg)+))
    };
    ($level:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit($level, $tag, $crate::location!(), ::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Assert`](crate::Level::Assert).
#[macro_export]
macro_rules! loga {
    (in $logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit!(in $logger, $crate::Level::Assert, $tag, $($arg)+)
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::emit!($crate::Level::Assert, $tag, $($arg)+)
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! loge {
    (in $logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit!(in $logger, $crate::Level::Error, $tag, $($arg)+)
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::emit!($crate::Level::Error, $tag, $($arg)+)
    };
}

/// Logs at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! logw {
    (in $logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit!(in $logger, $crate::Level::Warn, $tag, $($arg)+)
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::emit!($crate::Level::Warn, $tag, $($arg)+)
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! logi {
    (in $logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit!(in $logger, $crate::Level::Info, $tag, $($arg)+)
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::emit!($crate::Level::Info, $tag, $($arg)+)
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! logd {
    (in $logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit!(in $logger, $crate::Level::Debug, $tag, $($arg)+)
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::emit!($crate::Level::Debug, $tag, $($arg)+)
    };
}

/// Logs at [`Level::Verbose`](crate::Level::Verbose).
#[macro_export]
macro_rules! logv {
    (in $logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::emit!(in $logger, $crate::Level::Verbose, $tag, $($arg)+)
    };
    ($tag:expr, $($arg:tt)+) => {
        $crate::emit!($crate::Level::Verbose, $tag, $($arg)+)
    };
}
