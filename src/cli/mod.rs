//! Command-line front end for the `tlog` binary.
//!
//! Bare invocation runs the demo: one line per level through the configured
//! logger. `tlog log <level> <tag> <message...>` emits a single line.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// tlog - Tagged, leveled console and file logging.
#[derive(Parser)]
#[command(name = "tlog", version, about = "Tagged, leveled console and file logging")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also append to this file, overriding the config
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Disable level colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Report tlog's own diagnostics on stderr
    #[arg(long, global = true)]
    pub diagnostics: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Emit one line per level.
    Demo {
        /// Tag for the demo lines
        #[arg(long, default_value = "LOG")]
        tag: String,
    },
    /// Emit a single line.
    Log {
        /// Log level: a, e, w, i, d, v or the full name
        #[arg(value_parser = Level::from_str)]
        level: Level,
        /// Tag
        tag: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
}

impl Cli {
    /// Config from `--config` or the default location, with flag overrides applied.
    ///
    /// # Errors
    /// Config read or parse errors.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(file) = &self.file {
            config.file.enabled = true;
            config.file.path = Some(file.to_string_lossy().into_owned());
        }
        if self.no_color {
            config.console.colors = false;
        }
        if self.diagnostics {
            config.general.diagnostics = true;
        }
        Ok(config)
    }
}

/// Parses arguments, builds the logger and runs the command.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    internal::init_with_config(&config);

    let logger = match Logger::from_config(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger.init() {
        eprintln!("Warning: {e}");
    }

    let code = match cli.command {
        None => demo(&logger, "LOG"),
        Some(Command::Demo { tag }) => demo(&logger, &tag),
        Some(Command::Log {
            level,
            tag,
            message,
        }) => log_line(&logger, level, &tag, &message.join(" ")),
    };

    if let Err(e) = logger.deinit() {
        eprintln!("Warning: {e}");
    }
    code
}

fn demo(logger: &Logger, tag: &str) -> ExitCode {
    let mut failed = false;
    for level in Level::all() {
        let result = crate::emit!(
            in logger,
            level,
            tag,
            "this is a {} log test...",
            level.as_str()
        );
        failed |= result.is_err();
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn log_line(logger: &Logger, level: Level, tag: &str, message: &str) -> ExitCode {
    match crate::emit!(in logger, level, tag, "{message}") {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
