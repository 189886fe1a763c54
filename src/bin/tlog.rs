//! `tlog` demo binary.
//!
//! Usage:
//!   tlog                                 Emit one line per level
//!   tlog demo [--tag TAG]                Same, with a custom tag
//!   tlog log <level> <tag> <msg...>      Emit a single line
//!
//! Global flags: `--config PATH`, `--file PATH`, `--no-color`, `--diagnostics`.

use std::process::ExitCode;

fn main() -> ExitCode {
    tlog::cli::run()
}
