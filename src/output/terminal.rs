//! Console sink on stdout or stderr.

use crate::fmt::{Color, Style};

use super::Output;
use std::io::{self, Write};

/// Standard stream a [`TerminalOutput`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Unbuffered console sink. Each line goes out with one `write_all` on the locked stream.
#[derive(Debug, Clone, Default)]
pub struct TerminalOutput {
    stream: Stream,
    /// Attribute mode pushes escapes straight to the terminal; remember whether one is active.
    styled: bool,
}

impl TerminalOutput {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
            styled: false,
        }
    }

    /// Used by the internal diagnostics logger so its lines don't mix into stdout.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
            styled: false,
        }
    }

    fn write_raw(&self, bytes: &[u8]) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(bytes),
            Stream::Stderr => io::stderr().lock().write_all(bytes),
        }
    }
}

impl Output for TerminalOutput {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        self.write_raw(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn set_style(&mut self, style: Style) -> Result<(), crate::Error> {
        self.write_raw(style.ansi().as_bytes())?;
        self.styled = true;
        Ok(())
    }

    fn restore_style(&mut self) -> Result<(), crate::Error> {
        if self.styled {
            self.write_raw(Color::RESET.as_bytes())?;
            self.styled = false;
        }
        Ok(())
    }
}
