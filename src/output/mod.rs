//! Sinks a composed line is written to.
//!
//! The logger owns exactly one console sink and at most one file sink. Both
//! are only touched while the logger lock is held, so implementations take
//! `&mut self` and need `Send` but not `Sync`.

mod file;
mod memory;
mod terminal;

pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;

use crate::fmt::Style;

/// Destination for composed log bytes.
pub trait Output: Send {
    /// Writes one composed line as a single unit.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), crate::Error>;

    /// Switches display attributes ahead of a write in
    /// [`ColorMode::Attributes`](crate::fmt::ColorMode::Attributes).
    /// Sinks without a notion of attributes ignore it.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn set_style(&mut self, _style: Style) -> Result<(), crate::Error> {
        Ok(())
    }

    /// Restores whatever attributes were active before `set_style`.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn restore_style(&mut self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        (**self).write(bytes)
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        (**self).flush()
    }

    fn set_style(&mut self, style: Style) -> Result<(), crate::Error> {
        (**self).set_style(style)
    }

    fn restore_style(&mut self) -> Result<(), crate::Error> {
        (**self).restore_style()
    }
}
