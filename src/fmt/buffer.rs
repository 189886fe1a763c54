//! Fixed-capacity message buffer.
//!
//! Appends that would cross the capacity are rejected whole and latch the
//! overflow flag, so `fmt::Error` coming out of a `write!` can be told apart
//! from an error raised by a caller's `Display` impl.

use crate::Error;
use std::fmt;

/// Append-only byte buffer that never grows past its capacity.
#[derive(Debug)]
pub struct BoundedBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    overflowed: bool,
}

impl BoundedBuffer {
    /// Allocates the full capacity up front; the buffer never reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
            overflowed: false,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    /// Set once any append was rejected; later appends are rejected too.
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.overflowed
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends `s` entirely or not at all.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if `s` doesn't fit in the remaining capacity.
    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        if self.overflowed || s.len() > self.remaining() {
            self.overflowed = true;
            return Err(Error::Overflow {
                capacity: self.capacity,
            });
        }
        self.bytes.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Writes formatted arguments, classifying a failure as overflow or a caller formatting error.
    ///
    /// # Errors
    /// [`Error::Overflow`] when the expansion doesn't fit, [`Error::Format`] when a
    /// `Display` impl fails on its own.
    pub fn write_args(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let result = fmt::Write::write_fmt(self, args);
        // A Display impl may swallow the write error and still return Ok.
        if self.overflowed {
            return Err(Error::Overflow {
                capacity: self.capacity,
            });
        }
        result.map_err(|_| Error::Format)
    }
}

impl fmt::Write for BoundedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}
