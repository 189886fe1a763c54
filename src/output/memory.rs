//! In-memory console sink for tests and embedding hosts that render log lines themselves.

use crate::fmt::Style;

use super::Output;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle; every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    inner: Arc<Mutex<Captured>>,
}

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
    styles: Vec<Style>,
    restores: usize,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Captured> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().bytes).into_owned()
    }

    /// Number of `write` calls; one per emitted line.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Styles passed to `set_style`, in order.
    #[must_use]
    pub fn styles(&self) -> Vec<Style> {
        self.lock().styles.clone()
    }

    #[must_use]
    pub fn restore_count(&self) -> usize {
        self.lock().restores
    }
}

impl Output for MemoryOutput {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        let mut captured = self.lock();
        captured.bytes.extend_from_slice(bytes);
        captured.writes += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        Ok(())
    }

    fn set_style(&mut self, style: Style) -> Result<(), crate::Error> {
        self.lock().styles.push(style);
        Ok(())
    }

    fn restore_style(&mut self) -> Result<(), crate::Error> {
        self.lock().restores += 1;
        Ok(())
    }
}
