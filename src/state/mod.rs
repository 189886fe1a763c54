//! Lifecycle of the shared sink state: uninitialized → `init` → ready →
//! `deinit` → uninitialized.
//!
//! The sinks live inside the mutex, so they can only be reached through a
//! guard. The initialized flag is readable without the lock but only written
//! while holding it.

use crate::Error;
use crate::fmt::{ColorMode, Style};
use crate::internal;
use crate::output::{FileOutput, Output};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sinks guarded by the logger lock.
pub struct Sinks {
    console: Box<dyn Output>,
    file: Option<FileOutput>,
    diagnostics: bool,
}

impl Sinks {
    /// Writes a composed line: the whole buffer to the console, `file_range` of it to the file.
    ///
    /// Sink errors are dropped here; only the diagnostics logger hears about them.
    pub fn write(&mut self, bytes: &[u8], file_range: Range<usize>, style: Style, mode: ColorMode) {
        let attributes = mode == ColorMode::Attributes;
        if attributes && let Err(e) = self.console.set_style(style) {
            self.report("console style", &e);
        }
        if let Err(e) = self.console.write(bytes) {
            self.report("console write", &e);
        }
        if attributes && let Err(e) = self.console.restore_style() {
            self.report("console restore", &e);
        }

        if let Some(file) = self.file.as_mut()
            && let Err(e) = file.write(&bytes[file_range])
            && self.diagnostics
        {
            internal::warn("FILE", &format!("Dropped file write: {e}"));
        }
    }

    fn report(&self, what: &str, e: &Error) {
        if self.diagnostics {
            internal::warn("CONSOLE", &format!("Dropped {what}: {e}"));
        }
    }

    fn close_file(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush()
                && self.diagnostics
            {
                internal::warn("FILE", &format!("Dropped final flush: {e}"));
            }
            if self.diagnostics {
                internal::debug("FILE", &format!("Closed {}", file.path().display()));
            }
        }
    }
}

/// The lock, the sinks behind it, and the initialized flag.
pub struct LoggerState {
    sinks: Mutex<Sinks>,
    initialized: AtomicBool,
    file_path: Option<PathBuf>,
    diagnostics: bool,
}

impl LoggerState {
    /// Starts uninitialized; nothing is opened until `init` or the first `emit`.
    #[must_use]
    pub fn new(console: Box<dyn Output>, file_path: Option<PathBuf>, diagnostics: bool) -> Self {
        Self {
            sinks: Mutex::new(Sinks {
                console,
                file: None,
                diagnostics,
            }),
            initialized: AtomicBool::new(false),
            file_path,
            diagnostics,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Whether this state reports its trouble to the diagnostics logger.
    #[must_use]
    pub const fn diagnostics(&self) -> bool {
        self.diagnostics
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Whether a file handle is currently open.
    #[must_use]
    pub fn file_active(&self) -> bool {
        self.sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .file
            .is_some()
    }

    /// A poisoned lock is taken over and its poison cleared.
    fn lock_recovering(&self) -> (MutexGuard<'_, Sinks>, bool) {
        match self.sinks.lock() {
            Ok(guard) => (guard, false),
            Err(poisoned) => {
                self.sinks.clear_poison();
                (poisoned.into_inner(), true)
            }
        }
    }

    /// Makes the state ready: recovers a poisoned lock, closes a stale file
    /// handle and reopens the configured file in append mode.
    ///
    /// # Errors
    /// [`Error::FileOpen`] when the file can't be opened. The state is still
    /// ready afterwards; only the file sink is inert.
    pub fn init(&self) -> Result<(), Error> {
        let (mut sinks, recovered) = self.lock_recovering();
        sinks.close_file();

        let result = match &self.file_path {
            Some(path) => FileOutput::open(path).map(|file| {
                sinks.file = Some(file);
            }),
            None => Ok(()),
        };
        self.initialized.store(true, Ordering::Release);
        drop(sinks);

        if self.diagnostics {
            if recovered {
                internal::warn("STATE", "Recovered poisoned logger lock");
            }
            match &result {
                Ok(()) => internal::debug("STATE", "Logger initialized"),
                Err(e) => internal::warn("STATE", &format!("File sink disabled: {e}")),
            }
        }
        result
    }

    /// Marks the state uninitialized, flushes and closes the file, flushes the console.
    ///
    /// # Errors
    /// [`Error::LockPoisoned`] if a writer had panicked under the lock. The
    /// file is closed and the poison cleared regardless.
    pub fn deinit(&self) -> Result<(), Error> {
        let (mut sinks, poisoned) = self.lock_recovering();
        self.initialized.store(false, Ordering::Release);
        sinks.close_file();
        if let Err(e) = sinks.console.flush() {
            sinks.report("console flush", &e);
        }
        drop(sinks);

        if self.diagnostics {
            internal::debug("STATE", "Logger deinitialized");
        }
        if poisoned {
            return Err(Error::LockPoisoned);
        }
        Ok(())
    }

    /// Lazy init: runs `init` when uninitialized. Its result is not surfaced.
    pub fn ensure_initialized(&self) {
        if !self.is_initialized() {
            let _ = self.init();
        }
    }

    /// Lazily initializes, then blocks until the lock is free.
    ///
    /// A poisoned lock is taken over and its poison cleared, so only the call
    /// that finds it fails; the next one writes normally.
    ///
    /// # Errors
    /// [`Error::LockPoisoned`] when a caller panicked under the lock since the last acquire.
    pub fn acquire(&self) -> Result<MutexGuard<'_, Sinks>, Error> {
        self.ensure_initialized();
        let (sinks, poisoned) = self.lock_recovering();
        if poisoned {
            return Err(Error::LockPoisoned);
        }
        Ok(sinks)
    }

    /// Flushes both sinks.
    ///
    /// # Errors
    /// The first flush error, or [`Error::LockPoisoned`].
    pub fn flush(&self) -> Result<(), Error> {
        let mut sinks = self.sinks.lock().map_err(|_| Error::LockPoisoned)?;
        sinks.console.flush()?;
        if let Some(file) = sinks.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
