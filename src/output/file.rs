//! Append-mode file sink.

use crate::Error;
use crate::internal;

use super::Output;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Open log file. Dropping it closes the handle.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: File,
}

impl FileOutput {
    /// Opens `path` for appending, creating the file and missing parent directories.
    ///
    /// # Errors
    /// [`Error::FileOpen`] carrying the path and the underlying I/O error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let wrap = |source| Error::FileOpen {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(wrap)?;
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(wrap)?;

        Ok(Self { path, file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.file.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.file.flush()?;
        Ok(())
    }
}
