//! TOML configuration: the external knobs of the logger (file sink, buffer
//! size, colors) plus line layout options.
//!
//! Loading is separated from the struct definitions so the file I/O and
//! validation stay independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, FormatConfig, GeneralConfig};

use crate::fmt::{ColorMode, FormatOptions};
use crate::internal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger —
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub format: FormatConfig,
}

impl Config {
    /// Loads the config from the default location, falling back to defaults when the file doesn't exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on a syntax or type error.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/tlog/tlog.toml`, e.g. `~/.config/tlog/tlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tlog").join("tlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Rejects settings no logger can be built from.
    ///
    /// # Errors
    /// [`crate::Error::MissingFilePath`] when the file sink is enabled without a
    /// path, [`crate::Error::InvalidBufferSize`] for a zero buffer.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.format.max_buffer_size == 0 {
            return Err(crate::Error::InvalidBufferSize);
        }
        if self.file.enabled && self.file_path().is_none() {
            return Err(crate::Error::MissingFilePath);
        }
        Ok(())
    }

    /// Configured log file with `~` expanded; `None` when unset or blank.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        let raw = self.file.path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(PathBuf::from(shellexpand::tilde(raw).as_ref()))
    }

    /// Maps the colors flag and color model string to the enum the composer uses.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        if !self.console.colors {
            return ColorMode::Off;
        }
        match self.console.color_model.to_lowercase().as_str() {
            "attributes" | "attr" | "console" => ColorMode::Attributes,
            _ => ColorMode::Ansi,
        }
    }

    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_buffer_size: self.format.max_buffer_size,
            color_mode: self.color_mode(),
            timestamp_format: self.format.timestamp_format.clone(),
            process_info: self.format.process_info,
            thread_info: self.format.thread_info,
            newline: self.format.newline,
        }
    }
}
