//! Builds a [`Logger`] from a loaded [`Config`].

use super::Logger;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Validates `config` and wires its console, file and layout settings into a logger.
    ///
    /// # Errors
    /// [`crate::Error::MissingFilePath`] or [`crate::Error::InvalidBufferSize`]
    /// from [`Config::validate`].
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        config.validate()?;

        let format = config.format_options();
        let mut builder = Self::builder()
            .max_buffer_size(format.max_buffer_size)
            .colors(format.color_mode)
            .timestamp_format(format.timestamp_format)
            .process_info(format.process_info)
            .thread_info(format.thread_info)
            .newline(format.newline);

        if config.file.enabled
            && let Some(path) = config.file_path()
        {
            internal::debug("LOGGER", &format!("File sink: {}", path.display()));
            builder = builder.file(path);
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::fmt::ColorMode;

    #[test]
    fn defaults_build_console_only_logger() {
        let logger = Logger::from_config(&Config::default()).unwrap();
        assert!(logger.file_path().is_none());
        assert_eq!(logger.format_options().color_mode, ColorMode::Ansi);
        assert_eq!(logger.format_options().max_buffer_size, 1024);
    }

    #[test]
    fn enabled_file_without_path_is_rejected() {
        let config = Config::parse("[file]\nenabled = true\n").unwrap();
        assert!(matches!(
            Logger::from_config(&config),
            Err(Error::MissingFilePath)
        ));
    }

    #[test]
    fn disabled_file_path_is_ignored() {
        let config = Config::parse("[file]\nenabled = false\npath = \"/tmp/x.log\"\n").unwrap();
        let logger = Logger::from_config(&config).unwrap();
        assert!(logger.file_path().is_none());
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let config = Config::parse("[format]\nmax_buffer_size = 0\n").unwrap();
        assert!(matches!(
            Logger::from_config(&config),
            Err(Error::InvalidBufferSize)
        ));
    }
}
