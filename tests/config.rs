//! Tests for config parsing and validation.

use std::fs;
use tempfile::TempDir;
use tlog::{ColorMode, Config, Error};

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert!(!config.general.diagnostics);
    assert!(config.console.colors);
    assert!(!config.file.enabled);
    assert_eq!(config.format.max_buffer_size, 1024);
    assert_eq!(config.format.timestamp_format, "%m-%d %H:%M:%S%.3f");
    assert!(config.format.newline);
    assert_eq!(config.color_mode(), ColorMode::Ansi);
    config.validate().unwrap();
}

#[test]
fn full_config() {
    let config = Config::parse(
        r#"
[general]
diagnostics = true

[console]
colors = true
color_model = "attributes"

[file]
enabled = true
path = "/var/log/app.log"

[format]
max_buffer_size = 256
timestamp_format = "%H:%M"
process_info = true
thread_info = true
newline = false
"#,
    )
    .unwrap();

    assert!(config.general.diagnostics);
    assert_eq!(config.color_mode(), ColorMode::Attributes);
    assert_eq!(
        config.file_path().unwrap().to_str().unwrap(),
        "/var/log/app.log"
    );

    let options = config.format_options();
    assert_eq!(options.max_buffer_size, 256);
    assert_eq!(options.timestamp_format, "%H:%M");
    assert!(options.process_info);
    assert!(options.thread_info);
    assert!(!options.newline);
}

#[test]
fn colors_flag_overrides_model() {
    let config = Config::parse("[console]\ncolors = false\ncolor_model = \"attributes\"\n").unwrap();
    assert_eq!(config.color_mode(), ColorMode::Off);
}

#[test]
fn tilde_in_file_path_is_expanded() {
    let config = Config::parse("[file]\nenabled = true\npath = \"~/logs/app.log\"\n").unwrap();
    let path = config.file_path().unwrap();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("logs/app.log"));
}

#[test]
fn blank_path_counts_as_missing() {
    let config = Config::parse("[file]\nenabled = true\npath = \"  \"\n").unwrap();
    assert!(config.file_path().is_none());
    assert!(matches!(config.validate(), Err(Error::MissingFilePath)));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(matches!(
        Config::parse("[format\nmax_buffer_size = 1"),
        Err(Error::ConfigParse(_))
    ));
    assert!(matches!(
        Config::parse("[format]\nmax_buffer_size = \"big\""),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("nope.toml")).unwrap();
    assert!(!config.file.enabled);
}

#[test]
fn load_from_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tlog.toml");
    fs::write(&path, "[format]\nmax_buffer_size = 512\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.format.max_buffer_size, 512);
}

#[test]
fn default_config_path_is_under_tlog() {
    if let Ok(path) = Config::get_config_path() {
        assert!(path.ends_with("tlog/tlog.toml"));
    }
}
