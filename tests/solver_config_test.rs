//! Tests for solver configuration loading.

use std::io::Write;
use tictactoe_solver::{ConfigError, OutputFormat, SolverConfig};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(*config.format(), OutputFormat::Text);
    assert!(*config.show_board());
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
log_filter = "tictactoe_core=debug"
format = "json"
show_board = false
"#,
    );
    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "tictactoe_core=debug");
    assert_eq!(*config.format(), OutputFormat::Json);
    assert!(!*config.show_board());
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("show_board = false\n");
    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(*config.format(), OutputFormat::Text);
    assert!(!*config.show_board());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = SolverConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().starts_with("Cannot read config file"));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_invalid_format_is_an_error() {
    let file = write_config("format = \"yaml\"\n");
    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Invalid config file"));
}

#[test]
fn test_with_format_overrides() {
    let config = SolverConfig::default().with_format(OutputFormat::Json);
    assert_eq!(*config.format(), OutputFormat::Json);
}
