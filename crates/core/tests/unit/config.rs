//! # Configuration Tests

use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rvviz_core::common::ConfigError;
use rvviz_core::config::{Config, SimulatorConfig};
use rvviz_core::sim::CaptureMode;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.simulator.directory, None);
    assert_eq!(config.simulator.transcript_executable, "simulator");
    assert_eq!(config.simulator.structured_executable, "simulator3");
    assert_eq!(config.simulator.structured_flag, "--json");
    assert_eq!(config.simulator.structured_program, PathBuf::from("output.mc"));
    assert_eq!(config.session.mode, CaptureMode::Transcript);
    assert_eq!(config.session.program, None);
}

#[test]
fn test_empty_object_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.simulator.transcript_executable, SimulatorConfig::default().transcript_executable);
    assert_eq!(config.session.mode, CaptureMode::Transcript);
}

#[test]
fn test_partial_override() {
    let config = Config::from_json_str(
        r#"{"simulator":{"structured_executable":"pipesim"},"session":{"mode":"structured"}}"#,
    )
    .unwrap();
    assert_eq!(config.simulator.structured_executable, "pipesim");
    assert_eq!(config.simulator.structured_flag, "--json");
    assert_eq!(config.session.mode, CaptureMode::Structured);
}

#[test]
fn test_invalid_mode_is_rejected() {
    let err = Config::from_json_str(r#"{"session":{"mode":"Binary"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"session":{{"program":"output.mc"}}}}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.session.program, Some(PathBuf::from("output.mc")));
}

#[test]
fn test_missing_file() {
    let err = Config::from_json_file(std::path::Path::new("/nonexistent/rvviz.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
