//! Configuration system tests
//!
//! Tests for config paths and loading/saving the user config.

use retype::config::{OutputFormat, RetypeConfig};
use retype::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_retype() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("retype"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Retype Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = RetypeConfig::default();
    assert_eq!(config.output, OutputFormat::Text);
    assert!(!config.file_logging);
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = RetypeConfig {
        output: OutputFormat::Json,
        file_logging: true,
    };
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(RetypeConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = RetypeConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, RetypeConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "output: [not, a, format").unwrap();

    assert_eq!(RetypeConfig::load_from(&path), RetypeConfig::default());
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "output: json\n").unwrap();

    let config = RetypeConfig::load_from(&path);
    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.file_logging);
}

#[test]
fn test_config_serialize_lowercase() {
    let config = RetypeConfig {
        output: OutputFormat::Json,
        file_logging: false,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("output: json"), "{yaml}");
}
