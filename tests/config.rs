//! Configuration system tests
//!
//! Tests for config paths and sheet config loading/saving.

use sheetgrid::config::SheetConfig;
use sheetgrid::config_paths;
use sheetgrid::csv::{Delimiter, QuoteMode};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("sheetgrid"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Sheet Config Tests
// ========================================================================

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SheetConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, SheetConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "delimiter: [not, a, delimiter").unwrap();

    assert_eq!(SheetConfig::load_from(&path), SheetConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = SheetConfig {
        delimiter: Delimiter::Semicolon,
        quoting: QuoteMode::Strict,
        coerce_numbers: true,
        placeholder_rows: 5,
        placeholder_cols: 2,
    };
    config.save_to(&path).unwrap();

    assert_eq!(SheetConfig::load_from(&path), config);
}

#[test]
fn test_yaml_uses_lowercase_names() {
    let config = SheetConfig {
        delimiter: Delimiter::Tab,
        ..SheetConfig::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("delimiter: tab"));
    assert!(yaml.contains("quoting: lenient"));
}
