//! Tests for loading the TOML configuration.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use strictly_tictactoe::AppConfig;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(
        &path,
        r#"log_filter = "strictly_tictactoe=debug"
log_file = "/tmp/ttt.log"
show_cell_numbers = false
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.log_filter(), "strictly_tictactoe=debug");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert!(!config.show_cell_numbers());
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    let err = AppConfig::load(Some(path.as_path())).expect_err("missing file");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_no_path_uses_defaults() {
    let config = AppConfig::load(None).expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert!(config.show_cell_numbers());
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "show_cell_numbers = \"yes\"\n").expect("Failed to write TOML");

    let err = AppConfig::from_file(&path).expect_err("bad type");
    assert!(err.message.contains("Failed to parse config"));
}
