//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end and logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Tracing filter directive (overridden by `RUST_LOG`).
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File that receives logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show 1-based cell numbers in empty squares.
    #[serde(default = "default_show_cell_numbers")]
    #[getter(copy)]
    show_cell_numbers: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the given file, or falls back to defaults when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml("show_cell_numbers = false\n").expect("parses");
        assert!(!config.show_cell_numbers());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_toml("board_size = 4\n").expect_err("unknown key");
        assert!(err.message.contains("Failed to parse config"));
    }
}
