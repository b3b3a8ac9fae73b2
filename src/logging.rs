//! Tracing setup shared by the front ends.

use crate::config::AppConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the filter, preferring `RUST_LOG` over the configured directive.
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Records which configuration is in effect.
///
/// Config is read before any subscriber exists, so this runs once the
/// subscriber is installed.
pub fn log_config(config: &AppConfig, path: Option<&Path>) {
    let source = path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    info!(
        %source,
        log_filter = %config.log_filter(),
        log_file = %config.log_file().display(),
        show_cell_numbers = config.show_cell_numbers(),
        "Configuration loaded"
    );
}
