//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// env_logger filter (e.g. "info", "ransomware_monitor_core=debug")
    pub log_filter: String,

    /// Default directory for exported logs and reports
    pub export_dir: PathBuf,

    /// Uploads larger than this are rejected before parsing
    pub max_import_bytes: usize,

    /// Load the static dashboard logs at startup
    pub seed_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: constants::DEFAULT_LOG_FILTER.to_string(),
            export_dir: default_export_dir(),
            max_import_bytes: constants::DEFAULT_MAX_IMPORT_BYTES,
            seed_demo: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_filter: constants::get_log_filter(),

            export_dir: env::var("MONITOR_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_export_dir()),

            max_import_bytes: constants::get_max_import_bytes(),

            seed_demo: constants::is_seed_demo_enabled(),
        }
    }
}

/// Get the base directory for exports
pub fn default_export_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::DATA_DIR_NAME)
        .join("exports")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.max_import_bytes, 10 * 1024 * 1024);
        assert!(config.seed_demo);
        assert!(config.export_dir.ends_with("exports"));
    }
}
