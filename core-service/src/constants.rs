//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Environment overrides are read by the helpers at the bottom of this file.

/// App name
pub const APP_NAME: &str = "Ransomware Behaviour Monitoring";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter for env_logger
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Largest upload accepted by the importer (10 MB)
pub const DEFAULT_MAX_IMPORT_BYTES: usize = 10 * 1024 * 1024;

/// Directory name used under the platform data dir
pub const DATA_DIR_NAME: &str = "ransomware-monitor";

// ============================================
// Log record defaults
// ============================================

pub const DEFAULT_PROCESS_TYPE: &str = "unknown";
pub const DEFAULT_SEVERITY: &str = "low";
pub const DEFAULT_BEHAVIOR_SUMMARY: &str = "No behavior summary available";

/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header written by the CSV exporter, accepted as-is by the importer
pub const CSV_HEADER: &str = "processtype,timestamp,detected,severity,behaviorsummary";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the log filter from environment or use default
pub fn get_log_filter() -> String {
    std::env::var("MONITOR_LOG_FILTER")
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Get the import size limit from environment or use default
pub fn get_max_import_bytes() -> usize {
    std::env::var("MONITOR_MAX_IMPORT_BYTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_IMPORT_BYTES)
}

/// Check if the demo seed data should be loaded
pub fn is_seed_demo_enabled() -> bool {
    std::env::var("MONITOR_SEED_DEMO")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}
