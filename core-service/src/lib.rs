//! Ransomware Behaviour Monitoring - Dashboard Core
//!
//! Logic behind the monitoring dashboard: honeypot log import from CSV, the
//! in-memory log table, reports and export, settings, and auth form checks.

pub mod api;
pub mod constants;
pub mod logic;

pub use api::{DashboardState, Section};
pub use logic::config::AppConfig;
pub use logic::logs::{ImportError, LogCollection, LogImporter, LogRecord};
pub use logic::notify::{Notification, NotificationKind, Notifier, ToastQueue};
