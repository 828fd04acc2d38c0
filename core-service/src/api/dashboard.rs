//! Dashboard State - view-model behind the monitoring dashboard
//!
//! Owns the honeypot log collection, settings and UI flags. All mutation goes
//! through `&mut self`; nothing is global.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logic::config::AppConfig;
use crate::logic::logs::seed::{self, Alert, Prediction, ThreatPoint};
use crate::logic::logs::{
    Clock, ImportError, LogCollection, LogDetail, LogImporter, LogRecord, SystemClock,
};
use crate::logic::notify::{Notification, Notifier};
use crate::logic::settings::Settings;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    #[default]
    Dashboard,
    HoneypotLogs,
    AiPredictions,
    Alerts,
    Reports,
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Section::Dashboard),
            "honeypotLogs" => Ok(Section::HoneypotLogs),
            "aiPredictions" => Ok(Section::AiPredictions),
            "alerts" => Ok(Section::Alerts),
            "reports" => Ok(Section::Reports),
            other => Err(format!("Unknown section: {}", other)),
        }
    }
}

pub struct DashboardState<C: Clock = SystemClock> {
    logs: LogCollection,
    importer: LogImporter<C>,
    max_import_bytes: usize,

    pub settings: Settings,
    pub predictions: Vec<Prediction>,
    pub alerts: Vec<Alert>,
    pub threat_trend: Vec<ThreatPoint>,

    pub sidebar_expanded: bool,
    pub active_section: Section,
    pub show_notifications: bool,
    selected_log: Option<u64>,
}

impl DashboardState<SystemClock> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_importer(config, LogImporter::new())
    }
}

impl<C: Clock> DashboardState<C> {
    pub fn with_importer(config: &AppConfig, importer: LogImporter<C>) -> Self {
        let logs = if config.seed_demo {
            LogCollection::from_records(seed::honeypot_logs())
        } else {
            LogCollection::new()
        };

        Self {
            logs,
            importer,
            max_import_bytes: config.max_import_bytes,
            settings: Settings::default(),
            predictions: seed::predictions(),
            alerts: seed::alerts(),
            threat_trend: seed::threat_trend(),
            sidebar_expanded: true,
            active_section: Section::default(),
            show_notifications: false,
            selected_log: None,
        }
    }

    pub fn logs(&self) -> &LogCollection {
        &self.logs
    }

    /// Wholesale replacement, clears the selection
    pub fn replace_logs(&mut self, records: Vec<LogRecord>) {
        self.logs.replace(records);
        self.selected_log = None;
    }

    // ------------------------------------------------------------------------
    // Import boundary
    // ------------------------------------------------------------------------

    /// Import CSV text. The collection only changes on success.
    pub fn import_text(
        &mut self,
        text: &str,
        notifier: &dyn Notifier,
    ) -> Result<usize, ImportError> {
        let result = self.importer.import(text, self.logs.next_id_base());
        self.finish_import(result, notifier)
    }

    /// Import raw upload bytes (must be UTF-8)
    pub fn import_bytes(
        &mut self,
        bytes: &[u8],
        notifier: &dyn Notifier,
    ) -> Result<usize, ImportError> {
        let result = if bytes.len() > self.max_import_bytes {
            Err(ImportError::ParseFailure(format!(
                "file is {} bytes, limit is {}",
                bytes.len(),
                self.max_import_bytes
            )))
        } else {
            self.importer.import_bytes(bytes, self.logs.next_id_base())
        };
        self.finish_import(result, notifier)
    }

    /// Read the file asynchronously, then parse in one go
    pub async fn import_file(
        &mut self,
        path: &Path,
        notifier: &dyn Notifier,
    ) -> Result<usize, ImportError> {
        log::info!("Importing logs from {:?}", path);
        match tokio::fs::read(path).await {
            Ok(bytes) => self.import_bytes(&bytes, notifier),
            Err(e) => {
                let reason = format!("cannot read {:?}: {}", path, e);
                self.finish_import(Err(ImportError::ParseFailure(reason)), notifier)
            }
        }
    }

    fn finish_import(
        &mut self,
        result: Result<Vec<LogRecord>, ImportError>,
        notifier: &dyn Notifier,
    ) -> Result<usize, ImportError> {
        match result {
            Ok(batch) => {
                let count = batch.len();
                let noun = if count == 1 { "entry" } else { "entries" };
                self.logs.prepend(batch);
                log::info!("Imported {} log entries ({} total)", count, self.logs.len());
                notifier.notify(Notification::success(
                    "Import successful",
                    format!("Imported {} log {}", count, noun),
                ));
                Ok(count)
            }
            Err(ImportError::EmptyImport) => {
                log::warn!("Import produced no records");
                notifier.notify(Notification::error(
                    "Import failed",
                    "No valid data found in the CSV file",
                ));
                Err(ImportError::EmptyImport)
            }
            Err(ImportError::ParseFailure(reason)) => {
                log::warn!("Import failed: {}", reason);
                notifier.notify(Notification::error(
                    "Import failed",
                    "Failed to parse the CSV file. Please check the format.",
                ));
                Err(ImportError::ParseFailure(reason))
            }
        }
    }

    // ------------------------------------------------------------------------
    // UI state
    // ------------------------------------------------------------------------

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    pub fn set_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn toggle_notifications(&mut self) {
        self.show_notifications = !self.show_notifications;
    }

    /// Select a log and build the modal content
    pub fn open_log_details(&mut self, id: u64) -> Option<LogDetail> {
        let detail = self.logs.get(id).map(LogDetail::from_record)?;
        self.selected_log = Some(id);
        Some(detail)
    }

    pub fn close_log_details(&mut self) {
        self.selected_log = None;
    }

    pub fn selected_log(&self) -> Option<&LogRecord> {
        self.selected_log.and_then(|id| self.logs.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::logs::FixedClock;
    use crate::logic::notify::{NotificationKind, ToastQueue};

    fn state() -> DashboardState<FixedClock> {
        DashboardState::with_importer(
            &AppConfig::default(),
            LogImporter::with_clock(FixedClock("2024-01-01 00:00:00".to_string())),
        )
    }

    #[test]
    fn test_seeded_state() {
        let s = state();
        assert_eq!(s.logs().len(), 5);
        assert_eq!(s.predictions.len(), 4);
        assert_eq!(s.alerts.len(), 3);
        assert_eq!(s.threat_trend.len(), 7);
        assert!(s.sidebar_expanded);
        assert_eq!(s.active_section, Section::Dashboard);
    }

    #[test]
    fn test_unseeded_state() {
        let config = AppConfig { seed_demo: false, ..AppConfig::default() };
        let s = DashboardState::new(&config);
        assert!(s.logs().is_empty());
    }

    #[test]
    fn test_import_success_notifies_count() {
        let mut s = state();
        let toasts = ToastQueue::new();
        let text = "processtype,timestamp,detected,severity,behaviorsummary\n\
                    svchost.exe,2023-04-01 10:00:00,true,high,\"Suspicious encryption\"";

        let count = s.import_text(text, &toasts).unwrap();

        assert_eq!(count, 1);
        assert_eq!(s.logs().len(), 6);
        let first = &s.logs().records()[0];
        assert_eq!(first.id, 6);
        assert_eq!(first.behavior_summary, "\"Suspicious encryption\"");

        let t = toasts.drain();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, NotificationKind::Success);
        assert_eq!(t[0].description, "Imported 1 log entry");
    }

    #[test]
    fn test_empty_import_leaves_collection() {
        let mut s = state();
        let toasts = ToastQueue::new();

        let result = s.import_text("processtype,timestamp\n", &toasts);

        assert_eq!(result, Err(ImportError::EmptyImport));
        assert_eq!(s.logs().len(), 5);
        let t = toasts.drain();
        assert_eq!(t[0].kind, NotificationKind::Error);
        assert_eq!(t[0].description, "No valid data found in the CSV file");
    }

    #[test]
    fn test_parse_failure_leaves_collection() {
        let mut s = state();
        let toasts = ToastQueue::new();

        let result = s.import_bytes(&[b'a', b'\n', 0xc3, 0x28], &toasts);

        assert!(matches!(result, Err(ImportError::ParseFailure(_))));
        assert_eq!(s.logs().len(), 5);
        assert_eq!(
            toasts.drain()[0].description,
            "Failed to parse the CSV file. Please check the format."
        );
    }

    #[test]
    fn test_oversize_upload_rejected() {
        let config = AppConfig { max_import_bytes: 16, ..AppConfig::default() };
        let mut s = DashboardState::new(&config);
        let toasts = ToastQueue::new();

        let result = s.import_bytes(b"processtype\ncmd.exe\npowershell.exe\n", &toasts);
        assert!(matches!(result, Err(ImportError::ParseFailure(_))));
        assert_eq!(s.logs().len(), 5);
    }

    #[tokio::test]
    async fn test_import_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.csv");
        std::fs::write(&path, "processtype,detected\nransom.exe,True\nnotepad.exe,no\n").unwrap();

        let mut s = state();
        let toasts = ToastQueue::new();
        let count = s.import_file(&path, &toasts).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(toasts.drain()[0].description, "Imported 2 log entries");
        let ids: Vec<u64> = s.logs().records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 7, 1, 2, 3, 4, 5]);
        assert!(s.logs().records()[0].detected);
        assert!(!s.logs().records()[1].detected);
    }

    #[tokio::test]
    async fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = state();
        let toasts = ToastQueue::new();

        let result = s.import_file(&dir.path().join("missing.csv"), &toasts).await;

        assert!(matches!(result, Err(ImportError::ParseFailure(_))));
        assert_eq!(s.logs().len(), 5);
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_log_details_selection() {
        let mut s = state();

        let detail = s.open_log_details(3).unwrap();
        assert_eq!(detail.record.process_type, "powershell.exe");
        assert_eq!(s.selected_log().map(|r| r.id), Some(3));

        assert!(s.open_log_details(99).is_none());
        assert_eq!(s.selected_log().map(|r| r.id), Some(3));

        s.close_log_details();
        assert!(s.selected_log().is_none());
    }

    #[test]
    fn test_replace_logs_clears_selection() {
        let mut s = state();
        s.open_log_details(1).unwrap();

        s.replace_logs(seed::honeypot_logs()[..2].to_vec());
        assert_eq!(s.logs().len(), 2);
        assert!(s.selected_log().is_none());
    }

    #[test]
    fn test_import_after_replace_does_not_reuse_ids() {
        let mut s = state();
        let toasts = ToastQueue::new();
        s.replace_logs(seed::honeypot_logs()[3..].to_vec());

        s.import_text("processtype\na.exe\nb.exe", &toasts).unwrap();

        let ids: Vec<u64> = s.logs().records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 7, 4, 5]);
        let detail = s.open_log_details(4).unwrap();
        assert_eq!(detail.record.process_type, "explorer.exe");
    }

    #[test]
    fn test_ui_toggles() {
        let mut s = state();
        s.toggle_sidebar();
        s.toggle_notifications();
        s.set_section("aiPredictions".parse().unwrap());

        assert!(!s.sidebar_expanded);
        assert!(s.show_notifications);
        assert_eq!(s.active_section, Section::AiPredictions);
        assert!("settings".parse::<Section>().is_err());
    }
}
