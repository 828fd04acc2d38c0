//! CSV Log Importer
//!
//! Turns uploaded delimited text into a batch of `LogRecord`s.
//! Splitting is naive: lines on `\n`, values on `,`. Quoted fields are not
//! unescaped and embedded commas shift columns.

use chrono::Utc;
use thiserror::Error;

use super::record::LogRecord;
use crate::constants::{
    DEFAULT_BEHAVIOR_SUMMARY, DEFAULT_PROCESS_TYPE, DEFAULT_SEVERITY, TIMESTAMP_FORMAT,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Text was readable but produced no records
    #[error("no valid data found")]
    EmptyImport,

    #[error("failed to parse import: {0}")]
    ParseFailure(String),
}

/// Source of the fallback timestamp for rows without one
pub trait Clock {
    /// Current time as `YYYY-MM-DD HH:MM:SS`
    fn now(&self) -> String;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same timestamp
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    ProcessType,
    Timestamp,
    Detected,
    Severity,
    BehaviorSummary,
    Ignored,
}

impl Column {
    fn from_header(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "processtype" => Column::ProcessType,
            "timestamp" => Column::Timestamp,
            "detected" => Column::Detected,
            "severity" => Column::Severity,
            "behaviorsummary" => Column::BehaviorSummary,
            _ => Column::Ignored,
        }
    }
}

#[derive(Default)]
struct RowFields<'a> {
    process_type: &'a str,
    timestamp: &'a str,
    detected: &'a str,
    severity: &'a str,
    behavior_summary: &'a str,
}

pub struct LogImporter<C: Clock = SystemClock> {
    clock: C,
}

impl LogImporter<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for LogImporter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LogImporter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Parse `text` into records whose ids continue after `id_base`
    /// (see `LogCollection::next_id_base`).
    /// Returns an empty batch when there are no data rows; the caller decides
    /// how to report that.
    pub fn parse(&self, text: &str, id_base: usize) -> Vec<LogRecord> {
        let mut lines = text.split('\n');
        let columns: Vec<Column> = match lines.next() {
            Some(header) => header.split(',').map(Column::from_header).collect(),
            None => return Vec::new(),
        };

        let mut batch = Vec::new();
        for (line_no, line) in lines.enumerate() {
            if line.trim().is_empty() {
                log::debug!("Skipping blank line {}", line_no + 2);
                continue;
            }

            let id = (id_base + batch.len() + 1) as u64;
            batch.push(self.build_record(id, &columns, line));
        }

        batch
    }

    /// Parse and reject empty batches
    pub fn import(&self, text: &str, id_base: usize) -> Result<Vec<LogRecord>, ImportError> {
        let batch = self.parse(text, id_base);
        if batch.is_empty() {
            return Err(ImportError::EmptyImport);
        }
        Ok(batch)
    }

    /// Decode raw upload bytes, then import
    pub fn import_bytes(
        &self,
        bytes: &[u8],
        id_base: usize,
    ) -> Result<Vec<LogRecord>, ImportError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ImportError::ParseFailure(format!("invalid UTF-8: {}", e)))?;
        self.import(text, id_base)
    }

    fn build_record(&self, id: u64, columns: &[Column], line: &str) -> LogRecord {
        let mut values = line.split(',');
        let mut row = RowFields::default();

        for column in columns {
            // Short rows leave the remaining columns empty
            let value = values.next().map(str::trim).unwrap_or("");
            match column {
                Column::ProcessType => row.process_type = value,
                Column::Timestamp => row.timestamp = value,
                Column::Detected => row.detected = value,
                Column::Severity => row.severity = value,
                Column::BehaviorSummary => row.behavior_summary = value,
                Column::Ignored => {}
            }
        }

        LogRecord {
            id,
            process_type: or_default(row.process_type, DEFAULT_PROCESS_TYPE),
            timestamp: if row.timestamp.is_empty() {
                self.clock.now()
            } else {
                row.timestamp.to_string()
            },
            detected: row.detected.to_lowercase() == "true",
            severity: if row.severity.is_empty() {
                DEFAULT_SEVERITY.to_string()
            } else {
                row.severity.to_lowercase()
            },
            behavior_summary: or_default(row.behavior_summary, DEFAULT_BEHAVIOR_SUMMARY),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() { default.to_string() } else { value.to_string() }
}
