//! Report builder for the "Generate Report" panel.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDateTime};
use serde::Serialize;

use super::collection::matches_process;
use super::record::{LogRecord, Severity};
use crate::constants::TIMESTAMP_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeRange {
    /// Same calendar day as `now`
    Today,
    /// Monday of the current week up to `now`
    ThisWeek,
    All,
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "today" => Ok(TimeRange::Today),
            "thisweek" | "week" => Ok(TimeRange::ThisWeek),
            "all" => Ok(TimeRange::All),
            other => Err(format!("Unknown time range: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub range: TimeRange,
    /// `"all"` or a process name
    pub process_type: String,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            range: TimeRange::All,
            process_type: "all".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub range: TimeRange,
    pub process_type: String,
    pub total: usize,
    pub detected: usize,
    /// Severities outside low/medium/high are counted under `other`
    pub by_severity: BTreeMap<String, usize>,
    pub records: Vec<LogRecord>,
}

pub fn build_report(records: &[LogRecord], request: &ReportRequest, now: NaiveDateTime) -> Report {
    let selected: Vec<LogRecord> = records
        .iter()
        .filter(|r| matches_process(r, &request.process_type))
        .filter(|r| in_range(r, request.range, now))
        .cloned()
        .collect();

    let mut by_severity = BTreeMap::new();
    for r in &selected {
        let key = r.severity_level().map(|s| s.as_str()).unwrap_or("other");
        *by_severity.entry(key.to_string()).or_insert(0) += 1;
    }
    for level in [Severity::Low, Severity::Medium, Severity::High] {
        by_severity.entry(level.as_str().to_string()).or_insert(0);
    }

    Report {
        range: request.range,
        process_type: request.process_type.clone(),
        total: selected.len(),
        detected: selected.iter().filter(|r| r.detected).count(),
        by_severity,
        records: selected,
    }
}

fn in_range(record: &LogRecord, range: TimeRange, now: NaiveDateTime) -> bool {
    if range == TimeRange::All {
        return true;
    }

    let Ok(ts) = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT) else {
        return false;
    };
    if ts > now {
        return false;
    }

    let today = now.date();
    match range {
        TimeRange::Today => ts.date() == today,
        TimeRange::ThisWeek => {
            let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            ts.date() >= monday
        }
        TimeRange::All => true,
    }
}
