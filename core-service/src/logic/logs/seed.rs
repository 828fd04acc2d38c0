//! Static dashboard data
//!
//! The records and widgets the dashboard shows before anything is imported.

use serde::{Deserialize, Serialize};

use super::record::LogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Ransomware,
    Safe,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ransomware => "Ransomware",
            Verdict::Safe => "Safe",
        }
    }
}

/// AI model prediction card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: u64,
    pub verdict: Verdict,
    /// Percent
    pub confidence: u8,
    pub timestamp: String,
}

/// Entry in the notifications panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    pub title: String,
    pub timestamp: String,
    pub severity: String,
    pub description: String,
}

/// One bar of the 7-day threat chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreatPoint {
    pub date: String,
    pub count: u32,
}

fn log(
    id: u64,
    process: &str,
    ts: &str,
    detected: bool,
    severity: &str,
    summary: &str,
) -> LogRecord {
    LogRecord {
        id,
        process_type: process.to_string(),
        timestamp: ts.to_string(),
        detected,
        severity: severity.to_string(),
        behavior_summary: summary.to_string(),
    }
}

pub fn honeypot_logs() -> Vec<LogRecord> {
    vec![
        log(1, "cmd.exe", "2023-03-07 14:32:45", true, "high",
            "File encryption attempt detected on multiple directories"),
        log(2, "python.exe", "2023-03-07 12:15:22", false, "low",
            "Regular file system operations with no encryption patterns"),
        log(3, "powershell.exe", "2023-03-07 10:45:11", true, "medium",
            "Registry modifications and suspicious network connections"),
        log(4, "explorer.exe", "2023-03-07 09:22:36", false, "low",
            "Standard file browsing behavior with no malicious actions"),
        log(5, "unknown", "2023-03-06 23:41:17", true, "high",
            "Shadow copy deletion and ransomware note creation"),
    ]
}

pub fn predictions() -> Vec<Prediction> {
    [
        (1, Verdict::Ransomware, 97, "2023-03-07 14:35:12"),
        (2, Verdict::Safe, 99, "2023-03-07 12:18:45"),
        (3, Verdict::Ransomware, 86, "2023-03-07 10:48:33"),
        (4, Verdict::Safe, 95, "2023-03-07 09:25:51"),
    ]
    .into_iter()
    .map(|(id, verdict, confidence, ts)| Prediction {
        id,
        verdict,
        confidence,
        timestamp: ts.to_string(),
    })
    .collect()
}

pub fn alerts() -> Vec<Alert> {
    [
        (1, "Suspicious Activity Detected", "2023-03-07 14:32:45", "high",
         "Multiple file encryption attempts detected from process cmd.exe"),
        (2, "Unusual Network Traffic", "2023-03-07 10:45:11", "medium",
         "Powershell process attempting to connect to known malicious IP"),
        (3, "System File Modification", "2023-03-06 23:41:17", "high",
         "Critical system files being modified by unknown process"),
    ]
    .into_iter()
    .map(|(id, title, ts, severity, description)| Alert {
        id,
        title: title.to_string(),
        timestamp: ts.to_string(),
        severity: severity.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn threat_trend() -> Vec<ThreatPoint> {
    [
        ("2023-03-01", 12),
        ("2023-03-02", 19),
        ("2023-03-03", 15),
        ("2023-03-04", 25),
        ("2023-03-05", 32),
        ("2023-03-06", 18),
        ("2023-03-07", 29),
    ]
    .into_iter()
    .map(|(date, count)| ThreatPoint { date: date.to_string(), count })
    .collect()
}
