//! Random honeypot logs for demos and load testing the table.

use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use super::record::LogRecord;
use crate::constants::TIMESTAMP_FORMAT;

const PROCESSES: &[&str] = &[
    "cmd.exe",
    "powershell.exe",
    "python.exe",
    "explorer.exe",
    "svchost.exe",
    "unknown",
];

const MALICIOUS_SUMMARIES: &[&str] = &[
    "File encryption attempt detected on multiple directories",
    "Registry modifications and suspicious network connections",
    "Shadow copy deletion and ransomware note creation",
    "Mass file rename with unknown extension",
];

const BENIGN_SUMMARIES: &[&str] = &[
    "Regular file system operations with no encryption patterns",
    "Standard file browsing behavior with no malicious actions",
    "Scheduled maintenance task completed",
];

/// Generate `count` records with ids continuing after `id_base`.
/// Timestamps walk backwards from `start` so the batch reads newest first.
pub fn generate_logs<R: Rng>(
    rng: &mut R,
    count: usize,
    id_base: usize,
    start: NaiveDateTime,
) -> Vec<LogRecord> {
    let mut ts = start;

    (0..count)
        .map(|i| {
            let detected = rng.gen_bool(0.4);
            let severity = if detected {
                if rng.gen_bool(0.6) { "high" } else { "medium" }
            } else {
                "low"
            };
            let summaries = if detected { MALICIOUS_SUMMARIES } else { BENIGN_SUMMARIES };

            let record = LogRecord {
                id: (id_base + i + 1) as u64,
                process_type: PROCESSES.choose(rng).copied().unwrap_or("unknown").to_string(),
                timestamp: ts.format(TIMESTAMP_FORMAT).to_string(),
                detected,
                severity: severity.to_string(),
                behavior_summary: summaries.choose(rng).copied().unwrap_or_default().to_string(),
            };

            ts -= Duration::seconds(rng.gen_range(30..3600));
            record
        })
        .collect()
}
