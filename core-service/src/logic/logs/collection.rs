use serde::{Deserialize, Serialize};

use super::record::LogRecord;

/// Honeypot log list shown in the dashboard table.
/// Newest batch first; only `id` is unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogCollection {
    records: Vec<LogRecord>,
}

impl LogCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&LogRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Ids for the next batch start after this value. Equals `len()` while
    /// ids are 1..=len, stays above the highest id after a `replace`.
    pub fn next_id_base(&self) -> usize {
        let max_id = self.records.iter().map(|r| r.id).max().unwrap_or(0) as usize;
        max_id.max(self.records.len())
    }

    /// Put a new batch ahead of the existing records, keeping batch order
    pub fn prepend(&mut self, batch: Vec<LogRecord>) {
        let mut merged = batch;
        merged.append(&mut self.records);
        self.records = merged;
    }

    /// Full replacement is the only way records leave the collection
    pub fn replace(&mut self, records: Vec<LogRecord>) {
        self.records = records;
    }

    /// Case-insensitive substring search over the visible columns
    pub fn search(&self, query: &str) -> Vec<&LogRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }

        self.records
            .iter()
            .filter(|r| {
                r.process_type.to_lowercase().contains(&needle)
                    || r.severity.to_lowercase().contains(&needle)
                    || r.timestamp.contains(&needle)
                    || r.behavior_summary.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// `"all"` keeps everything
    pub fn filter_process(&self, process_type: &str) -> Vec<&LogRecord> {
        self.records
            .iter()
            .filter(|r| matches_process(r, process_type))
            .collect()
    }

    pub fn detected_count(&self) -> usize {
        self.records.iter().filter(|r| r.detected).count()
    }
}

pub(crate) fn matches_process(record: &LogRecord, process_type: &str) -> bool {
    let wanted = process_type.trim();
    wanted.is_empty()
        || wanted.eq_ignore_ascii_case("all")
        || record.process_type.eq_ignore_ascii_case(wanted)
}
