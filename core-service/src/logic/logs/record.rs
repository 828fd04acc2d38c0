use serde::{Deserialize, Serialize};

/// One observed process-behavior event, as shown in the honeypot log table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: u64,
    pub process_type: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Classified as ransomware-like
    pub detected: bool,
    /// Free text, normally one of low / medium / high
    pub severity: String,
    pub behavior_summary: String,
}

/// Badge levels used by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Capitalized badge text
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl LogRecord {
    /// Typed view over the stored severity. Unknown strings stay untouched in
    /// the record and map to `None` here.
    pub fn severity_level(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }

    /// "Ransomware" or "Safe"
    pub fn verdict_label(&self) -> &'static str {
        if self.detected { "Ransomware" } else { "Safe" }
    }

    /// Severity with the first character upper-cased, rest unchanged
    pub fn severity_label(&self) -> String {
        let mut chars = self.severity.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Content of the log details modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogDetail {
    pub record: LogRecord,
    pub verdict: String,
    pub severity_label: String,
    pub activity_log: String,
}

impl LogDetail {
    pub fn from_record(record: &LogRecord) -> Self {
        let tail = if record.detected {
            "4. Encryption patterns detected\n5. Ransom note creation attempt"
        } else {
            "4. Normal system operations\n5. No encryption patterns detected"
        };

        let activity_log = format!(
            "Process: {}\nStarted: {}\nActivity log:\n1. {}\n2. Access to system directory detected\n3. Multiple file operations in quick succession\n{}",
            record.process_type, record.timestamp, record.behavior_summary, tail
        );

        Self {
            record: record.clone(),
            verdict: record.verdict_label().to_string(),
            severity_label: record.severity_label(),
            activity_log,
        }
    }
}
