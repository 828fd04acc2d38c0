//! Log Exporter
//!
//! Writes the honeypot log table to disk for spreadsheet or offline analysis.

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use super::record::LogRecord;
use crate::constants::CSV_HEADER;

// ============================================================================
// EXPORT FORMATS
// ============================================================================

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Same header the importer reads
    Csv,
    /// Pretty JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" => Ok(ExportFormat::Jsonl),
            other => Err(format!("Unsupported export format: {} (csv, json, jsonl)", other)),
        }
    }
}

// ============================================================================
// EXPORT FUNCTIONS
// ============================================================================

/// Export records to file, returns the number written
pub fn export_records(
    records: &[LogRecord],
    destination: &Path,
    format: ExportFormat,
) -> std::io::Result<usize> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(destination)?;
    write_records(&mut file, records, format)?;
    file.flush()?;

    log::info!("Exported {} log records to {:?}", records.len(), destination);
    Ok(records.len())
}

/// Write records in the given format to any writer
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[LogRecord],
    format: ExportFormat,
) -> std::io::Result<()> {
    match format {
        ExportFormat::Csv => write_csv(out, records),
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(records)?;
            out.write_all(json.as_bytes())?;
            writeln!(out)
        }
        ExportFormat::Jsonl => {
            for record in records {
                writeln!(out, "{}", serde_json::to_string(record)?)?;
            }
            Ok(())
        }
    }
}

fn write_csv<W: Write>(out: &mut W, records: &[LogRecord]) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;

    for record in records {
        writeln!(
            out,
            "{},{},{},{},{}",
            csv_field(&record.process_type),
            csv_field(&record.timestamp),
            record.detected,
            csv_field(&record.severity),
            csv_field(&record.behavior_summary),
        )?;
    }

    Ok(())
}

/// The importer splits on every comma and line break, so neither may appear
/// inside a value.
fn csv_field(value: &str) -> String {
    value.replace(',', ";").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::logs::importer::{FixedClock, LogImporter};
    use crate::logic::logs::seed;
    use tempfile::TempDir;

    #[test]
    fn test_export_csv_reimports() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("export.csv");
        let mut records = seed::honeypot_logs();
        records[0].behavior_summary = "encrypts, then deletes".to_string();

        let count = export_records(&records, &dest, ExportFormat::Csv).unwrap();
        assert_eq!(count, 5);

        let content = std::fs::read_to_string(&dest).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6); // header + 5 records
        assert_eq!(lines[0], CSV_HEADER);

        let importer = LogImporter::with_clock(FixedClock("2000-01-01 00:00:00".to_string()));
        let back = importer.import(&content, 0).unwrap();
        assert_eq!(back.len(), 5);
        assert_eq!(back[0].behavior_summary, "encrypts; then deletes");
        assert_eq!(back[2].process_type, "powershell.exe");
        assert_eq!(back[4].timestamp, "2023-03-06 23:41:17");
        assert!(back[4].detected);
    }

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("nested").join("export.json");

        export_records(&seed::honeypot_logs(), &dest, ExportFormat::Json).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0]["processType"], "cmd.exe");
        assert_eq!(
            parsed[0]["behaviorSummary"],
            "File encryption attempt detected on multiple directories"
        );
    }

    #[test]
    fn test_export_jsonl() {
        let mut buf = Vec::new();
        write_records(&mut buf, &seed::honeypot_logs(), ExportFormat::Jsonl).unwrap();

        let content = String::from_utf8(buf).unwrap();
        assert_eq!(content.lines().count(), 5);
        let first: LogRecord = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(first.id, 1);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("jsonl".parse::<ExportFormat>(), Ok(ExportFormat::Jsonl));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
