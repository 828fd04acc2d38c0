//! Logs Module - Honeypot Log Records
//!
//! Everything the dashboard's log table needs: the record type, the in-memory
//! collection, the CSV importer, demo data, export and reports.

pub mod record;
pub mod collection;
pub mod importer;
pub mod seed;
pub mod mock;
pub mod export;
pub mod report;


pub use record::{LogRecord, LogDetail, Severity};
pub use collection::LogCollection;
pub use importer::{Clock, FixedClock, ImportError, LogImporter, SystemClock};
pub use export::{ExportFormat, export_records};
pub use report::{Report, ReportRequest, TimeRange, build_report};
