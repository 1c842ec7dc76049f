//! Export module for fintrack
//!
//! - CSV: transactions, spreadsheet-compatible
//! - JSON/YAML: dashboard reports

pub mod csv;
pub mod report;

pub use self::csv::{export_transactions_csv, DEFAULT_CSV_FILENAME};
pub use report::{export_report_json, export_report_yaml, ReportExport, EXPORT_SCHEMA_VERSION};
