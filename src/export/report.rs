//! Dashboard report export
//!
//! Serializes a `DashboardReport` to JSON or YAML inside a versioned
//! envelope. Money values are written as integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::engine::DashboardReport;
use crate::error::{FintrackError, FintrackResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Envelope around an exported report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    pub export_version: u32,
    pub exported_at: DateTime<Utc>,
    pub report: DashboardReport,
}

impl ReportExport {
    pub fn new(report: DashboardReport) -> Self {
        Self {
            export_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            report,
        }
    }
}

/// Export a report as JSON
pub fn export_report_json<W: Write>(report: &DashboardReport, writer: &mut W, pretty: bool) -> FintrackResult<()> {
    let export = ReportExport::new(report.clone());
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

/// Export a report as YAML
pub fn export_report_yaml<W: Write>(report: &DashboardReport, writer: &mut W) -> FintrackResult<()> {
    let export = ReportExport::new(report.clone());
    serde_yaml::to_writer(&mut *writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AggregationEngine;
    use crate::models::{BudgetStatus, Money, MonthlyBudget, RawAmount, TransactionRecord, TransactionType};
    use chrono::NaiveDate;

    fn report() -> DashboardReport {
        let records = vec![TransactionRecord {
            id: 1,
            user_id: None,
            kind: "expense".into(),
            amount: RawAmount::Text("1800".into()),
            category: "Rent".into(),
            description: String::new(),
            date: "2025-04-05".into(),
        }];
        AggregationEngine::default().aggregate(
            &records,
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            MonthlyBudget::new(Money::from_cents(200000)),
            TransactionType::Expense,
        )
    }

    #[test]
    fn test_json_export_round_trip() {
        let mut output = Vec::new();
        export_report_json(&report(), &mut output, true).unwrap();

        let parsed: ReportExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.export_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.report, report());
        assert_eq!(parsed.report.budget.status, BudgetStatus::Warning);
    }

    #[test]
    fn test_json_uses_lowercase_status() {
        let mut output = Vec::new();
        export_report_json(&report(), &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"status\":\"warning\""));
        assert!(text.contains("\"period_expense_total\":180000"));
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_report_yaml(&report(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("export_version: 1"));
        assert!(text.contains("label: Apr 2025"));
    }
}
