//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportCommands, ReportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionType};

/// Transaction type as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

/// Parse a date using the configured format, falling back to YYYY-MM-DD
pub(crate) fn parse_date(s: &str, settings: &Settings) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(s, &settings.date_format)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| {
            FintrackError::Validation(format!(
                "Invalid date '{}'. Use {} or YYYY-MM-DD",
                s, settings.date_format
            ))
        })
}

/// Parse an optional date, defaulting to today
pub(crate) fn parse_date_or_today(s: Option<&str>, settings: &Settings) -> FintrackResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s, settings),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a non-negative amount like "45", "45.5" or "$1200.00"
pub(crate) fn parse_amount(s: &str) -> FintrackResult<Money> {
    let amount = Money::parse(s)
        .map_err(|e| FintrackError::Validation(format!("Invalid amount '{}': {}", s, e)))?;
    if amount.is_negative() {
        return Err(FintrackError::Validation(format!(
            "Amount must not be negative: {}",
            s
        )));
    }
    Ok(amount)
}
