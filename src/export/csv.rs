//! CSV Export functionality
//!
//! Exports transactions in the `ID,Date,Type,Category,Description,Amount`
//! layout, amounts with exactly two decimals.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

/// Default file name for a transaction export
pub const DEFAULT_CSV_FILENAME: &str = "transactions.csv";

const HEADERS: [&str; 6] = ["ID", "Date", "Type", "Category", "Description", "Amount"];

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(transactions: &[Transaction], writer: W) -> FintrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADERS)?;

    for txn in transactions {
        csv_writer.write_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.description.clone(),
            txn.amount.to_decimal_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    tracing::debug!(rows = transactions.len(), "exported transactions to CSV");
    Ok(())
}
