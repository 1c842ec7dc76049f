//! Income/expense series over a trailing window of months

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Money, MonthPeriod, Transaction, TransactionType};

/// Default number of months in the trailing window
pub const DEFAULT_WINDOW_MONTHS: u32 = 3;

/// Longest accepted trailing window (ten thousand years)
pub const MAX_WINDOW_MONTHS: u32 = 12 * 10_000;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub period: MonthPeriod,
    /// "MMM yyyy", e.g. "Apr 2025"
    pub label: String,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// First and last day of the trailing window ending with the reference month
///
/// The window is clamped to `1..=MAX_WINDOW_MONTHS`.
pub fn trailing_window(reference_date: NaiveDate, window_months: u32) -> (NaiveDate, NaiveDate) {
    let current = MonthPeriod::containing(reference_date);
    let first = current.minus_months(window_months.clamp(1, MAX_WINDOW_MONTHS) - 1);
    (first.start_date(), current.end_date())
}

/// Per-month income and expense totals over the trailing window
///
/// Entries are in chronological order. Months without any transaction in the
/// window are omitted rather than zero-filled.
pub fn aggregate_monthly_series(
    transactions: &[Transaction],
    reference_date: NaiveDate,
    window_months: u32,
) -> Vec<MonthlyTotals> {
    let (start, end) = trailing_window(reference_date, window_months);

    // BTreeMap keyed by (year, month) keeps chronological order
    let mut months: BTreeMap<MonthPeriod, (Money, Money)> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.date >= start && t.date <= end) {
        let entry = months
            .entry(MonthPeriod::containing(txn.date))
            .or_insert((Money::zero(), Money::zero()));
        match txn.kind {
            TransactionType::Income => entry.0 += txn.amount,
            TransactionType::Expense => entry.1 += txn.amount,
        }
    }

    months
        .into_iter()
        .map(|(period, (income, expense))| MonthlyTotals {
            label: period.label(),
            period,
            income,
            expense,
        })
        .collect()
}
