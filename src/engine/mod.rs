//! Transaction aggregation engine
//!
//! Pure functions over transaction snapshots: the current month's expense
//! total, per-category totals, a trailing monthly income/expense series and
//! the budget status. Nothing here reads the clock or touches storage; the
//! reference date and the budget figure are always passed in.
//!
//! Malformed records never abort a pass. They are dropped from the totals
//! and reported back in `DashboardReport::skipped`.

pub mod budget;
pub mod category;
pub mod monthly;

pub use budget::{classify_budget, compute_current_month_expense, DEFAULT_WARNING_PERCENT};
pub use category::{aggregate_by_category, CategoryTotal};
pub use monthly::{
    aggregate_monthly_series, trailing_window, MonthlyTotals, DEFAULT_WINDOW_MONTHS, MAX_WINDOW_MONTHS,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    BudgetClassification, Money, MonthPeriod, MonthlyBudget, SkipReason, Transaction,
    TransactionId, TransactionRecord, TransactionType,
};

/// A record left out of aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Position in the input list
    pub index: usize,
    pub id: TransactionId,
    pub reason: SkipReason,
}

/// Records split into usable transactions and skipped ones
#[derive(Debug, Clone, Default)]
pub struct ValidatedRecords {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRecord>,
}

/// Validate raw records, keeping the good ones and listing the rest
pub fn validate_records(records: &[TransactionRecord]) -> ValidatedRecords {
    let mut validated = ValidatedRecords::default();

    for (index, record) in records.iter().enumerate() {
        match Transaction::try_from(record) {
            Ok(txn) => validated.transactions.push(txn),
            Err(reason) => {
                tracing::warn!(index, id = record.id, %reason, "skipping malformed transaction");
                validated.skipped.push(SkippedRecord {
                    index,
                    id: record.id,
                    reason,
                });
            }
        }
    }

    validated
}

/// Overall income, expense and balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// income - expense; may be negative
    pub balance: Money,
}

/// Sum income and expense over all transactions
pub fn summarize(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for txn in transactions {
        match txn.kind {
            TransactionType::Income => totals.income += txn.amount,
            TransactionType::Expense => totals.expense += txn.amount,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

/// Everything the dashboard shows, computed in one pass over a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub reference_date: NaiveDate,
    pub period: MonthPeriod,
    pub period_expense_total: Money,
    pub budget: BudgetClassification,
    pub category_type: TransactionType,
    pub category_totals: Vec<CategoryTotal>,
    pub window_months: u32,
    pub monthly_series: Vec<MonthlyTotals>,
    pub totals: Totals,
    pub skipped: Vec<SkippedRecord>,
}

impl DashboardReport {
    /// Whether some input records were left out
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Tunables for an aggregation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Percent of the budget at which the status becomes a warning
    pub warning_percent: u32,
    /// Months in the trailing income/expense window
    pub window_months: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            warning_percent: DEFAULT_WARNING_PERCENT,
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}

/// Stateless aggregator configured with `EngineOptions`
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregationEngine {
    options: EngineOptions,
}

impl AggregationEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options: EngineOptions {
                warning_percent: options.warning_percent.clamp(1, 100),
                window_months: options.window_months.clamp(1, MAX_WINDOW_MONTHS),
            },
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn compute_current_month_expense(
        &self,
        transactions: &[Transaction],
        reference_date: NaiveDate,
    ) -> Money {
        compute_current_month_expense(transactions, reference_date)
    }

    pub fn classify_budget(&self, current_expense: Money, budget: MonthlyBudget) -> BudgetClassification {
        classify_budget(current_expense, budget, self.options.warning_percent)
    }

    pub fn aggregate_by_category(
        &self,
        transactions: &[Transaction],
        kind: TransactionType,
    ) -> Vec<CategoryTotal> {
        aggregate_by_category(transactions, kind)
    }

    pub fn aggregate_monthly_series(
        &self,
        transactions: &[Transaction],
        reference_date: NaiveDate,
    ) -> Vec<MonthlyTotals> {
        aggregate_monthly_series(transactions, reference_date, self.options.window_months)
    }

    /// Validate `records` and build the full dashboard report
    pub fn aggregate(
        &self,
        records: &[TransactionRecord],
        reference_date: NaiveDate,
        budget: MonthlyBudget,
        category_type: TransactionType,
    ) -> DashboardReport {
        let ValidatedRecords {
            transactions,
            skipped,
        } = validate_records(records);

        tracing::debug!(
            records = records.len(),
            valid = transactions.len(),
            skipped = skipped.len(),
            %reference_date,
            "aggregating transactions"
        );

        let period_expense_total = self.compute_current_month_expense(&transactions, reference_date);

        DashboardReport {
            reference_date,
            period: MonthPeriod::containing(reference_date),
            period_expense_total,
            budget: self.classify_budget(period_expense_total, budget),
            category_type,
            category_totals: self.aggregate_by_category(&transactions, category_type),
            window_months: self.options.window_months,
            monthly_series: self.aggregate_monthly_series(&transactions, reference_date),
            totals: summarize(&transactions),
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStatus, RawAmount};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: u64, kind: &str, amount: &str, category: &str, date: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            user_id: None,
            kind: kind.into(),
            amount: RawAmount::Text(amount.into()),
            category: category.into(),
            description: String::new(),
            date: date.into(),
        }
    }

    fn sample_records() -> Vec<TransactionRecord> {
        vec![
            record(1, "income", "5000", "Salary", "2025-01-01"),
            record(2, "expense", "1200", "Rent", "2025-01-05"),
            record(3, "income", "5000", "Salary", "2025-02-01"),
            record(4, "expense", "300", "Food", "2025-02-12"),
            record(5, "expense", "450.50", "Food", "2025-03-08"),
            record(6, "expense", "1200", "Rent", "2025-04-05"),
            record(7, "expense", "600", "Food", "2025-04-10"),
            record(8, "income", "5200", "Salary", "2025-04-01"),
        ]
    }

    #[test]
    fn test_full_dashboard() {
        let engine = AggregationEngine::default();
        let report = engine.aggregate(
            &sample_records(),
            date(2025, 4, 15),
            MonthlyBudget::new(Money::from_cents(200000)),
            TransactionType::Expense,
        );

        assert_eq!(report.period_expense_total, Money::from_cents(180000));
        assert_eq!(report.budget.status, BudgetStatus::Warning);
        assert_eq!(report.budget.percentage_used, 90.0);

        assert_eq!(report.category_totals[0].category, "Rent");
        assert_eq!(report.category_totals[0].total, Money::from_cents(240000));
        assert_eq!(report.category_totals[1].category, "Food");
        assert_eq!(report.category_totals[1].total, Money::from_cents(135050));

        let labels: Vec<_> = report.monthly_series.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Feb 2025", "Mar 2025", "Apr 2025"]);

        assert_eq!(report.totals.income, Money::from_cents(1520000));
        assert_eq!(report.totals.expense, Money::from_cents(375050));
        assert_eq!(report.totals.balance, Money::from_cents(1144950));
        assert!(!report.is_partial());
    }

    #[test]
    fn test_malformed_records_are_skipped_not_fatal() {
        let mut records = sample_records();
        records.push(record(9, "expense", "abc", "Food", "2025-04-11"));
        records.push(record(10, "expense", "100", "Food", "2025-04-31"));
        records.push(record(11, "expense", "-100", "Food", "2025-04-12"));

        let engine = AggregationEngine::default();
        let report = engine.aggregate(
            &records,
            date(2025, 4, 15),
            MonthlyBudget::unset(),
            TransactionType::Expense,
        );

        assert_eq!(report.period_expense_total, Money::from_cents(180000));
        assert_eq!(report.budget.status, BudgetStatus::Unset);
        assert!(report.is_partial());

        let skipped: Vec<_> = report.skipped.iter().map(|s| (s.index, s.id)).collect();
        assert_eq!(skipped, vec![(8, 9), (9, 10), (10, 11)]);
        assert_eq!(report.skipped[0].reason, SkipReason::InvalidAmount("abc".into()));
        assert_eq!(report.skipped[1].reason, SkipReason::InvalidDate("2025-04-31".into()));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let engine = AggregationEngine::default();
        let records = sample_records();
        let budget = MonthlyBudget::new(Money::from_cents(400000));

        let first = engine.aggregate(&records, date(2025, 4, 15), budget, TransactionType::Income);
        let second = engine.aggregate(&records, date(2025, 4, 15), budget, TransactionType::Income);
        assert_eq!(first, second);
    }

    #[test]
    fn test_options_are_normalized() {
        let engine = AggregationEngine::new(EngineOptions {
            warning_percent: 0,
            window_months: 0,
        });
        assert_eq!(engine.options().warning_percent, 1);
        assert_eq!(engine.options().window_months, 1);

        let engine = AggregationEngine::new(EngineOptions {
            warning_percent: 500,
            window_months: u32::MAX,
        });
        assert_eq!(engine.options().warning_percent, 100);
        assert_eq!(engine.options().window_months, MAX_WINDOW_MONTHS);
    }

    #[test]
    fn test_amounts_above_ceiling_are_skipped() {
        let records = vec![
            record(1, "expense", "50000000000000000", "Rent", "2025-04-05"),
            record(2, "expense", "50000000000000000", "Rent", "2025-04-06"),
            record(3, "expense", "10", "Food", "2025-04-07"),
        ];
        let report = AggregationEngine::default().aggregate(
            &records,
            date(2025, 4, 15),
            MonthlyBudget::unset(),
            TransactionType::Expense,
        );

        assert_eq!(report.skipped.len(), 2);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::InvalidAmount("50000000000000000".into())
        );
        assert_eq!(report.period_expense_total, Money::from_cents(1000));
        assert_eq!(report.totals.expense, Money::from_cents(1000));
    }

    #[test]
    fn test_totals_at_ceiling_do_not_panic() {
        let records: Vec<_> = (1..=10_000)
            .map(|id| record(id, "expense", "10000000000000", "Rent", "2025-04-05"))
            .collect();
        let report = AggregationEngine::default().aggregate(
            &records,
            date(2025, 4, 15),
            MonthlyBudget::new(Money::from_cents(100)),
            TransactionType::Expense,
        );

        assert!(report.skipped.is_empty());
        assert_eq!(report.totals.expense, Money::from_cents(i64::MAX));
        assert_eq!(report.budget.status, BudgetStatus::Exceeded);
        assert_eq!(report.category_totals[0].count, 10_000);
    }

    #[test]
    fn test_summarize_negative_balance() {
        let ValidatedRecords { transactions, .. } = validate_records(&[
            record(1, "income", "100", "Gift", "2025-01-01"),
            record(2, "expense", "250", "Food", "2025-01-02"),
        ]);
        let totals = summarize(&transactions);
        assert_eq!(totals.balance, Money::from_cents(-15000));
    }
}
