//! Current-month expense and budget classification

use chrono::NaiveDate;

use crate::models::{BudgetClassification, BudgetStatus, Money, MonthPeriod, MonthlyBudget, Transaction};

/// Default share of the budget (in percent) at which spending turns into a warning
pub const DEFAULT_WARNING_PERCENT: u32 = 80;

/// Sum of expenses dated within the month containing `reference_date`
///
/// Both the first and the last day of the month are included.
pub fn compute_current_month_expense(transactions: &[Transaction], reference_date: NaiveDate) -> Money {
    let period = MonthPeriod::containing(reference_date);
    transactions
        .iter()
        .filter(|t| t.is_expense() && period.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Classify spending against the monthly budget
///
/// Evaluated in order: unset (including zero or negative budgets), exceeded
/// when spending reaches the budget, warning at `warning_percent` of it,
/// otherwise under. Threshold checks run on integer cents.
pub fn classify_budget(
    current_expense: Money,
    monthly_budget: MonthlyBudget,
    warning_percent: u32,
) -> BudgetClassification {
    let Some(budget) = monthly_budget.effective() else {
        return BudgetClassification {
            status: BudgetStatus::Unset,
            percentage_used: 0.0,
            budget: None,
            spent: current_expense,
            remaining: Money::zero(),
        };
    };

    let spent = i128::from(current_expense.cents());
    let limit = i128::from(budget.cents());

    let status = if spent >= limit {
        BudgetStatus::Exceeded
    } else if spent * 100 >= limit * i128::from(warning_percent) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Under
    };

    BudgetClassification {
        status,
        percentage_used: (current_expense.cents() as f64 * 100.0) / budget.cents() as f64,
        budget: Some(budget),
        spent: current_expense,
        remaining: budget - current_expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: u64, kind: TransactionType, cents: i64, date: NaiveDate) -> Transaction {
        Transaction::new(id, kind, Money::from_cents(cents), "General", date)
    }

    fn budget(cents: i64) -> MonthlyBudget {
        MonthlyBudget::new(Money::from_cents(cents))
    }

    fn april_expenses() -> Vec<Transaction> {
        vec![
            txn(1, TransactionType::Expense, 120000, date(2025, 4, 5)),
            txn(2, TransactionType::Expense, 60000, date(2025, 4, 10)),
        ]
    }

    #[test]
    fn test_current_month_expense() {
        let total = compute_current_month_expense(&april_expenses(), date(2025, 4, 15));
        assert_eq!(total, Money::from_cents(180000));
    }

    #[test]
    fn test_month_bounds_are_inclusive() {
        let transactions = vec![
            txn(1, TransactionType::Expense, 100, date(2025, 4, 1)),
            txn(2, TransactionType::Expense, 200, date(2025, 4, 30)),
            txn(3, TransactionType::Expense, 400, date(2025, 3, 31)),
            txn(4, TransactionType::Expense, 800, date(2025, 5, 1)),
        ];
        let total = compute_current_month_expense(&transactions, date(2025, 4, 15));
        assert_eq!(total, Money::from_cents(300));
    }

    #[test]
    fn test_income_and_empty_lists_are_zero() {
        assert_eq!(compute_current_month_expense(&[], date(2025, 4, 15)), Money::zero());

        let income = vec![txn(1, TransactionType::Income, 500000, date(2025, 4, 1))];
        assert_eq!(compute_current_month_expense(&income, date(2025, 4, 15)), Money::zero());
    }

    #[test]
    fn test_under_budget() {
        let spent = compute_current_month_expense(&april_expenses(), date(2025, 4, 15));
        let result = classify_budget(spent, budget(400000), DEFAULT_WARNING_PERCENT);
        assert_eq!(result.status, BudgetStatus::Under);
        assert_eq!(result.percentage_used, 45.0);
        assert_eq!(result.remaining, Money::from_cents(220000));
    }

    #[test]
    fn test_warning() {
        let spent = compute_current_month_expense(&april_expenses(), date(2025, 4, 15));
        let result = classify_budget(spent, budget(200000), DEFAULT_WARNING_PERCENT);
        assert_eq!(result.status, BudgetStatus::Warning);
        assert_eq!(result.percentage_used, 90.0);
    }

    #[test]
    fn test_warning_threshold_is_inclusive() {
        let result = classify_budget(Money::from_cents(8000), budget(10000), DEFAULT_WARNING_PERCENT);
        assert_eq!(result.status, BudgetStatus::Warning);

        let result = classify_budget(Money::from_cents(7999), budget(10000), DEFAULT_WARNING_PERCENT);
        assert_eq!(result.status, BudgetStatus::Under);
    }

    #[test]
    fn test_exceeded() {
        let result = classify_budget(Money::from_cents(450000), budget(400000), DEFAULT_WARNING_PERCENT);
        assert_eq!(result.status, BudgetStatus::Exceeded);
        assert_eq!(result.overspend(), Money::from_cents(50000));

        let exact = classify_budget(Money::from_cents(400000), budget(400000), DEFAULT_WARNING_PERCENT);
        assert_eq!(exact.status, BudgetStatus::Exceeded);
        assert_eq!(exact.percentage_used, 100.0);
    }

    #[test]
    fn test_unset_and_zero_budget() {
        for stored in [MonthlyBudget::unset(), budget(0), budget(-500)] {
            let result = classify_budget(Money::from_cents(180000), stored, DEFAULT_WARNING_PERCENT);
            assert_eq!(result.status, BudgetStatus::Unset);
            assert_eq!(result.percentage_used, 0.0);
            assert_eq!(result.budget, None);
        }

        let nothing_spent = classify_budget(Money::zero(), budget(0), DEFAULT_WARNING_PERCENT);
        assert_eq!(nothing_spent.status, BudgetStatus::Unset);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let limit = budget(100000);
        let mut previous = BudgetStatus::Under;
        for cents in (0..=150000).step_by(250) {
            let status = classify_budget(Money::from_cents(cents), limit, DEFAULT_WARNING_PERCENT).status;
            assert!(status >= previous, "status went from {:?} to {:?} at {}", previous, status, cents);
            previous = status;
        }
        assert_eq!(previous, BudgetStatus::Exceeded);
    }

    #[test]
    fn test_custom_warning_percent() {
        let result = classify_budget(Money::from_cents(5000), budget(10000), 50);
        assert_eq!(result.status, BudgetStatus::Warning);
    }
}
