//! Report display formatting
//!
//! Terminal views of the dashboard: summary totals, budget alert, category
//! breakdown and the monthly income/expense series.

use crate::engine::{CategoryTotal, DashboardReport, MonthlyTotals, Totals};
use crate::models::{BudgetClassification, BudgetStatus, TransactionType};

/// Alert text for a budget classification, None when there is nothing to say
pub fn format_budget_alert(budget: &BudgetClassification, currency: &str) -> Option<String> {
    let limit = budget.budget?;
    match budget.status {
        BudgetStatus::Exceeded => Some(format!(
            "Budget Exceeded! You have spent {} this month, which exceeds your budget of {} by {}.",
            budget.spent.format_with_symbol(currency),
            limit.format_with_symbol(currency),
            budget.overspend().format_with_symbol(currency),
        )),
        BudgetStatus::Warning => Some(format!(
            "Budget Warning: you have used {:.0}% of your monthly budget ({} of {}).",
            budget.percentage_used,
            budget.spent.format_with_symbol(currency),
            limit.format_with_symbol(currency),
        )),
        BudgetStatus::Under | BudgetStatus::Unset => None,
    }
}

/// One-paragraph budget status
pub fn format_budget_status(budget: &BudgetClassification, currency: &str) -> String {
    match budget.budget {
        None => format!(
            "Monthly budget: not set\nSpent this month: {}\n",
            budget.spent.format_with_symbol(currency)
        ),
        Some(limit) => format!(
            "Monthly budget:   {}\nSpent this month: {} ({:.1}%)\nRemaining:        {}\nStatus:           {}\n",
            limit.format_with_symbol(currency),
            budget.spent.format_with_symbol(currency),
            budget.percentage_used,
            budget.remaining.format_with_symbol(currency),
            budget.status,
        ),
    }
}

pub fn format_totals(totals: &Totals, currency: &str) -> String {
    format!(
        "Total Income:  {:>16}\nTotal Expense: {:>16}\nBalance:       {:>16}\n",
        totals.income.format_with_symbol(currency),
        totals.expense.format_with_symbol(currency),
        totals.balance.format_with_symbol(currency),
    )
}

/// Category breakdown with each category's share of the total
pub fn format_category_totals(
    totals: &[CategoryTotal],
    kind: TransactionType,
    currency: &str,
) -> String {
    let title = match kind {
        TransactionType::Income => "Income by Category",
        TransactionType::Expense => "Expense by Category",
    };

    let mut output = format!("{}\n{}\n", title, "-".repeat(60));
    if totals.is_empty() {
        output.push_str("No data\n");
        return output;
    }

    let grand_total: i64 = totals.iter().map(|c| c.total.cents()).sum();
    for entry in totals {
        let share = if grand_total == 0 {
            0.0
        } else {
            entry.total.cents() as f64 * 100.0 / grand_total as f64
        };
        output.push_str(&format!(
            "{:<30} {:>16} {:>5} {:>6.1}%\n",
            entry.category,
            entry.total.format_with_symbol(currency),
            entry.count,
            share
        ));
    }
    output
}

/// Income vs expense per month
pub fn format_monthly_series(series: &[MonthlyTotals], window_months: u32, currency: &str) -> String {
    if series.is_empty() {
        return format!(
            "Income vs Expense by Month\nNo transaction data available for the last {} months\n",
            window_months
        );
    }

    let mut output = format!(
        "Income vs Expense by Month (Last {} month{})\n",
        series.len(),
        if series.len() > 1 { "s" } else { "" }
    );
    output.push_str(&format!("{:<10} {:>16} {:>16} {:>16}\n", "Month", "Income", "Expense", "Net"));
    output.push_str(&"-".repeat(61));
    output.push('\n');

    for month in series {
        output.push_str(&format!(
            "{:<10} {:>16} {:>16} {:>16}\n",
            month.label,
            month.income.format_with_symbol(currency),
            month.expense.format_with_symbol(currency),
            month.net().format_with_symbol(currency),
        ));
    }
    output
}

/// The whole dashboard
pub fn format_dashboard(report: &DashboardReport, currency: &str) -> String {
    let mut output = format!("Dashboard for {} ({})\n", report.period.label(), report.reference_date);
    output.push_str(&"=".repeat(61));
    output.push_str("\n\n");

    if let Some(alert) = format_budget_alert(&report.budget, currency) {
        output.push_str(&alert);
        output.push_str("\n\n");
    }

    output.push_str(&format_totals(&report.totals, currency));
    output.push('\n');
    output.push_str(&format_budget_status(&report.budget, currency));
    output.push('\n');
    output.push_str(&format_monthly_series(&report.monthly_series, report.window_months, currency));
    output.push('\n');
    output.push_str(&format_category_totals(&report.category_totals, report.category_type, currency));

    if report.is_partial() {
        output.push_str(&format!(
            "\nWarning: {} record(s) could not be read and were left out:\n",
            report.skipped.len()
        ));
        for skipped in &report.skipped {
            output.push_str(&format!("  #{}: {}\n", skipped.id, skipped.reason));
        }
    }

    output
}
