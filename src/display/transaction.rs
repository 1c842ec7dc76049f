//! Transaction display formatting

use crate::models::{Transaction, TransactionType};

/// Format a single transaction row
pub fn format_transaction_row(txn: &Transaction, currency: &str) -> String {
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    format!(
        "{:>5} {} {:8} {:18} {:24} {:>14}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        txn.kind.as_str().to_uppercase(),
        truncate(&txn.category, 18),
        truncate(&txn.description, 24),
        format!("{}{}", sign, txn.amount.format_with_symbol(currency))
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5} {:10} {:8} {:18} {:24} {:>14}\n",
        "ID", "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum display length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_row_signs() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let rent = Transaction::new(2, TransactionType::Expense, Money::from_cents(120000), "Rent", date);
        let row = format_transaction_row(&rent, "Rp");
        assert!(row.contains("EXPENSE"));
        assert!(row.contains("-Rp1200.00"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "$"), "No transactions found.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
