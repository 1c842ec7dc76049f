//! Per-category totals

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionType};

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of transactions contributing to the total
    pub count: usize,
}

/// Group transactions of `kind` by category and sum them
///
/// Output is sorted by total (largest first), ties broken by category name
/// ascending. Categories with no matching transactions are absent.
pub fn aggregate_by_category(transactions: &[Transaction], kind: TransactionType) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, (Money, usize)> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        let entry = totals.entry(txn.category.as_str()).or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut result: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect();

    result.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    result
}
