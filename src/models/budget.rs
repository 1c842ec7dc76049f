//! Monthly budget model
//!
//! The budget figure is a single monthly ceiling that may be unset. Status
//! classification compares the current month's expenses against it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Stored monthly budget; `None` means the user never set one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyBudget {
    #[serde(default)]
    pub monthly_budget: Option<Money>,
}

impl MonthlyBudget {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn new(amount: Money) -> Self {
        Self {
            monthly_budget: Some(amount),
        }
    }

    /// The budget amount, if it is usable for tracking
    ///
    /// Zero and negative figures count as unset.
    pub fn effective(&self) -> Option<Money> {
        self.monthly_budget.filter(|m| m.is_positive())
    }

    pub fn is_set(&self) -> bool {
        self.effective().is_some()
    }
}

impl From<Option<Money>> for MonthlyBudget {
    fn from(monthly_budget: Option<Money>) -> Self {
        Self { monthly_budget }
    }
}

/// Spending relative to the monthly ceiling
///
/// Variants are declared in escalation order so `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Unset,
    Under,
    Warning,
    Exceeded,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "Unset"),
            Self::Under => write!(f, "Under budget"),
            Self::Warning => write!(f, "Budget warning"),
            Self::Exceeded => write!(f, "Budget exceeded"),
        }
    }
}

/// Result of classifying a month's spending against the budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetClassification {
    pub status: BudgetStatus,
    /// spent / budget * 100; 0 when the budget is unset
    pub percentage_used: f64,
    /// Effective budget, None when unset
    pub budget: Option<Money>,
    pub spent: Money,
    /// budget - spent; negative once exceeded, zero when unset
    pub remaining: Money,
}

impl BudgetClassification {
    /// Amount spent beyond the budget, zero otherwise
    pub fn overspend(&self) -> Money {
        if self.remaining.is_negative() {
            -self.remaining
        } else {
            Money::zero()
        }
    }
}
