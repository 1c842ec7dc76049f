//! Core data models for fintrack
//!
//! Money, transactions, calendar months and the monthly budget.

pub mod budget;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetClassification, BudgetStatus, MonthlyBudget};
pub use money::{Money, MoneyParseError, MAX_AMOUNT_UNITS};
pub use period::MonthPeriod;
pub use transaction::{
    RawAmount, SkipReason, Transaction, TransactionId, TransactionRecord, TransactionType,
    TransactionValidationError,
};
