//! Business logic layer for fintrack
//!
//! Services sit between the CLI and storage: validation, persistence calls
//! and the aggregation runs.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
