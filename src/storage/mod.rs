//! Storage layer for fintrack
//!
//! JSON file storage with atomic writes. Transactions stand in for the
//! remote API's records; the monthly budget sits behind `BudgetStore`.

pub mod budget;
pub mod file_io;
pub mod transactions;

pub use budget::{BudgetStore, JsonBudgetStore, MemoryBudgetStore};
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub transactions: TransactionRepository,
    pub budget: JsonBudgetStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budget: JsonBudgetStore::new(paths.budget_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.transactions.load()
    }
}
