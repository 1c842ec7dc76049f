//! Monthly budget persistence
//!
//! The budget figure lives behind the `BudgetStore` capability so that the
//! services can be handed a file-backed store in the binary and an
//! in-memory one in tests.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Money, MonthlyBudget};

use super::file_io::{read_json, write_json_atomic};

/// Read/write access to the stored monthly budget
pub trait BudgetStore {
    /// Current snapshot of the stored budget
    fn get(&self) -> Result<MonthlyBudget, FintrackError>;

    /// Replace the stored budget; `None` clears it
    fn set(&self, value: Option<Money>) -> Result<(), FintrackError>;
}

/// Budget stored in budget.json
pub struct JsonBudgetStore {
    path: PathBuf,
}

impl JsonBudgetStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BudgetStore for JsonBudgetStore {
    fn get(&self) -> Result<MonthlyBudget, FintrackError> {
        read_json(&self.path)
    }

    fn set(&self, value: Option<Money>) -> Result<(), FintrackError> {
        write_json_atomic(&self.path, &MonthlyBudget::from(value))
    }
}

/// Budget held in memory only
#[derive(Default)]
pub struct MemoryBudgetStore {
    value: RwLock<MonthlyBudget>,
}

impl MemoryBudgetStore {
    pub fn new(initial: MonthlyBudget) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }
}

impl BudgetStore for MemoryBudgetStore {
    fn get(&self) -> Result<MonthlyBudget, FintrackError> {
        let value = self
            .value
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*value)
    }

    fn set(&self, value: Option<Money>) -> Result<(), FintrackError> {
        let mut stored = self
            .value
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *stored = MonthlyBudget::from(value);
        Ok(())
    }
}
