//! Budget service
//!
//! Reads and updates the stored monthly budget and runs the dashboard
//! aggregation over the current transaction snapshot.

use chrono::NaiveDate;

use crate::engine::{AggregationEngine, DashboardReport, EngineOptions};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetClassification, Money, MonthlyBudget, TransactionType};
use crate::storage::{BudgetStore, TransactionRepository};

/// Service for budget tracking
pub struct BudgetService<'a> {
    transactions: &'a TransactionRepository,
    store: &'a dyn BudgetStore,
    engine: AggregationEngine,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(
        transactions: &'a TransactionRepository,
        store: &'a dyn BudgetStore,
        options: EngineOptions,
    ) -> Self {
        Self {
            transactions,
            store,
            engine: AggregationEngine::new(options),
        }
    }

    /// The stored monthly budget
    pub fn budget(&self) -> FintrackResult<MonthlyBudget> {
        self.store.get()
    }

    /// Store a new monthly budget
    pub fn set_budget(&self, amount: Money) -> FintrackResult<()> {
        if amount.is_negative() {
            return Err(FintrackError::Validation(format!(
                "Monthly budget must not be negative: {}",
                amount
            )));
        }
        self.store.set(Some(amount))?;
        tracing::info!(budget = %amount, "updated monthly budget");
        Ok(())
    }

    /// Remove the stored budget
    pub fn clear_budget(&self) -> FintrackResult<()> {
        self.store.set(None)?;
        tracing::info!("cleared monthly budget");
        Ok(())
    }

    /// Budget status for the month containing `reference_date`
    pub fn status(&self, reference_date: NaiveDate) -> FintrackResult<BudgetClassification> {
        Ok(self
            .dashboard(reference_date, TransactionType::Expense)?
            .budget)
    }

    /// Full dashboard aggregation for `reference_date`
    pub fn dashboard(
        &self,
        reference_date: NaiveDate,
        category_type: TransactionType,
    ) -> FintrackResult<DashboardReport> {
        let records = self.transactions.get_all()?;
        let budget = self.store.get()?;
        Ok(self
            .engine
            .aggregate(&records, reference_date, budget, category_type))
    }
}
