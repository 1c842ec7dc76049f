//! Transaction service
//!
//! Create/edit/delete of transaction records plus the filtered listings the
//! transactions page and the dashboard use.

use chrono::NaiveDate;

use crate::engine::validate_records;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Money, RawAmount, Transaction, TransactionId, TransactionRecord, TransactionType,
};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionType>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range; either bound may be open
    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Filter by transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a transaction passes the date and type filters
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
            && self.kind.map_or(true, |kind| txn.kind == kind)
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Fields to change on an existing transaction; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionType>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FintrackResult<Transaction> {
        let id = self.storage.transactions.next_id()?;

        let mut txn = Transaction::new(id, input.kind, input.amount, input.category.trim(), input.date);
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.to_record())?;
        self.storage.transactions.save()?;

        tracing::info!(id, kind = %txn.kind, amount = %txn.amount, "created transaction");
        Ok(txn)
    }

    /// Apply `input` to an existing transaction
    ///
    /// The stored record is patched first and validated afterwards, so editing
    /// also repairs a record that was stored malformed.
    pub fn update(&self, id: TransactionId, input: UpdateTransactionInput) -> FintrackResult<Transaction> {
        let mut record = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        if let Some(kind) = input.kind {
            record.kind = kind.as_str().to_string();
        }
        if let Some(amount) = input.amount {
            if amount.is_negative() {
                return Err(FintrackError::Validation(format!(
                    "Transaction amount must not be negative: {}",
                    amount
                )));
            }
            record.amount = RawAmount::Text(amount.to_decimal_string());
        }
        if let Some(category) = input.category {
            record.category = category.trim().to_string();
        }
        if let Some(description) = input.description {
            record.description = description.trim().to_string();
        }
        if let Some(date) = input.date {
            record.date = date.format("%Y-%m-%d").to_string();
        }

        let txn = Transaction::try_from(&record).map_err(|reason| {
            FintrackError::Validation(format!("Transaction {} has {}", id, reason))
        })?;

        self.storage.transactions.upsert(txn.to_record())?;
        self.storage.transactions.save()?;

        tracing::info!(id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> FintrackResult<TransactionRecord> {
        let removed = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.save()?;

        tracing::info!(id, "deleted transaction");
        Ok(removed)
    }

    /// Get a single valid transaction
    pub fn get(&self, id: TransactionId) -> FintrackResult<Transaction> {
        let record = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        Transaction::try_from(&record).map_err(|reason| {
            FintrackError::Validation(format!("Transaction {} has {}", id, reason))
        })
    }

    /// Valid transactions matching `filter`, newest first
    ///
    /// Malformed records are left out.
    pub fn list(&self, filter: &TransactionFilter) -> FintrackResult<Vec<Transaction>> {
        let validated = validate_records(&self.storage.transactions.get_all()?);

        let mut transactions: Vec<_> = validated
            .transactions
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// The newest `limit` transactions
    pub fn recent(&self, limit: usize) -> FintrackResult<Vec<Transaction>> {
        self.list(&TransactionFilter::new().limit(limit))
    }
}
