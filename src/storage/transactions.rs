//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Records
//! are kept in their wire form so a hand-edited or imported file with a bad
//! row still loads; validation happens in the services and the engine. Rows
//! without a usable id are kept verbatim and written back on save.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{TransactionId, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction file layout
///
/// Rows are read as raw JSON first so one unreadable row cannot fail the
/// whole file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Value>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<TransactionId, TransactionRecord>>,
    unreadable: RwLock<Vec<Value>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
            unreadable: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut unreadable = self.unreadable.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        unreadable.clear();
        for (index, row) in file_data.transactions.into_iter().enumerate() {
            match serde_json::from_value::<TransactionRecord>(row.clone()) {
                Ok(record) => {
                    if data.insert(record.id, record).is_some() {
                        tracing::warn!(path = %self.path.display(), "duplicate transaction id in file, keeping the last one");
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), index, error = %e, "unreadable transaction row kept as-is");
                    unreadable.push(row);
                }
            }
        }

        tracing::debug!(count = data.len(), unreadable = unreadable.len(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk, ordered by id, followed by unreadable rows
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let unreadable = self.unreadable.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions = data
            .values()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        transactions.extend(unreadable.iter().cloned());

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Get a record by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<TransactionRecord>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all records, ordered by id
    pub fn get_all(&self) -> Result<Vec<TransactionRecord>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().cloned().collect())
    }

    /// Insert or update a record
    pub fn upsert(&self, record: TransactionRecord) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(record.id, record);
        Ok(())
    }

    /// Delete a record, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<TransactionRecord>, FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id))
    }

    /// Next free id (one past the largest in use)
    pub fn next_id(&self) -> Result<TransactionId, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        match data.keys().next_back() {
            None => Ok(1),
            Some(&last) => last.checked_add(1).ok_or_else(|| {
                FintrackError::Storage(format!("No transaction id left after {}", last))
            }),
        }
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawAmount;
    use tempfile::TempDir;

    fn record(id: TransactionId, amount: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            user_id: None,
            kind: "expense".into(),
            amount: RawAmount::Text(amount.into()),
            category: "Food".into(),
            description: String::new(),
            date: "2025-01-10".into(),
        }
    }

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.next_id().unwrap(), 1);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(record(4, "10.00")).unwrap();
        repo.upsert(record(4, "12.00")).unwrap();

        let stored = repo.get(4).unwrap().unwrap();
        assert_eq!(stored.amount, RawAmount::Text("12.00".into()));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.next_id().unwrap(), 5);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(record(1, "10.00")).unwrap();

        assert!(repo.delete(1).unwrap().is_some());
        assert!(repo.delete(1).unwrap().is_none());
        assert!(repo.get(1).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_keeps_malformed_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");

        let repo = TransactionRepository::new(path.clone());
        repo.upsert(record(2, "not-a-number")).unwrap();
        repo.upsert(record(1, "5")).unwrap();
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(path);
        reloaded.load().unwrap();
        let all = reloaded.get_all().unwrap();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(all[1].amount, RawAmount::Text("not-a-number".into()));
    }

    #[test]
    fn test_loads_api_shaped_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(
            &path,
            r#"{"transactions":[
                {"id":1,"user_id":1,"type":"income","amount":5000,"category":"Salary","description":"Monthly salary","date":"2025-01-01"},
                {"id":2,"user_id":1,"type":"expense","amount":"1200.00","category":"Rent","description":"Monthly rent","date":"2025-01-05"}
            ]}"#,
        )
        .unwrap();

        let repo = TransactionRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(repo.get(2).unwrap().unwrap().kind, "expense");
    }

    #[test]
    fn test_odd_rows_do_not_fail_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        std::fs::write(
            &path,
            r#"{"transactions":[
                {"id":1,"type":"expense","amount":"10","category":"Food","description":"","date":"2025-01-10"},
                {"id":2,"type":"expense","amount":null,"category":"Food","description":"","date":"2025-01-11"},
                {"id":3,"type":"expense","amount":false,"category":"Food"},
                {"type":"expense","amount":"5","category":"Orphan","date":"2025-01-12"}
            ]}"#,
        )
        .unwrap();

        let repo = TransactionRepository::new(path.clone());
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 3);
        assert_eq!(repo.get(2).unwrap().unwrap().amount, RawAmount::Other(Value::Null));
        assert_eq!(repo.get(3).unwrap().unwrap().date, "");

        repo.save().unwrap();
        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = saved["transactions"].as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1]["amount"], Value::Null);
        assert_eq!(rows[3]["category"], "Orphan");

        let reloaded = TransactionRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 3);
    }

    #[test]
    fn test_next_id_exhausted() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(record(u64::MAX, "1")).unwrap();
        let err = repo.next_id().unwrap_err();
        assert!(matches!(err, FintrackError::Storage(_)));
    }
}
