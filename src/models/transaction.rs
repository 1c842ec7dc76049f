//! Transaction model
//!
//! `Transaction` is the validated form used by aggregation and services.
//! `TransactionRecord` is the loosely-typed wire form as it arrives from the
//! API or the local transaction file; converting one into the other either
//! succeeds or yields a `SkipReason`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Identifier of a transaction, assigned by the source of truth
pub type TransactionId = u64;

/// Direction of a transaction; the amount itself is never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionValidationError::InvalidType(other.to_string())),
        }
    }
}

/// A validated income or expense record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionType,
    /// Non-negative amount; direction comes from `kind`
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with an empty description
    pub fn new(
        id: TransactionId,
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            date,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Convert into the wire form used by the transaction file
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            id: self.id,
            user_id: None,
            kind: self.kind.as_str().to_string(),
            amount: RawAmount::Text(self.amount.to_decimal_string()),
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Amount as it appears on the wire: normally `"1200.00"` or `1200`
///
/// Any other JSON value (null, bool, object) lands in `Other` and is kept
/// as-is so the record survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl Default for RawAmount {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl RawAmount {
    fn parse(&self) -> Option<Money> {
        match self {
            Self::Text(s) => Money::parse(s).ok(),
            Self::Number(n) => Money::parse(&number_to_decimal(n)).ok(),
            Self::Other(_) => None,
        }
    }
}

/// Plain decimal text for a JSON number, never in exponent form
fn number_to_decimal(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let text = n.to_string();
    match n.as_f64() {
        Some(f) if text.contains(|c: char| c == 'e' || c == 'E') => format!("{:.9}", f),
        _ => text,
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Accept any JSON value for a text field; non-strings become their JSON text
/// and null or a missing field becomes empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Unvalidated transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,

    #[serde(default)]
    pub amount: RawAmount,

    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

/// Why a record was left out of aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum SkipReason {
    /// Amount is not a non-negative decimal
    InvalidAmount(String),
    /// Date is not a calendar date in `YYYY-MM-DD` form
    InvalidDate(String),
    /// Type is neither `income` nor `expense`
    InvalidType(String),
    EmptyCategory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(v) => write!(f, "invalid amount '{}'", v),
            Self::InvalidDate(v) => write!(f, "invalid date '{}'", v),
            Self::InvalidType(v) => write!(f, "invalid type '{}'", v),
            Self::EmptyCategory => write!(f, "empty category"),
        }
    }
}

impl TryFrom<&TransactionRecord> for Transaction {
    type Error = SkipReason;

    fn try_from(record: &TransactionRecord) -> Result<Self, Self::Error> {
        let kind = record
            .kind
            .parse::<TransactionType>()
            .map_err(|_| SkipReason::InvalidType(record.kind.clone()))?;

        let amount = record
            .amount
            .parse()
            .filter(|m| !m.is_negative())
            .ok_or_else(|| SkipReason::InvalidAmount(record.amount.to_string()))?;

        let date = NaiveDate::parse_from_str(record.date.trim(), "%Y-%m-%d")
            .map_err(|_| SkipReason::InvalidDate(record.date.clone()))?;

        let category = record.category.trim();
        if category.is_empty() {
            return Err(SkipReason::EmptyCategory);
        }

        Ok(Self {
            id: record.id,
            kind,
            amount,
            category: category.to_string(),
            description: record.description.clone(),
            date,
        })
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Transaction amount must not be negative: {0}")]
    NegativeAmount(Money),

    #[error("Transaction category must not be empty")]
    EmptyCategory,

    #[error("Unknown transaction type '{0}' (expected income or expense)")]
    InvalidType(String),
}
