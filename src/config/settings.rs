//! User settings for fintrack
//!
//! Display preferences and the tunables of the aggregation engine.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::engine::{EngineOptions, DEFAULT_WARNING_PERCENT, DEFAULT_WINDOW_MONTHS};
use crate::error::FintrackError;
use crate::models::TransactionType;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Percent of the monthly budget that triggers a warning (1-100)
    #[serde(default = "default_warning_percent")]
    pub warning_percent: u32,

    /// Months shown in the income vs expense series
    #[serde(default = "default_trend_window_months")]
    pub trend_window_months: u32,

    /// Number of transactions shown as "recent"
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Transaction type used for the category breakdown by default
    #[serde(default = "default_category_type")]
    pub default_category_type: TransactionType,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_warning_percent() -> u32 {
    DEFAULT_WARNING_PERCENT
}

fn default_trend_window_months() -> u32 {
    DEFAULT_WINDOW_MONTHS
}

fn default_recent_limit() -> usize {
    5
}

fn default_category_type() -> TransactionType {
    TransactionType::Expense
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            warning_percent: default_warning_percent(),
            trend_window_months: default_trend_window_months(),
            recent_limit: default_recent_limit(),
            default_category_type: default_category_type(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| {
            FintrackError::Config(format!("Failed to load settings: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), FintrackError> {
        if !(1..=100).contains(&self.warning_percent) {
            return Err(FintrackError::Config(format!(
                "warning_percent must be between 1 and 100, got {}",
                self.warning_percent
            )));
        }
        if self.trend_window_months == 0 {
            return Err(FintrackError::Config(
                "trend_window_months must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Engine options derived from these settings
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            warning_percent: self.warning_percent,
            window_months: self.trend_window_months,
        }
    }
}
