//! fintrack - Personal finance tracking from the command line
//!
//! This library provides the core functionality for the fintrack application:
//! recording income and expense transactions, classifying spending against a
//! monthly budget, and aggregating totals per category and per month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, periods, budgets)
//! - `engine`: Pure aggregation over a transaction snapshot
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `export`: CSV and report export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::engine::AggregationEngine;
//! use fintrack::models::{MonthlyBudget, TransactionType};
//!
//! let report = AggregationEngine::default().aggregate(
//!     &records,
//!     reference_date,
//!     MonthlyBudget::unset(),
//!     TransactionType::Expense,
//! );
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the default `fintrack=warn` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
