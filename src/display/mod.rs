//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::{
    format_budget_alert, format_budget_status, format_category_totals, format_dashboard,
    format_monthly_series, format_totals,
};
pub use transaction::{format_transaction_row, format_transaction_table};
