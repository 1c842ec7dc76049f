//! Report CLI commands
//!
//! Dashboard, category breakdown and monthly income/expense series.

use clap::Subcommand;

use crate::cli::{parse_date_or_today, KindArg};
use crate::cli::transaction::FilterArgs;
use crate::config::settings::Settings;
use crate::display::report::{format_category_totals, format_dashboard, format_monthly_series};
use crate::display::transaction::format_transaction_table;
use crate::engine::{validate_records, AggregationEngine, EngineOptions};
use crate::error::FintrackResult;
use crate::services::{BudgetService, TransactionService};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Budget status, totals, monthly series and category breakdown
    Dashboard {
        /// Reference date, defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category breakdown type, defaults to the configured one
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,
    },

    /// Totals per category
    Category {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Income and expense per month
    Monthly {
        /// Reference date, defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Number of months in the window
        #[arg(long)]
        months: Option<u32>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Dashboard { date, kind } => {
            let reference_date = parse_date_or_today(date.as_deref(), settings)?;
            let category_type = kind.map(Into::into).unwrap_or(settings.default_category_type);

            let service = BudgetService::new(&storage.transactions, &storage.budget, settings.engine_options());
            let report = service.dashboard(reference_date, category_type)?;
            print!("{}", format_dashboard(&report, currency));

            let recent = TransactionService::new(storage).recent(settings.recent_limit)?;
            println!();
            println!("Recent Transactions");
            print!("{}", format_transaction_table(&recent, currency));
        }

        ReportCommands::Category { filter } => {
            let category_type = filter
                .kind
                .map(Into::into)
                .unwrap_or(settings.default_category_type);
            let filter = filter.to_filter(settings)?.kind(category_type);

            let transactions = TransactionService::new(storage).list(&filter)?;
            let engine = AggregationEngine::new(settings.engine_options());
            let totals = engine.aggregate_by_category(&transactions, category_type);

            print!("{}", format_category_totals(&totals, category_type, currency));
        }

        ReportCommands::Monthly { date, months } => {
            let reference_date = parse_date_or_today(date.as_deref(), settings)?;
            let engine = AggregationEngine::new(EngineOptions {
                window_months: months.unwrap_or(settings.trend_window_months),
                ..settings.engine_options()
            });

            let validated = validate_records(&storage.transactions.get_all()?);
            let series = engine.aggregate_monthly_series(&validated.transactions, reference_date);

            print!(
                "{}",
                format_monthly_series(&series, engine.options().window_months, currency)
            );
            if !validated.skipped.is_empty() {
                println!(
                    "\nWarning: {} record(s) could not be read and were left out",
                    validated.skipped.len()
                );
            }
        }
    }

    Ok(())
}
