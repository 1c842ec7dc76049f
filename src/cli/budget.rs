//! Budget CLI commands
//!
//! Show, set and clear the monthly spending budget.

use clap::Subcommand;

use crate::cli::{parse_amount, parse_date_or_today};
use crate::config::settings::Settings;
use crate::display::report::{format_budget_alert, format_budget_status};
use crate::error::FintrackResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget status for a month
    Show {
        /// Any date inside the month, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "4000" or "4000.00")
        amount: String,
    },

    /// Remove the monthly budget
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let service = BudgetService::new(&storage.transactions, &storage.budget, settings.engine_options());
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show { date } => {
            let reference_date = parse_date_or_today(date.as_deref(), settings)?;
            let status = service.status(reference_date)?;

            if let Some(alert) = format_budget_alert(&status, currency) {
                println!("{}", alert);
                println!();
            }
            print!("{}", format_budget_status(&status, currency));
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_budget(amount)?;
            if amount.is_zero() {
                println!("Monthly budget set to {} (treated as no budget)", amount.format_with_symbol(currency));
            } else {
                println!("Monthly budget set to {}", amount.format_with_symbol(currency));
            }
        }

        BudgetCommands::Clear => {
            service.clear_budget()?;
            println!("Monthly budget cleared");
        }
    }

    Ok(())
}
