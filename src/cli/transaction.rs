//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::{Args, Subcommand};

use crate::cli::{parse_amount, parse_date, parse_date_or_today, KindArg};
use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_row, format_transaction_table};
use crate::error::{FintrackError, FintrackResult};
use crate::models::TransactionId;
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Filters shared by `txn list` and `export csv`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date, inclusive
    #[arg(long)]
    pub start: Option<String>,
    /// End date, inclusive
    #[arg(long)]
    pub end: Option<String>,
    /// Only income or only expense
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<KindArg>,
}

impl FilterArgs {
    pub fn to_filter(&self, settings: &Settings) -> FintrackResult<TransactionFilter> {
        let start = self.start.as_deref().map(|s| parse_date(s, settings)).transpose()?;
        let end = self.end.as_deref().map(|s| parse_date(s, settings)).transpose()?;

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(FintrackError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }

        let filter = TransactionFilter::new().date_range(start, end);
        Ok(match self.kind {
            Some(kind) => filter.kind(kind.into()),
            None => filter,
        })
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// income or expense
        #[arg(value_enum)]
        kind: KindArg,
        /// Amount (e.g., "45.50")
        amount: String,
        /// Category name
        category: String,
        /// Transaction date, defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long = "description")]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New type
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long = "description")]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let input = CreateTransactionInput {
                kind: kind.into(),
                amount: parse_amount(&amount)?,
                category,
                description,
                date: parse_date_or_today(date.as_deref(), settings)?,
            };
            let txn = service.create(input)?;

            println!("Created transaction:");
            println!("{}", format_transaction_row(&txn, currency));
        }

        TransactionCommands::List { filter, limit } => {
            let mut filter = filter.to_filter(settings)?;
            filter.limit = limit;
            let transactions = service.list(&filter)?;

            print!("{}", format_transaction_table(&transactions, currency));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let input = UpdateTransactionInput {
                kind: kind.map(Into::into),
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                description,
                date: date.as_deref().map(|s| parse_date(s, settings)).transpose()?,
            };

            if input.is_empty() {
                println!("Nothing to change. Pass at least one of --type, --amount, --category, --date or --description.");
                return Ok(());
            }

            let txn = service.update(id, input)?;
            println!("Updated transaction:");
            println!("{}", format_transaction_row(&txn, currency));
        }

        TransactionCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted transaction {} ({} {})", removed.id, removed.kind, removed.category);
        }
    }

    Ok(())
}
