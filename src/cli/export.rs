//! CLI commands for data export
//!
//! Transactions go to CSV, dashboard reports to JSON or YAML.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::transaction::FilterArgs;
use crate::cli::{parse_date_or_today, KindArg};
use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_report_json, export_report_yaml, export_transactions_csv, DEFAULT_CSV_FILENAME};
use crate::services::{BudgetService, TransactionService};
use crate::storage::Storage;

/// Report export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// JSON format
    Json,
    /// YAML format, human-readable
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path
        #[arg(default_value = DEFAULT_CSV_FILENAME)]
        output: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the dashboard report
    Report {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Reference date, defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Category breakdown type
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Csv { output, filter } => {
            let filter = filter.to_filter(settings)?;
            let transactions = TransactionService::new(storage).list(&filter)?;

            let mut writer = create_writer(&output)?;
            export_transactions_csv(&transactions, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FintrackError::Export(e.to_string()))?;

            println!(
                "Exported {} transaction(s) to {}",
                transactions.len(),
                output.display()
            );
        }

        ExportCommands::Report {
            output,
            format,
            pretty,
            date,
            kind,
        } => {
            let reference_date = parse_date_or_today(date.as_deref(), settings)?;
            let category_type = kind.map(Into::into).unwrap_or(settings.default_category_type);
            let service = BudgetService::new(&storage.transactions, &storage.budget, settings.engine_options());
            let report = service.dashboard(reference_date, category_type)?;

            let mut writer = create_writer(&output)?;
            match format {
                ReportFormat::Json => export_report_json(&report, &mut writer, pretty)?,
                ReportFormat::Yaml => export_report_yaml(&report, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| FintrackError::Export(e.to_string()))?;

            println!("Exported {} report to {}", report.period.label(), output.display());
            if report.is_partial() {
                println!(
                    "Note: {} malformed record(s) were skipped and are listed in the report",
                    report.skipped.len()
                );
            }
        }
    }

    Ok(())
}

fn create_writer(path: &Path) -> FintrackResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
