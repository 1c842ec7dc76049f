use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_export_command, handle_report_command,
    handle_transaction_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income, expense and budget tracking",
    long_about = "fintrack records income and expense transactions, warns when \
                  spending approaches the monthly budget, and reports totals per \
                  category and per month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Dashboard and aggregate reports
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Export transactions or reports
    #[command(subcommand)]
    Export(fintrack::cli::ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    fintrack::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budget file:       {}", paths.budget_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Warning threshold:     {}%", settings.warning_percent);
            println!("  Trend window (months): {}", settings.trend_window_months);
            println!("  Recent transactions:   {}", settings.recent_limit);
            println!("  Default category type: {}", settings.default_category_type);
        }
        None => {
            println!("fintrack - Personal finance tracking");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report dashboard' for this month's overview.");
        }
    }

    Ok(())
}
