use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ledgerbook::cli::{
    handle_add_command, handle_export_command, handle_report_command, AddArgs, ExportArgs,
    ReportArgs,
};
use ledgerbook::config;
use ledgerbook::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "ledgerbook",
    version,
    about = "Simple bookkeeping ledger for the command line",
    long_about = "ledgerbook keeps dated spending records in a local SQLite \
                  file, skips duplicate imports, and produces date-range \
                  reports with per-category summaries."
)]
struct Cli {
    /// Path to the ledger database
    #[arg(long, global = true, env = "LEDGERBOOK_DB")]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger database
    Init,

    /// Add a new spending record
    #[command(alias = "import")]
    Add(AddArgs),

    /// Show records between two dates and summarize by category
    Report(ReportArgs),

    /// Export all records to a file
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let db_path = config::resolve_db_path(cli.db_path)?;
    let store = LedgerStore::open(&db_path)?;

    match cli.command {
        Commands::Init => {
            println!("Initialized ledger at {}", db_path.display());
        }
        Commands::Add(args) => {
            handle_add_command(&store, args)?;
        }
        Commands::Report(args) => {
            handle_report_command(&store, args)?;
        }
        Commands::Export(args) => {
            handle_export_command(&store, args)?;
        }
    }

    Ok(())
}
