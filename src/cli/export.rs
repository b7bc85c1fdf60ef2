//! CLI command for data export
//!
//! Streams all persisted records through the chosen export sink.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_records_csv, export_records_json};
use crate::storage::LedgerStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format
    Json,
}

/// Arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, default_value = "ledger_export.csv")]
    pub output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Handle the `export` command
pub fn handle_export_command(store: &LedgerStore, args: ExportArgs) -> LedgerResult<()> {
    let records = store.fetch_all()?;

    let file = File::create(&args.output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_records_csv(&records, writer)?,
        ExportFormat::Json => export_records_json(&records, writer)?,
    }

    println!(
        "Exported {} records to {}.",
        records.len(),
        args.output.display()
    );

    Ok(())
}
