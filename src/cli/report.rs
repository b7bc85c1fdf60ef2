//! CLI command for date-range reports
//!
//! Prints the record detail table followed by the category summary and
//! grand total. An empty result is a distinct, explicitly reported state,
//! not an empty table.

use clap::Args;

use crate::display;
use crate::error::LedgerResult;
use crate::reports::SummaryReport;
use crate::storage::LedgerStore;

/// Arguments for the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start date (inclusive) in YYYY-MM-DD
    #[arg(long)]
    pub start: String,

    /// End date (inclusive) in YYYY-MM-DD
    #[arg(long)]
    pub end: String,
}

/// Handle the `report` command
pub fn handle_report_command(store: &LedgerStore, args: ReportArgs) -> LedgerResult<()> {
    let records = store.query_range(&args.start, &args.end)?;

    if records.is_empty() {
        println!(
            "No records found between {} and {}.",
            args.start, args.end
        );
        return Ok(());
    }

    println!("Records:");
    println!("{}", display::format_record_table(&records));

    let summary = SummaryReport::generate(&records);
    println!("{}", display::format_summary(&summary));

    Ok(())
}
