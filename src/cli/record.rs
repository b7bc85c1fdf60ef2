//! CLI command for adding records
//!
//! Validates the category against the closed set at the boundary and
//! reports inserted and duplicate-skipped outcomes distinctly.

use clap::Args;

use crate::error::LedgerResult;
use crate::models::Category;
use crate::storage::{InsertOutcome, LedgerStore};

/// Arguments for the `add` command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Date of the record (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Amount spent
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Spending category
    #[arg(long, value_enum)]
    pub category: Category,

    /// Additional note
    #[arg(long, default_value = "")]
    pub note: String,
}

/// Handle the `add` command
pub fn handle_add_command(store: &LedgerStore, args: AddArgs) -> LedgerResult<()> {
    let outcome = store.insert(
        &args.date,
        args.amount,
        args.category.as_str(),
        &args.note,
    )?;

    match outcome {
        InsertOutcome::Inserted(id) => {
            println!("Record added (id {}).", id);
        }
        InsertOutcome::DuplicateSkipped => {
            println!("Duplicate record found. Import skipped.");
        }
    }

    Ok(())
}
