//! CSV export functionality
//!
//! Exports the record stream as CSV with a header row. Amounts are written
//! with two decimal places.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;

/// Export records to CSV
pub fn export_records_csv<W: Write>(records: &[Record], writer: W) -> LedgerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["date", "amount", "category", "note"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        wtr.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", record.amount),
            record.category.clone(),
            record.note.clone(),
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
