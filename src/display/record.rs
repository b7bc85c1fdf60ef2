//! Record display formatting
//!
//! Formats record detail rows for terminal display. Pure string builders;
//! printing is left to the caller.

use crate::models::Record;

/// Format a single record for display (detail row)
pub fn format_record_row(record: &Record) -> String {
    format!(
        "{:10} {:>12.2} {:15} {}",
        record.date.format("%Y-%m-%d").to_string(),
        record.amount,
        record.category,
        truncate(&record.note, 30)
    )
}

/// Format a list of records as a detail table
pub fn format_record_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>12} {:15} {}\n",
        "Date", "Amount", "Category", "Note"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for record in records {
        output.push_str(&format_record_row(record));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
