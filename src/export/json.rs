//! JSON export functionality
//!
//! Exports the record stream as a pretty-printed JSON array. The record's
//! store-assigned id is not part of the export contract and is omitted by
//! the model's serialization.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;

/// Export records to JSON
pub fn export_records_json<W: Write>(records: &[Record], writer: W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(writer, records)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_json() {
        let records = vec![Record {
            id: 3,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount: 12.5,
            category: "Food".to_string(),
            note: "lunch".to_string(),
        }];

        let mut output = Vec::new();
        export_records_json(&records, &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["date"], "2024-01-01");
        assert_eq!(array[0]["amount"], 12.5);
        assert_eq!(array[0]["category"], "Food");
        assert_eq!(array[0]["note"], "lunch");
        assert!(array[0].get("id").is_none());
    }

    #[test]
    fn test_export_json_empty() {
        let mut output = Vec::new();
        export_records_json(&[], &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }
}
