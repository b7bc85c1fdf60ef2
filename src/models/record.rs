//! Spending record model
//!
//! A record is one spending entry. Records are immutable once created; the
//! id is assigned by the store on insert and never reused.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};

/// A single spending entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Store-assigned unique id
    #[serde(skip_serializing)]
    pub id: i64,

    /// Date of the spending, persisted as ISO-8601 text
    pub date: NaiveDate,

    /// Signed amount; no currency unit tracked
    pub amount: f64,

    /// Category name (validated at the CLI boundary)
    pub category: String,

    /// Free-text note, empty by default
    pub note: String,
}

/// Parse an ISO-8601 (`YYYY-MM-DD`) calendar date.
///
/// Dates are re-bound from the parsed `NaiveDate`, so the persisted text is
/// always zero-padded and lexical order equals calendar order.
pub fn parse_iso_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| LedgerError::invalid_date(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_iso_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_calendar_date() {
        assert!(parse_iso_date("2024-13-40").unwrap_err().is_validation());
        assert!(parse_iso_date("2023-02-29").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso_date("").unwrap_err().is_validation());
        assert!(parse_iso_date("15/01/2024").unwrap_err().is_validation());
        assert!(parse_iso_date("yesterday").unwrap_err().is_validation());
    }

    #[test]
    fn test_iso_lexical_order_is_calendar_order() {
        // The range query compares dates as text; zero-padded ISO-8601
        // guarantees the two orders agree.
        let dates = ["2023-12-31", "2024-01-02", "2024-01-10", "2024-02-01"];
        let mut parsed: Vec<NaiveDate> =
            dates.iter().map(|d| parse_iso_date(d).unwrap()).collect();
        parsed.sort();
        let formatted: Vec<String> =
            parsed.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        assert_eq!(formatted, dates);
    }

    #[test]
    fn test_serialize_skips_id() {
        let record = Record {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            amount: 12.5,
            category: "Food".to_string(),
            note: "lunch".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2024-01-15\""));
        assert!(json.contains("\"category\":\"Food\""));
        assert!(!json.contains("\"id\""));
    }
}
