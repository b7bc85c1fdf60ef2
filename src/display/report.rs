//! Summary report display formatting
//!
//! Renders the category summary table and the grand total. Amounts are
//! rounded to two decimal places at presentation time only.

use crate::reports::SummaryReport;

/// Format the category summary table plus the grand total line
pub fn format_summary(report: &SummaryReport) -> String {
    let mut output = String::new();

    output.push_str("Category Summary:\n");
    output.push_str(&format!("{:20} {:>12}\n", "Category", "Total"));
    output.push_str(&"-".repeat(33));
    output.push('\n');

    for entry in &report.categories {
        output.push_str(&format!("{:20} {:>12.2}\n", entry.category, entry.total));
    }

    output.push_str(&"-".repeat(33));
    output.push('\n');
    output.push_str(&format!("{:20} {:>12.2}\n", "Total", report.grand_total));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use chrono::NaiveDate;

    fn record(amount: f64, category: &str) -> Record {
        Record {
            id: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount,
            category: category.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_format_summary() {
        let report = SummaryReport::generate(&[record(12.5, "Food"), record(40.0, "Transport")]);
        let formatted = format_summary(&report);

        assert!(formatted.contains("Category Summary"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("12.50"));
        assert!(formatted.contains("Transport"));
        assert!(formatted.contains("40.00"));
        assert!(formatted.contains("52.50"));
    }

    #[test]
    fn test_two_decimal_rounding_is_presentation_only() {
        let report = SummaryReport::generate(&[record(0.1, "Food"), record(0.2, "Food")]);
        let formatted = format_summary(&report);
        assert!(formatted.contains("0.30"));
    }
}
