//! Category summary report
//!
//! Aggregates a record sequence into per-category totals plus a grand
//! total. Pure transformation: no storage access, no I/O.

use std::collections::HashMap;

use crate::models::Record;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Summed amount for this category
    pub total: f64,
}

/// Per-category summary over a record set
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Categories in first-seen order; no zero-record categories appear
    pub categories: Vec<CategoryTotal>,
    /// Sum of all input amounts
    pub grand_total: f64,
}

impl SummaryReport {
    /// Aggregate a record sequence by category.
    ///
    /// Categories are reported in the order they first appear in the
    /// input. Empty input yields an empty report with a grand total of 0.
    pub fn generate(records: &[Record]) -> Self {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();
        let mut grand_total = 0.0;

        for record in records {
            let entry = totals.entry(record.category.as_str()).or_insert_with(|| {
                order.push(record.category.as_str());
                0.0
            });
            *entry += record.amount;
            grand_total += record.amount;
        }

        let categories = order
            .into_iter()
            .map(|category| CategoryTotal {
                category: category.to_string(),
                total: totals[category],
            })
            .collect();

        Self {
            categories,
            grand_total,
        }
    }

    /// Check whether the input had no records
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up the total for a category, if it appeared in the input
    pub fn total_for(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}
