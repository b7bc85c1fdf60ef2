//! Export sinks for ledgerbook
//!
//! Serialize the record stream (date, amount, category, note) for
//! downstream consumption.

pub mod csv;
pub mod json;

pub use csv::export_records_csv;
pub use json::export_records_json;
