//! Report generation for ledgerbook

pub mod summary;

pub use summary::{CategoryTotal, SummaryReport};
