//! SQLite storage layer for ledgerbook

pub mod ledger;

pub use ledger::{InsertOutcome, LedgerStore};
