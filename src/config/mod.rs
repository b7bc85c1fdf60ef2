//! Configuration for ledgerbook

pub mod paths;

pub use paths::resolve_db_path;
