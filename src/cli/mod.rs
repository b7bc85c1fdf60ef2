//! CLI command handlers for ledgerbook

pub mod export;
pub mod record;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use record::{handle_add_command, AddArgs};
pub use report::{handle_report_command, ReportArgs};
