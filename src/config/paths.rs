//! Database path resolution
//!
//! There is no process-wide default store: the path is resolved once at
//! startup and threaded explicitly into every operation.
//!
//! ## Resolution order
//!
//! 1. Explicit `--db-path` flag (or `LEDGERBOOK_DB` env var, read by clap)
//! 2. Platform data directory: `~/.local/share/ledgerbook/ledger.db` on
//!    Linux, the equivalent on macOS/Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{LedgerError, LedgerResult};

/// File name of the ledger database inside the data directory
const DB_FILE_NAME: &str = "ledger.db";

/// Resolve the database path from an optional explicit override.
///
/// The default data directory is created when missing; an explicit path is
/// used as-is (the store creates its parent on open).
pub fn resolve_db_path(explicit: Option<PathBuf>) -> LedgerResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let dirs = ProjectDirs::from("", "", "ledgerbook").ok_or_else(|| {
        LedgerError::Config("Could not determine a home directory for the ledger".into())
    })?;

    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("my.db");

        let resolved = resolve_db_path(Some(custom.clone())).unwrap();
        assert_eq!(resolved, custom);
    }

    #[test]
    fn test_default_path_ends_with_db_file() {
        let resolved = resolve_db_path(None).unwrap();
        assert_eq!(resolved.file_name().unwrap(), DB_FILE_NAME);
        assert!(resolved.parent().unwrap().exists());
    }
}
