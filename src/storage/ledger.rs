//! SQLite-backed ledger store
//!
//! Owns the persisted schema, duplicate-safe insertion, and range retrieval.
//! The `(date, amount, category)` triple is unique across all records; the
//! note does not participate in duplicate detection.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_iso_date, Record};

/// Schema for the records table. `CREATE TABLE IF NOT EXISTS` keeps
/// `ensure_schema` idempotent and safe to run on every operation.
const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    amount REAL NOT NULL,
    category TEXT NOT NULL,
    note TEXT DEFAULT '',
    UNIQUE(date, amount, category)
)";

/// Outcome of an insert attempt
///
/// A duplicate is a defined, successful no-op, distinct from both
/// success-with-new-id and failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new record was persisted with this id
    Inserted(i64),
    /// An identical (date, amount, category) triple already exists
    DuplicateSkipped,
}

impl InsertOutcome {
    /// Check if this outcome is a skipped duplicate
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateSkipped)
    }
}

/// SQLite-backed record store
///
/// The connection is owned by the store and closed on drop, on all exit
/// paths.
pub struct LedgerStore {
    conn: Connection,
}

impl LedgerStore {
    /// Open (creating if absent) the ledger database at `path`.
    ///
    /// The parent directory is created when missing, and the schema is
    /// ensured before the store is handed to the caller.
    pub fn open<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the records table if absent. Idempotent.
    pub fn ensure_schema(&self) -> LedgerResult<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Insert a record, skipping silently if the (date, amount, category)
    /// triple already exists.
    ///
    /// The date must be a valid ISO-8601 calendar date and the amount
    /// finite; either failing is a `Validation` error and no row is
    /// written. Any other storage fault surfaces as `Storage`.
    pub fn insert(
        &self,
        date: &str,
        amount: f64,
        category: &str,
        note: &str,
    ) -> LedgerResult<InsertOutcome> {
        let date = parse_iso_date(date)?;
        if !amount.is_finite() {
            return Err(LedgerError::Validation(format!(
                "Amount must be finite, got {}",
                amount
            )));
        }

        let result = self.conn.execute(
            "INSERT INTO records (date, amount, category, note) VALUES (?1, ?2, ?3, ?4)",
            params![date, amount, category, note],
        );

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted(self.conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Ok(InsertOutcome::DuplicateSkipped)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Return all records with `start <= date <= end`, ordered ascending by
    /// date, ties by insertion order (ascending id).
    ///
    /// An inverted window (`start > end`) yields an empty vec, not an error.
    pub fn query_range(&self, start: &str, end: &str) -> LedgerResult<Vec<Record>> {
        let start = parse_iso_date(start)?;
        let end = parse_iso_date(end)?;

        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, category, note FROM records \
             WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, id ASC",
        )?;
        let rows = stmt.query_map(params![start, end], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Return all records ordered by date then id, for the export sink.
    pub fn fetch_all(&self) -> LedgerResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, category, note FROM records \
             ORDER BY date ASC, id ASC",
        )?;
        let rows = stmt.query_map([], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Count persisted records
    pub fn count(&self) -> LedgerResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        date: row.get::<_, NaiveDate>(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        note: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
