//! Storage layer for beerus
//!
//! Bills live in a single SQLite table:
//!
//! ```sql
//! CREATE TABLE bills (title text, amount text, date text)
//! ```
//!
//! Amounts are stored as decimal text and dates as `YYYY-MM-DD`, so string
//! ordering on `date` is chronological ordering. Every statement that carries
//! user data is parameterized.

mod bills;
pub mod file_io;
mod script;

pub use file_io::write_atomic;
pub use script::sql_literal;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use crate::config::{BeerusPaths, Settings};
use crate::error::{BeerusError, BeerusResult};

/// Schema of the bills table. Column types match stores written by earlier
/// releases so their dumps load unchanged.
pub(crate) const CREATE_BILLS_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS bills (title text, amount text, date text)";

/// Handle to an open bill store
///
/// One connection per store; it is closed when the value is dropped.
#[derive(Debug)]
pub struct BillStore {
    conn: Connection,
    path: PathBuf,
}

impl BillStore {
    /// Create a fresh, empty store at `path`
    ///
    /// Fails with [`BeerusError::StoreAlreadyExists`] when a file is already
    /// there, unless `overwrite` is set, in which case the old store is
    /// deleted first.
    pub fn initialize(path: &Path, overwrite: bool) -> BeerusResult<Self> {
        if path.exists() {
            if !overwrite {
                return Err(BeerusError::StoreAlreadyExists(path.to_path_buf()));
            }
            std::fs::remove_file(path).map_err(|e| {
                BeerusError::Io(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            info!(path = %path.display(), "removed existing bill store");
        }

        ensure_parent(path)?;
        let conn = Connection::open(path)?;
        conn.execute(CREATE_BILLS_TABLE, [])?;
        info!(path = %path.display(), "initialized bill store");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing store
    ///
    /// Never creates a file: a missing store is [`BeerusError::StoreMissing`].
    pub fn open(path: &Path) -> BeerusResult<Self> {
        if !path.is_file() {
            return Err(BeerusError::StoreMissing(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        let store = Self {
            conn,
            path: path.to_path_buf(),
        };

        if !store.has_bills_table()? {
            return Err(BeerusError::Storage(format!(
                "{} is not a bill store (no bills table)",
                path.display()
            )));
        }

        debug!(path = %path.display(), "opened bill store");
        Ok(store)
    }

    /// Open the store at `path`, creating an empty database file if needed
    ///
    /// The file may have no `bills` table yet; loading a dump creates it.
    pub fn open_or_create(path: &Path) -> BeerusResult<Self> {
        ensure_parent(path)?;
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened bill store (create if missing)");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open the store configured in `settings`
    pub fn from_settings(settings: &Settings, paths: &BeerusPaths) -> BeerusResult<Self> {
        Self::open(&settings.database_path(paths))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn has_bills_table(&self) -> BeerusResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'bills'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

fn ensure_parent(path: &Path) -> BeerusResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BeerusError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
