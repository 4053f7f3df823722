//! SQL script dump and load
//!
//! A dump is a plain SQL script that rebuilds the store:
//!
//! ```sql
//! BEGIN TRANSACTION;
//! CREATE TABLE IF NOT EXISTS bills (title text, amount text, date text);
//! INSERT INTO "bills" VALUES('Rent','1000.00','2024-01-05');
//! COMMIT;
//! ```
//!
//! Rows are written exactly as stored, in storage order.

use std::io::Write;

use tracing::{info, warn};

use super::{BillStore, CREATE_BILLS_TABLE};
use crate::error::{BeerusError, BeerusResult};

/// Quote a value as an SQL string literal, or `NULL`
pub fn sql_literal(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("'{}'", text.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

impl BillStore {
    /// Write the whole store as an SQL script; returns the number of rows written
    pub fn dump<W: Write>(&self, writer: &mut W) -> BeerusResult<usize> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, amount, date FROM bills ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;

        let io_err = |e: std::io::Error| BeerusError::Export(e.to_string());

        writeln!(writer, "BEGIN TRANSACTION;").map_err(io_err)?;
        writeln!(writer, "{};", CREATE_BILLS_TABLE).map_err(io_err)?;

        let mut written = 0;
        for row in rows {
            let (title, amount, date) = row?;
            writeln!(
                writer,
                "INSERT INTO \"bills\" VALUES({},{},{});",
                sql_literal(title.as_deref()),
                sql_literal(amount.as_deref()),
                sql_literal(date.as_deref()),
            )
            .map_err(io_err)?;
            written += 1;
        }

        writeln!(writer, "COMMIT;").map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        info!(path = %self.path.display(), rows = written, "dumped bill store");
        Ok(written)
    }

    /// Run an SQL script against the store; returns how many bills it added
    ///
    /// Loading is additive: existing bills stay, and loading the same dump
    /// twice doubles its rows. If the script fails, any transaction it
    /// opened is rolled back.
    pub fn load_script(&self, script: &str) -> BeerusResult<usize> {
        let before = if self.has_bills_table()? {
            self.count()?
        } else {
            0
        };

        if let Err(e) = self.conn.execute_batch(script) {
            if !self.conn.is_autocommit() {
                if let Err(rollback) = self.conn.execute_batch("ROLLBACK") {
                    warn!(error = %rollback, "rollback after failed load also failed");
                }
            }
            return Err(BeerusError::Storage(format!("Failed to load script: {}", e)));
        }

        if !self.has_bills_table()? {
            return Err(BeerusError::Storage(
                "Script did not create a bills table".into(),
            ));
        }

        let added = self.count()?.saturating_sub(before);
        info!(path = %self.path.display(), added, "loaded SQL script");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Bill, DateRange};
    use tempfile::TempDir;

    fn bill(title: &str, amount: &str, date: &str) -> Bill {
        Bill::parse(title, amount, date).unwrap()
    }

    fn dump_to_string(store: &BillStore) -> String {
        let mut buf = Vec::new();
        store.dump(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sql_literal() {
        assert_eq!(sql_literal(Some("Rent")), "'Rent'");
        assert_eq!(sql_literal(Some("Bob's")), "'Bob''s'");
        assert_eq!(sql_literal(None), "NULL");
    }

    #[test]
    fn test_dump_format() {
        let temp_dir = TempDir::new().unwrap();
        let store = BillStore::initialize(&temp_dir.path().join("bills.db"), false).unwrap();
        store.insert(&bill("Rent", "1000.00", "2024-01-05")).unwrap();

        let script = dump_to_string(&store);
        let lines: Vec<_> = script.lines().collect();
        assert_eq!(
            lines,
            [
                "BEGIN TRANSACTION;",
                "CREATE TABLE IF NOT EXISTS bills (title text, amount text, date text);",
                "INSERT INTO \"bills\" VALUES('Rent','1000.00','2024-01-05');",
                "COMMIT;",
            ]
        );
    }

    #[test]
    fn test_dump_then_load_into_fresh_store() {
        let temp_dir = TempDir::new().unwrap();
        let source = BillStore::initialize(&temp_dir.path().join("a.db"), false).unwrap();
        for b in [
            bill("Rent", "1000.00", "2024-01-05"),
            bill("Rent", "1000.00", "2024-02-05"),
            bill("Food", "50.25", "2024-01-10"),
            bill("Bob's 'Bistro'", "12.5", "2024-01-10"),
        ] {
            source.insert(&b).unwrap();
        }
        let script = dump_to_string(&source);

        let target = BillStore::open_or_create(&temp_dir.path().join("b.db")).unwrap();
        assert_eq!(target.load_script(&script).unwrap(), 4);

        for (begin, end) in [
            ("2024-01-01", "2024-12-31"),
            ("2024-01-10", "2024-01-10"),
            ("2024-02-01", "2024-01-01"),
        ] {
            let range = DateRange::new(parse_date(begin).unwrap(), parse_date(end).unwrap());
            assert_eq!(source.query(&range).unwrap(), target.query(&range).unwrap());
        }
    }

    #[test]
    fn test_load_into_initialized_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let source = BillStore::initialize(&temp_dir.path().join("a.db"), false).unwrap();
        source.insert(&bill("Rent", "1000.00", "2024-01-05")).unwrap();
        let script = dump_to_string(&source);

        let target = BillStore::initialize(&temp_dir.path().join("b.db"), false).unwrap();
        assert_eq!(target.load_script(&script).unwrap(), 1);
    }

    #[test]
    fn test_load_is_additive() {
        let temp_dir = TempDir::new().unwrap();
        let store = BillStore::initialize(&temp_dir.path().join("a.db"), false).unwrap();
        store.insert(&bill("Rent", "1000.00", "2024-01-05")).unwrap();
        let script = dump_to_string(&store);

        assert_eq!(store.load_script(&script).unwrap(), 1);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_failed_load_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = BillStore::initialize(&temp_dir.path().join("a.db"), false).unwrap();
        let script = "BEGIN TRANSACTION;\n\
                      INSERT INTO \"bills\" VALUES('Rent','1000.00','2024-01-05');\n\
                      INSERT INTO nowhere VALUES(1);\n\
                      COMMIT;\n";

        let err = store.load_script(script).unwrap_err();
        assert!(matches!(err, BeerusError::Storage(_)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_load_without_bills_table_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = BillStore::open_or_create(&temp_dir.path().join("a.db")).unwrap();

        let err = store.load_script("CREATE TABLE notes (body text);").unwrap_err();
        assert!(matches!(err, BeerusError::Storage(_)));
    }
}
