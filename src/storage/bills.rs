//! Bill insert, delete and range queries

use chrono::NaiveDate;
use rusqlite::{params, Row};
use tracing::{debug, info};

use super::BillStore;
use crate::error::{BeerusError, BeerusResult};
use crate::models::{parse_date, Bill, DateRange, Money, DATE_FORMAT};

impl BillStore {
    /// Append one bill. Duplicates are allowed.
    pub fn insert(&self, bill: &Bill) -> BeerusResult<()> {
        self.conn.execute(
            "INSERT INTO bills (title, amount, date) VALUES (?1, ?2, ?3)",
            params![bill.title, bill.amount.to_string(), bill.date_key()],
        )?;
        info!(title = %bill.title, amount = %bill.amount, date = %bill.date_key(), "inserted bill");
        Ok(())
    }

    /// Remove every bill matching all three fields; returns how many went
    ///
    /// Title and date must match exactly. Amounts match by decimal value, not
    /// by the stored text, so `1000` removes a bill stored as `1000.00`. A
    /// plain `amount = ?` text comparison would miss it. No match is not an
    /// error.
    pub fn delete(&self, title: &str, amount: Money, date: NaiveDate) -> BeerusResult<usize> {
        let date_key = date.format(DATE_FORMAT).to_string();
        let tx = self.conn.unchecked_transaction()?;

        let candidates: Vec<(i64, String)> = {
            let mut stmt =
                tx.prepare("SELECT rowid, amount FROM bills WHERE title = ?1 AND date = ?2")?;
            let rows = stmt.query_map(params![title, date_key], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        let mut removed = 0;
        for (rowid, stored) in candidates {
            let matches = match Money::parse(&stored) {
                Ok(stored_amount) => stored_amount == amount,
                Err(_) => stored == amount.to_string(),
            };
            if matches {
                removed += tx.execute("DELETE FROM bills WHERE rowid = ?1", params![rowid])?;
            }
        }

        tx.commit()?;
        info!(title, amount = %amount, date = %date_key, removed, "deleted bills");
        Ok(removed)
    }

    /// Bills with `range.begin <= date <= range.end`, oldest first
    ///
    /// Bills on the same day come back in insertion order.
    pub fn query(&self, range: &DateRange) -> BeerusResult<Vec<Bill>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, amount, date FROM bills \
             WHERE date BETWEEN ?1 AND ?2 \
             ORDER BY date ASC, rowid ASC",
        )?;

        let rows = stmt.query_map(
            params![
                range.begin.format(DATE_FORMAT).to_string(),
                range.end.format(DATE_FORMAT).to_string()
            ],
            raw_bill,
        )?;

        let bills = rows
            .map(|row| row.map_err(BeerusError::from).and_then(decode_bill))
            .collect::<BeerusResult<Vec<_>>>()?;

        debug!(range = %range, count = bills.len(), "queried bills");
        Ok(bills)
    }

    /// Every bill in the store, oldest first
    pub fn all(&self) -> BeerusResult<Vec<Bill>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, amount, date FROM bills ORDER BY date ASC, rowid ASC")?;
        let rows = stmt.query_map([], raw_bill)?;

        rows.map(|row| row.map_err(BeerusError::from).and_then(decode_bill))
            .collect()
    }

    pub fn count(&self) -> BeerusResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM bills", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

type RawBill = (String, String, String);

fn raw_bill(row: &Row<'_>) -> rusqlite::Result<RawBill> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn decode_bill((title, amount, date): RawBill) -> BeerusResult<Bill> {
    let corrupt = |e: BeerusError| {
        BeerusError::Storage(format!("Stored bill \"{}\" is unreadable: {}", title, e))
    };
    let amount = Money::parse(&amount).map_err(corrupt)?;
    let date = parse_date(&date).map_err(corrupt)?;
    Ok(Bill::new(title, amount, date))
}
