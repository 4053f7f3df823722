//! JSON export of bills
//!
//! Writes the bills in a range together with export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BeerusError, BeerusResult};
use crate::models::{Bill, DateRange, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Date window the bills were selected from
    pub range: DateRange,

    pub bill_count: usize,

    /// Exact sum of all exported amounts
    pub total: Money,

    pub bills: Vec<Bill>,
}

impl BillExport {
    /// Fails with [`BeerusError::AmountOverflow`] if the total leaves the decimal range
    pub fn new(range: DateRange, bills: Vec<Bill>) -> BeerusResult<Self> {
        let total = Money::try_sum(bills.iter().map(|b| b.amount), "export total")?;
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            range,
            bill_count: bills.len(),
            total,
            bills,
        })
    }
}

/// Serialize an export as pretty-printed JSON
pub fn export_bills_json<W: Write>(export: &BillExport, writer: &mut W) -> BeerusResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| BeerusError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| BeerusError::Export(e.to_string()))?;
    Ok(())
}
