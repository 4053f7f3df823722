//! Export module for beerus
//!
//! Exports the bills in a date range as CSV or JSON. The full-store SQL dump
//! lives with the store itself (`BillStore::dump`).

pub mod csv;
pub mod json;

pub use self::csv::export_bills_csv;
pub use self::json::{export_bills_json, BillExport, EXPORT_SCHEMA_VERSION};
