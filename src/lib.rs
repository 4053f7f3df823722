//! beerus - a small personal bill tracker
//!
//! Bills (title, amount, date) are kept in a local SQLite store. The library
//! provides registration and removal of bills, date-range listings with
//! monthly totals and averages, deficits against a monthly spending target,
//! text charts, and SQL/CSV/JSON transfer of the stored bills.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the JSON settings file
//! - `error`: Custom error types
//! - `models`: Bills, exact money amounts, months and date ranges
//! - `storage`: SQLite bill store, SQL dump and load
//! - `reports`: Monthly aggregation and deficits
//! - `services`: Input validation and report assembly
//! - `display`: Terminal formatting and bar charts
//! - `export`: CSV and JSON exports
//! - `cli`: Command handlers behind the `beerus` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use beerus::config::{BeerusPaths, Settings};
//! use beerus::storage::BillStore;
//!
//! let paths = BeerusPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = BillStore::from_settings(&settings, &paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BeerusError, BeerusResult};
