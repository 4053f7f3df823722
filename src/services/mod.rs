//! Service layer for beerus
//!
//! The service layer sits between the CLI and the store, handling input
//! validation and report assembly.

pub mod bill;

pub use bill::{BillInput, BillService};
