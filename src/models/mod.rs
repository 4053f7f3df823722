//! Core data models for beerus
//!
//! Bills, exact money amounts, and the calendar periods used to filter and
//! bucket them.

pub mod bill;
pub mod money;
pub mod period;

pub use bill::Bill;
pub use money::Money;
pub use period::{parse_date, DateRange, Month, DATE_FORMAT};
