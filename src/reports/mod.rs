//! Reports module for beerus
//!
//! Monthly totals over a date range and the spending deficit against a
//! monthly target.

pub mod deficit;
pub mod monthly;

pub use deficit::{DeficitReport, MonthDeficit};
pub use monthly::{bucket_by_month, monthly_average, MonthBucket, MonthlyReport};
