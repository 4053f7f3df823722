//! Calendar periods used by queries and reports
//!
//! `Month` keys the monthly buckets; `DateRange` is the inclusive window
//! every reading action filters on.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BeerusError;

/// ISO 8601 calendar day format used for input, storage and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, BeerusError> {
    let s = input.trim();
    // chrono accepts unpadded fields; storage ordering needs the padded form
    if s.len() != 10 {
        return Err(BeerusError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| BeerusError::InvalidDate(input.to_string()))
}

/// A calendar month, e.g. `2024-01`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive date window: `begin <= date <= end`
///
/// A range whose `begin` is after its `end` is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// The `days` days leading up to and including `today`
    ///
    /// `None` when the window would start before the earliest representable date.
    pub fn trailing_days(today: NaiveDate, days: u32) -> Option<Self> {
        let begin = today.checked_sub_signed(Duration::days(i64::from(days)))?;
        Some(Self { begin, end: today })
    }

    /// Build a range from optional CLI bounds, filling gaps with the trailing window
    pub fn from_bounds(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
        default_days: u32,
    ) -> Result<Self, BeerusError> {
        let begin = match from {
            Some(text) => parse_date(text)?,
            None => {
                Self::trailing_days(today, default_days)
                    .ok_or_else(|| {
                        BeerusError::Config(format!(
                            "a default range of {} days starts before the earliest supported date",
                            default_days
                        ))
                    })?
                    .begin
            }
        };
        let end = to.map(parse_date).transpose()?.unwrap_or(today);
        Ok(Self { begin, end })
    }

    pub fn is_empty(&self) -> bool {
        self.begin > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.begin.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}
