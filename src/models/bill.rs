//! Bill model
//!
//! A bill is one paper receipt: what it was for, how much, and when. Bills
//! have no identifier; two bills with the same three fields are
//! interchangeable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::{parse_date, Month, DATE_FORMAT};
use crate::error::BeerusResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bill {
    pub title: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl Bill {
    pub fn new(title: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            amount,
            date,
        }
    }

    /// Build a bill from raw text fields, validating amount and date
    pub fn parse(title: &str, amount: &str, date: &str) -> BeerusResult<Self> {
        Ok(Self {
            title: title.to_string(),
            amount: Money::parse(amount)?,
            date: parse_date(date)?,
        })
    }

    /// The monthly bucket this bill is counted in
    pub fn month(&self) -> Month {
        Month::of(self.date)
    }

    /// Date in the stored `YYYY-MM-DD` form
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\", amount {}, on {}", self.title, self.amount, self.date_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeerusError;

    #[test]
    fn test_parse() {
        let bill = Bill::parse("Rent", "1000.00", "2024-01-05").unwrap();
        assert_eq!(bill.title, "Rent");
        assert_eq!(bill.amount, Money::from_cents(100000));
        assert_eq!(bill.month().to_string(), "2024-01");
        assert_eq!(bill.date_key(), "2024-01-05");
    }

    #[test]
    fn test_parse_invalid_amount() {
        let err = Bill::parse("Rent", "a lot", "2024-01-05").unwrap_err();
        assert!(matches!(err, BeerusError::InvalidAmount(_)));
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = Bill::parse("Rent", "10", "Jan 5").unwrap_err();
        assert!(matches!(err, BeerusError::InvalidDate(_)));
    }

    #[test]
    fn test_display() {
        let bill = Bill::parse("Food", "50.25", "2024-01-10").unwrap();
        assert_eq!(bill.to_string(), "\"Food\", amount 50.25, on 2024-01-10");
    }

    #[test]
    fn test_serde_uses_iso_date_and_string_amount() {
        let bill = Bill::parse("Food", "50.25", "2024-01-10").unwrap();
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["date"], "2024-01-10");
        assert_eq!(json["amount"], "50.25");
    }
}
