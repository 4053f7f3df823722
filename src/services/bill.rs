//! Bill service
//!
//! Turns raw user input into validated bills and runs the store operations
//! behind each CLI action.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{BeerusError, BeerusResult};
use crate::models::{parse_date, Bill, DateRange, Money};
use crate::reports::{DeficitReport, MonthlyReport};
use crate::storage::BillStore;

/// Raw bill fields as typed by the user
#[derive(Debug, Clone, Default)]
pub struct BillInput {
    pub title: String,
    pub amount: String,
    /// Blank or missing means today
    pub date: Option<String>,
}

impl BillInput {
    pub fn new(title: impl Into<String>, amount: impl Into<String>, date: Option<String>) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            date,
        }
    }

    /// Validate into a bill; `today` fills in a blank date
    pub fn into_bill(self, today: NaiveDate) -> BeerusResult<Bill> {
        let amount = Money::parse(&self.amount)?;
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(text) => parse_date(text)?,
        };
        Ok(Bill::new(self.title, amount, date))
    }
}

/// Service for bill registration, removal and reporting
pub struct BillService<'a> {
    store: &'a BillStore,
}

impl<'a> BillService<'a> {
    pub fn new(store: &'a BillStore) -> Self {
        Self { store }
    }

    pub fn register(&self, bill: &Bill) -> BeerusResult<()> {
        self.store.insert(bill)
    }

    /// Remove every stored copy of `bill`; returns how many were removed
    pub fn remove(&self, bill: &Bill) -> BeerusResult<usize> {
        self.store.delete(&bill.title, bill.amount, bill.date)
    }

    pub fn monthly_report(&self, range: DateRange) -> BeerusResult<MonthlyReport> {
        let report = MonthlyReport::generate(self.store, range)?;
        debug!(
            range = %report.range,
            bills = report.bills.len(),
            months = report.buckets.len(),
            "built monthly report"
        );
        Ok(report)
    }

    /// Deficit report against a target given as text
    pub fn deficit_report(&self, range: DateRange, target: &str) -> BeerusResult<DeficitReport> {
        let target = Money::parse(target).map_err(|_| {
            BeerusError::InvalidAmount(format!("{} (monthly target)", target.trim()))
        })?;
        let monthly = self.monthly_report(range)?;
        DeficitReport::from_monthly(&monthly, target)
    }
}
