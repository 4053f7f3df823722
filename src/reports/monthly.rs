//! Monthly totals
//!
//! Buckets date-sorted bills into consecutive calendar months and derives the
//! range total and the average monthly spend.

use chrono::NaiveDate;

use crate::error::{BeerusError, BeerusResult};
use crate::models::{Bill, DateRange, Money, Month};
use crate::storage::BillStore;

/// Decimal places kept in the monthly average
pub const AVERAGE_DECIMALS: u32 = 4;

/// Spending for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: Month,
    pub total: Money,
    pub bill_count: usize,
}

/// Single-pass run-length bucketing of `(amount, date)` pairs
///
/// Input must be sorted by date. A new bucket starts whenever the month
/// changes, so unsorted input yields several buckets for the same month.
/// A month whose sum leaves the decimal range is an
/// [`BeerusError::AmountOverflow`].
pub fn bucket_by_month<I>(entries: I) -> BeerusResult<Vec<MonthBucket>>
where
    I: IntoIterator<Item = (Money, NaiveDate)>,
{
    let mut buckets: Vec<MonthBucket> = Vec::new();

    for (amount, date) in entries {
        let month = Month::of(date);
        match buckets.last_mut() {
            Some(last) if last.month == month => {
                last.total = last.total.checked_add(amount).ok_or_else(|| {
                    BeerusError::AmountOverflow(format!("spending in {}", month))
                })?;
                last.bill_count += 1;
            }
            _ => buckets.push(MonthBucket {
                month,
                total: amount,
                bill_count: 1,
            }),
        }
    }

    Ok(buckets)
}

/// Mean of the bucket totals, rounded to [`AVERAGE_DECIMALS`] places
///
/// `None` without buckets.
pub fn monthly_average(buckets: &[MonthBucket]) -> BeerusResult<Option<Money>> {
    let sum = Money::try_sum(buckets.iter().map(|b| b.total), "sum of monthly totals")?;
    Ok(sum
        .divided_by(buckets.len())
        .map(|average| average.round_to(AVERAGE_DECIMALS)))
}

/// Bills in a date range together with their monthly totals
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub range: DateRange,
    pub bills: Vec<Bill>,
    pub buckets: Vec<MonthBucket>,
    /// Exact sum of every bill amount in the range
    pub total: Money,
    average: Option<Money>,
}

impl MonthlyReport {
    /// Query the store and bucket the result
    pub fn generate(store: &BillStore, range: DateRange) -> BeerusResult<Self> {
        let bills = store.query(&range)?;
        Self::from_bills(range, bills)
    }

    /// Build a report from bills already sorted by date
    pub fn from_bills(range: DateRange, bills: Vec<Bill>) -> BeerusResult<Self> {
        let buckets = bucket_by_month(bills.iter().map(|b| (b.amount, b.date)))?;
        let total = Money::try_sum(bills.iter().map(|b| b.amount), "total of bills in range")?;
        let average = monthly_average(&buckets)?;
        Ok(Self {
            range,
            bills,
            buckets,
            total,
            average,
        })
    }

    pub fn monthly_average(&self) -> Option<Money> {
        self.average
    }
}
