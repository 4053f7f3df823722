//! Spending deficit against a monthly target
//!
//! The target is the most one means to spend in a month. Each month's
//! deficit is `spent - target`: positive when overspending, zero or negative
//! when on budget. The total deficit is what has to be made up over the range.

use super::monthly::MonthlyReport;
use crate::error::{BeerusError, BeerusResult};
use crate::models::{DateRange, Money, Month};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDeficit {
    pub month: Month,
    pub spent: Money,
    pub deficit: Money,
}

#[derive(Debug, Clone)]
pub struct DeficitReport {
    pub range: DateRange,
    pub target: Money,
    pub months: Vec<MonthDeficit>,
    pub total_deficit: Money,
}

impl DeficitReport {
    /// Compare every month with spending against `target`
    ///
    /// Months without any bills are not counted. A deficit outside the
    /// decimal range is an [`BeerusError::AmountOverflow`].
    pub fn from_monthly(report: &MonthlyReport, target: Money) -> BeerusResult<Self> {
        let months = report
            .buckets
            .iter()
            .map(|bucket| {
                let deficit = bucket.total.checked_sub(target).ok_or_else(|| {
                    BeerusError::AmountOverflow(format!("deficit for {}", bucket.month))
                })?;
                Ok(MonthDeficit {
                    month: bucket.month,
                    spent: bucket.total,
                    deficit,
                })
            })
            .collect::<BeerusResult<Vec<_>>>()?;
        let total_deficit = Money::try_sum(months.iter().map(|m| m.deficit), "total deficit")?;

        Ok(Self {
            range: report.range,
            target,
            months,
            total_deficit,
        })
    }

    /// Months where spending went over the target
    pub fn over_target(&self) -> impl Iterator<Item = &MonthDeficit> {
        self.months.iter().filter(|m| m.deficit.is_positive())
    }

    pub fn on_target(&self) -> bool {
        !self.total_deficit.is_positive()
    }
}
