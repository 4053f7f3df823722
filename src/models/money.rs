//! Money type for representing currency amounts
//!
//! Wraps `rust_decimal::Decimal` so amounts keep the exact value the user
//! typed. Sums never pass through floating point.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BeerusError, BeerusResult};

/// An exact decimal currency amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from an integer number of cents
    ///
    /// # Examples
    /// ```
    /// use beerus::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Lossy conversion for chart scaling only
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// `self + other`, or `None` if the result leaves the decimal range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `self - other`, or `None` if the result leaves the decimal range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Exact sum of `amounts`
    ///
    /// Fails with [`BeerusError::AmountOverflow`] instead of wrapping or
    /// panicking; `what` names the sum in the message.
    pub fn try_sum<I>(amounts: I, what: &str) -> BeerusResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts.into_iter().try_fold(Self::zero(), |acc, amount| {
            acc.checked_add(amount)
                .ok_or_else(|| BeerusError::AmountOverflow(what.to_string()))
        })
    }

    /// Divide evenly into `parts`, without trailing zeros
    pub fn divided_by(&self, parts: usize) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        self.0
            .checked_div(Decimal::from(parts))
            .map(|quotient| Self(quotient.normalize()))
    }

    /// Round half away from zero to at most `places` decimals
    pub fn round_to(&self, places: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    /// Parse a money amount from user input
    ///
    /// Accepts plain decimal literals: "10.50", "-10.50", "$10.50", "10".
    /// Exponents, separators, and values that would lose precision are
    /// rejected with [`BeerusError::InvalidAmount`].
    pub fn parse(input: &str) -> Result<Self, BeerusError> {
        let s = input.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let well_formed = !s.is_empty()
            && s.chars().all(|c| c.is_ascii_digit() || c == '.')
            && s.chars().filter(|c| *c == '.').count() <= 1
            && s.chars().any(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(BeerusError::InvalidAmount(input.to_string()));
        }

        let value = Decimal::from_str_exact(s)
            .map_err(|_| BeerusError::InvalidAmount(input.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, showing at least two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let mut value = self.0.abs();
        if value.scale() < 2 {
            value.rescale(2);
        }
        if self.is_negative() {
            format!("-{}{}", symbol, value)
        } else {
            format!("{}{}", symbol, value)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Prints the decimal exactly as stored, with no currency symbol
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
