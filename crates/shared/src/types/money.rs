//! Money type: an immutable, non-negative amount in a single currency.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};
use crate::types::{Currency, RateSource};

/// Fractional digits written by `Display` when no precision is requested.
pub const DEFAULT_DISPLAY_PRECISION: usize = 10;

/// Represents a monetary amount with currency.
///
/// Values are validated once at construction and never change afterwards;
/// conversion produces a new value. Equality is exact: both the amount and
/// the currency must match, and no implicit conversion takes place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr")]
pub struct Money {
    amount: f64,
    currency: Currency,
}

#[derive(Deserialize)]
struct MoneyRepr {
    amount: f64,
    currency: Currency,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.amount, repr.currency)
    }
}

impl Money {
    /// Creates a new Money instance.
    ///
    /// Fails with `InvalidAmount` for negative, NaN or infinite amounts.
    pub fn new(amount: f64, currency: Currency) -> MoneyResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(MoneyError::InvalidAmount(amount));
        }
        Ok(Self { amount, currency })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: 0.0,
            currency,
        }
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact comparison, same as `PartialEq`
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Converts into `target` using the rate registered in `rates`.
    ///
    /// The receiver is left untouched. Propagates `RateNotFound` from the
    /// lookup, and fails with `InvalidAmount` if the product overflows.
    pub fn convert_to<R>(&self, target: Currency, rates: &R) -> MoneyResult<Self>
    where
        R: RateSource + ?Sized,
    {
        let rate = rates.rate(self.currency, target)?;
        Self::new(self.amount * rate, target)
    }

    /// Compares two amounts of the same currency.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        if self.currency != other.currency {
            return Err(MoneyError::MismatchedCurrency {
                left: self.currency,
                right: other.currency,
            });
        }
        // Amounts are finite by construction, so this never falls back.
        Ok(self
            .amount
            .partial_cmp(&other.amount)
            .unwrap_or(Ordering::Equal))
    }

    /// Returns true if `self` is strictly less than `other`.
    ///
    /// Fails with `MismatchedCurrency` when the currencies differ.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// Renders the amount with the default precision followed by the code.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl PartialOrd for Money {
    /// Returns `None` across currencies; use [`Money::try_cmp`] for a typed error.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(f, "{:.*} {}", precision, self.amount, self.currency)
    }
}
