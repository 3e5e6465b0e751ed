//! Money error types.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by rate table and money operations.
///
/// Every operation is all-or-nothing: when one of these is returned, nothing
/// was written and no partial value was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// Exchange rate must be a finite, strictly positive number.
    #[error("Invalid exchange rate: {0} (rate must be positive)")]
    InvalidRate(f64),

    /// No rate is registered for the ordered pair.
    #[error("Exchange rate not found for {from} to {to}")]
    RateNotFound {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// Money amount cannot be negative.
    #[error("Invalid amount: {0} (amount cannot be negative)")]
    InvalidAmount(f64),

    /// Ordering is only defined within a single currency.
    #[error("Cannot compare amounts in different currencies: {left} and {right}")]
    MismatchedCurrency {
        /// Currency of the left operand.
        left: Currency,
        /// Currency of the right operand.
        right: Currency,
    },

    /// Currency code is not part of the supported set.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl MoneyError {
    /// Returns a stable error code for logs and callers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::RateNotFound { .. } => "RATE_NOT_FOUND",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::MismatchedCurrency { .. } => "MISMATCHED_CURRENCY",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
        }
    }
}
