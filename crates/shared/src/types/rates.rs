//! Rate lookup seam used by money conversion.

use crate::error::MoneyResult;
use crate::types::Currency;

/// Anything that can answer "how many `to` per one `from`".
///
/// Implementors return exactly the registered rate for the ordered pair and
/// `MoneyError::RateNotFound` otherwise. They must not infer rates through
/// intermediate currencies.
pub trait RateSource {
    /// Returns the multiplicative factor converting `from` into `to`.
    fn rate(&self, from: Currency, to: Currency) -> MoneyResult<f64>;
}
