//! Currency conversion along an explicit path.
//!
//! Each hop is an independent rate lookup. The path is chosen by the caller;
//! nothing here searches for a route between currencies.

use tracing::debug;
use valuta_shared::{Currency, Money, MoneyResult, RateSource};

/// Converts `money` through each currency of `path` in order.
///
/// Returns the value in the last currency of `path`, or `money` unchanged when
/// `path` is empty. Fails with the first hop's `RateNotFound`.
///
/// # Example
///
/// ```
/// use valuta_core::{Currency, ExchangeRateTable, Money, convert_along};
///
/// let mut table = ExchangeRateTable::new();
/// table.set_rate(Currency::Bgn, Currency::Eur, 0.5).unwrap();
/// table.set_rate(Currency::Eur, Currency::Usd, 1.1).unwrap();
///
/// let leva = Money::new(100.0, Currency::Bgn).unwrap();
/// let dollars = convert_along(leva, &[Currency::Eur, Currency::Usd], &table).unwrap();
/// assert_eq!(dollars.currency(), Currency::Usd);
/// assert!((dollars.amount() - 55.0).abs() < 1e-9);
/// ```
pub fn convert_along<R>(money: Money, path: &[Currency], rates: &R) -> MoneyResult<Money>
where
    R: RateSource + ?Sized,
{
    path.iter().try_fold(money, |current, &target| {
        let next = current.convert_to(target, rates)?;
        debug!(from = %current, to = %next, "conversion hop");
        Ok(next)
    })
}
