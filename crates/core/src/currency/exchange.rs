//! Exchange rate table.
//!
//! The table maps ordered currency pairs to conversion factors. Every stored
//! rate has its inverse stored alongside it, written by the same call, so the
//! table never holds one direction without the other. Identity pairs are never
//! stored; a lookup from a currency to itself always yields 1.0.

use std::collections::HashMap;

use tracing::{debug, trace};
use valuta_shared::{Currency, CurrencyPair, MoneyError, MoneyResult, RateSource};

/// In-memory table of pairwise exchange rates.
///
/// Populate once with [`set_rate`](Self::set_rate), then read. The table does
/// no locking of its own; concurrent writers and readers need external
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<CurrencyPair, f64>,
}

impl ExchangeRateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(from, to, rate)` triples.
    ///
    /// Stops at the first invalid rate and returns its error.
    pub fn from_entries<I>(entries: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (Currency, Currency, f64)>,
    {
        let mut table = Self::new();
        for (from, to, rate) in entries {
            table.set_rate(from, to, rate)?;
        }
        Ok(table)
    }

    /// Registers `1 from = rate to` and `1 to = 1/rate from`.
    ///
    /// Overwrites both directions when the pair already exists. Fails with
    /// `InvalidRate` (leaving the table untouched) unless `rate` is finite and
    /// strictly positive with a finite inverse.
    pub fn set_rate(&mut self, from: Currency, to: Currency, rate: f64) -> MoneyResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(MoneyError::InvalidRate(rate));
        }
        let inverse = rate.recip();
        if !inverse.is_finite() {
            return Err(MoneyError::InvalidRate(rate));
        }

        let pair = CurrencyPair::new(from, to);
        if pair.is_identity() {
            trace!(%pair, rate, "ignoring identity rate");
            return Ok(());
        }

        self.rates.insert(pair, rate);
        self.rates.insert(pair.inverse(), inverse);
        debug!(%pair, rate, inverse, "exchange rate set");
        Ok(())
    }

    /// Returns the factor converting `from` into `to`.
    ///
    /// Same-currency lookups return 1.0 without consulting storage. Otherwise
    /// only the exact ordered pair is honored; no rate is derived through
    /// other currencies.
    pub fn get_rate(&self, from: Currency, to: Currency) -> MoneyResult<f64> {
        if from == to {
            return Ok(1.0);
        }
        let pair = CurrencyPair::new(from, to);
        let rate = self
            .rates
            .get(&pair)
            .copied()
            .ok_or(MoneyError::RateNotFound { from, to })?;
        trace!(%pair, rate, "exchange rate lookup");
        Ok(rate)
    }

    /// Returns true if a rate is stored for the ordered pair.
    #[must_use]
    pub fn contains(&self, from: Currency, to: Currency) -> bool {
        self.rates.contains_key(&CurrencyPair::new(from, to))
    }

    /// Number of stored directed entries (always even).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over the stored directed entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyPair, f64)> + '_ {
        self.rates.iter().map(|(pair, rate)| (*pair, *rate))
    }
}

impl RateSource for ExchangeRateTable {
    fn rate(&self, from: Currency, to: Currency) -> MoneyResult<f64> {
        self.get_rate(from, to)
    }
}
