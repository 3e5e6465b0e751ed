//! Property-based tests for currency operations.
//!
//! - Rate symmetry and identity
//! - Conversion round trip and chain consistency
//! - Ordering within a currency

use proptest::prelude::*;
use valuta_shared::{Currency, Money, MoneyError};

use super::conversion::convert_along;
use super::exchange::ExchangeRateTable;

/// Strategy to pick any supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to pick two different currencies.
fn distinct_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = f64> {
    (1u32..100_000_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// Strategy to generate non-negative amounts (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = f64> {
    (0u32..1_000_000_000u32).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Strategy to generate a unit value per currency, for a consistent table.
fn unit_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(positive_rate(), Currency::ALL.len())
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Builds a table where `rate(a, b) = value(a) / value(b)` for every pair.
fn consistent_table(values: &[f64]) -> ExchangeRateTable {
    let mut table = ExchangeRateTable::new();
    for (i, &from) in Currency::ALL.iter().enumerate() {
        for (j, &to) in Currency::ALL.iter().enumerate().skip(i + 1) {
            table.set_rate(from, to, values[i] / values[j]).unwrap();
        }
    }
    table
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Setting a rate makes the pair readable in both directions.
    #[test]
    fn prop_set_rate_is_symmetric(
        (from, to) in distinct_pair(),
        rate in positive_rate(),
    ) {
        let mut table = ExchangeRateTable::new();
        table.set_rate(from, to, rate).unwrap();

        prop_assert!(approx_eq(table.get_rate(from, to).unwrap(), rate));
        prop_assert!(approx_eq(table.get_rate(to, from).unwrap(), 1.0 / rate));
        prop_assert_eq!(table.len(), 2);
    }

    /// Same-currency lookups return 1.0 whatever the table holds.
    #[test]
    fn prop_identity_rate(
        target in currency(),
        (from, to) in distinct_pair(),
        rate in positive_rate(),
    ) {
        let mut table = ExchangeRateTable::new();
        prop_assert_eq!(table.get_rate(target, target), Ok(1.0));

        table.set_rate(from, to, rate).unwrap();
        prop_assert_eq!(table.get_rate(target, target), Ok(1.0));
    }

    /// Unregistered pairs fail instead of being synthesized.
    #[test]
    fn prop_missing_pair_not_found((from, to) in distinct_pair()) {
        let table = ExchangeRateTable::new();
        prop_assert_eq!(
            table.get_rate(from, to),
            Err(MoneyError::RateNotFound { from, to })
        );
    }

    /// A rejected rate leaves the table exactly as it was.
    #[test]
    fn prop_invalid_rate_leaves_table_unchanged(
        (from, to) in distinct_pair(),
        rate in positive_rate(),
        bad in -1_000_000i32..=0,
    ) {
        let mut table = ExchangeRateTable::new();
        table.set_rate(from, to, rate).unwrap();

        let bad = f64::from(bad);
        prop_assert_eq!(table.set_rate(from, to, bad), Err(MoneyError::InvalidRate(bad)));
        prop_assert_eq!(table.len(), 2);
        prop_assert!(approx_eq(table.get_rate(from, to).unwrap(), rate));
    }

    /// Converting there and back through the stored inverse restores the amount.
    #[test]
    fn prop_round_trip_conversion(
        (from, to) in distinct_pair(),
        rate in positive_rate(),
        value in amount(),
    ) {
        let mut table = ExchangeRateTable::new();
        table.set_rate(from, to, rate).unwrap();

        let original = Money::new(value, from).unwrap();
        let there = original.convert_to(to, &table).unwrap();
        let back = there.convert_to(from, &table).unwrap();

        prop_assert_eq!(back.currency(), from);
        prop_assert!(approx_eq(back.amount(), value));
        prop_assert_eq!(original, Money::new(value, from).unwrap());
    }

    /// With a consistent table, a chain of hops agrees with the direct conversion.
    #[test]
    fn prop_chain_matches_direct(values in unit_values(), value in amount()) {
        let table = consistent_table(&values);
        let start = Money::new(value, Currency::Eur).unwrap();

        let chained = convert_along(
            start,
            &[Currency::Bgn, Currency::Eur, Currency::Try, Currency::Gbp],
            &table,
        )
        .unwrap();
        let direct = start.convert_to(Currency::Gbp, &table).unwrap();

        prop_assert_eq!(chained.currency(), Currency::Gbp);
        prop_assert!(approx_eq(chained.amount(), direct.amount()));
    }

    /// Ordering in one currency follows the amounts; across currencies it fails.
    #[test]
    fn prop_less_than_follows_amounts(
        a in amount(),
        b in amount(),
        (left, right) in distinct_pair(),
    ) {
        let x = Money::new(a, left).unwrap();
        let y = Money::new(b, left).unwrap();
        prop_assert_eq!(x.less_than(&y), Ok(a < b));

        let z = Money::new(b, right).unwrap();
        prop_assert_eq!(
            x.less_than(&z),
            Err(MoneyError::MismatchedCurrency { left, right })
        );
        prop_assert_ne!(x, z);
    }
}
