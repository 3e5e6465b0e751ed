//! Valuta converter
//!
//! Seeds an exchange rate table from configuration, runs a conversion chain,
//! and prints a handful of equality and ordering checks.
//!
//! Usage: cargo run --bin valuta

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valuta_core::{Currency, ExchangeRateTable, Money, convert_along};
use valuta_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valuta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let rates = ExchangeRateTable::from_entries(config.rate_entries())
        .context("invalid exchange rate in configuration")?;
    if rates.is_empty() {
        warn!("no exchange rates configured; only same-currency conversion will succeed");
    }
    info!(entries = rates.len(), "exchange rate table ready");

    let precision = config.display.precision;
    let show = |label: &str, money: &Money| println!("{label}: {money:.precision$}");

    let leva = Money::new(100.0, Currency::Bgn)?;
    let euro = leva.convert_to(Currency::Eur, &rates)?;
    let lira = euro.convert_to(Currency::Try, &rates)?;
    let dollars = lira.convert_to(Currency::Usd, &rates)?;
    let pounds = dollars.convert_to(Currency::Gbp, &rates)?;

    show("Amount in BGN", &leva);
    show("Converted to EUR", &euro);
    show("Converted to TRY", &lira);
    show("Converted to USD", &dollars);
    show("Converted to GBP", &pounds);

    let chained = convert_along(
        Money::new(100.0, Currency::Eur)?,
        &[Currency::Bgn, Currency::Eur, Currency::Try, Currency::Gbp],
        &rates,
    )?;
    show("100 EUR via BGN, EUR, TRY to GBP", &chained);

    let expected_euro = Money::new(51.1292, Currency::Eur)?;
    report("100 BGN in EUR equals 51.1292 EUR", euro == expected_euro);
    report("100 BGN in EUR equals the same amount in TRY", euro == lira);

    let lira_100 = Money::new(100.0, Currency::Try)?;
    let lira_99 = Money::new(99.0, Currency::Try)?;
    let lira_101 = Money::new(101.0, Currency::Try)?;
    report("100 TRY is less than 99 TRY", lira_100.less_than(&lira_99)?);
    report("100 TRY is less than 101 TRY", lira_100.less_than(&lira_101)?);
    report("100 BGN equals 100 TRY", Money::new(100.0, Currency::Bgn)? == lira_100);

    match leva.less_than(&euro) {
        Ok(result) => report("100 BGN is less than its EUR value", result),
        Err(e) => println!("Comparing BGN with EUR: {e} ({})", e.error_code()),
    }

    Ok(())
}

fn report(check: &str, outcome: bool) {
    println!("{check}: {}", if outcome { "yes" } else { "no" });
}
