//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;
use crate::types::money::DEFAULT_DISPLAY_PRECISION;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output formatting.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Exchange rates to register at startup.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Fractional digits used when printing money values.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_DISPLAY_PRECISION
}

/// A single configured rate: 1 `from` = `rate` `to`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RateConfig {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Conversion factor.
    pub rate: f64,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("VALUTA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has unknown currencies.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Returns the configured rates as `(from, to, rate)` triples.
    pub fn rate_entries(&self) -> impl Iterator<Item = (Currency, Currency, f64)> + '_ {
        self.rates.iter().map(|r| (r.from, r.to, r.rate))
    }
}
