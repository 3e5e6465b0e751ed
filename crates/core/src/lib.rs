//! Core business logic for Valuta.
//!
//! This crate contains pure conversion logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `currency` - Exchange rate table and conversion paths

pub mod currency;

pub use currency::{ExchangeRateTable, convert_along};
pub use valuta_shared::{Currency, CurrencyPair, Money, MoneyError, MoneyResult, RateSource};
