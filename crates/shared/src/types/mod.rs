//! Common types used across the application.

pub mod currency;
pub mod money;
pub mod rates;

pub use currency::{Currency, CurrencyPair};
pub use money::Money;
pub use rates::RateSource;
