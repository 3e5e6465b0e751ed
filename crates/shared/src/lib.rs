//! Shared types, errors, and configuration for Valuta.
//!
//! This crate provides the value types used across all other crates:
//! - Currency codes and currency pairs
//! - Money values with conversion and comparison rules
//! - The `RateSource` seam consulted during conversion
//! - Typed money errors
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyPair, Money, RateSource};
