//! Multi-currency handling and exchange rates.

pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::convert_along;
pub use exchange::ExchangeRateTable;
