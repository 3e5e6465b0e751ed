//! Supported currencies and the ordered pair used to key exchange rates.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Bulgarian Lev
    Bgn,
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
    /// Turkish Lira
    Try,
}

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Self; 5] = [Self::Bgn, Self::Eur, Self::Usd, Self::Gbp, Self::Try];

    /// Returns the three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bgn => "BGN",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Try => "TRY",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BGN" => Ok(Self::Bgn),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "TRY" => Ok(Self::Try),
            _ => Err(MoneyError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Ordered `(from, to)` key into an exchange rate table.
///
/// `(A, B)` and `(B, A)` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

impl CurrencyPair {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Returns the pair with both sides swapped.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns true when both sides are the same currency.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
