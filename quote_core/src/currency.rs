//! # Currency Tags
//!
//! The static currency list supported for quoting. A quote carries a
//! currency tag for display only; there is no conversion logic.

use serde::{Deserialize, Serialize};

/// Supported quote currencies.
///
/// Serializes as the ISO code string (e.g. `"USD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "AUD")]
    Aud,
    #[serde(rename = "JPY")]
    Jpy,
    #[serde(rename = "CNY")]
    Cny,
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    /// All supported currencies, in display order
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Jpy,
        Currency::Cny,
        Currency::Inr,
    ];

    /// The ISO code (e.g. "USD")
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Inr => "INR",
        }
    }

    /// The display symbol (e.g. "$")
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad | Currency::Aud => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Inr => "₹",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_serialization() {
        let currency = Currency::Eur;
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"EUR\"");

        let roundtrip: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Currency::Eur);
    }

    #[test]
    fn test_all_codes_roundtrip() {
        for currency in Currency::ALL {
            let json = serde_json::to_string(&currency).unwrap();
            let roundtrip: Currency = serde_json::from_str(&json).unwrap();
            assert_eq!(currency, roundtrip);
            assert_eq!(json, format!("\"{}\"", currency.code()));
        }
    }

    #[test]
    fn test_default_is_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
        assert_eq!(Currency::default().symbol(), "$");
    }
}
