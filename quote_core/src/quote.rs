//! # Quote Data Structures
//!
//! The `Quote` struct is the itemized output of the pricing engine: one
//! amount per pricing category plus the exact total and a currency tag.
//! A quote is created once per engine invocation and never mutated;
//! ownership passes to whichever caller requested it.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "base_price": 1000,
//!   "widgets_price": 200,
//!   "data_sources_price": 480,
//!   "integrations_price": 2400,
//!   "features_price": 200,
//!   "branding_price": 240,
//!   "support_price": 200,
//!   "hosting_price": 4300,
//!   "total_price": 9020,
//!   "currency": "USD"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::money::Money;

/// Itemized price quote for one requirements snapshot.
///
/// Invariant: `total_price` equals the exact sum of the eight category
/// amounts. The engine computes both from the same integer arithmetic,
/// so there is no rounding drift to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub base_price: Money,
    pub widgets_price: Money,
    pub data_sources_price: Money,
    pub integrations_price: Money,
    pub features_price: Money,
    pub branding_price: Money,
    pub support_price: Money,
    pub hosting_price: Money,
    pub total_price: Money,
    pub currency: Currency,
}

/// One row of a rendered cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: LineAmount,
}

/// A line's amount: a priced figure, or included at no charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineAmount {
    Priced(Money),
    Included,
}

impl Quote {
    /// The eight priced categories with their display labels, in
    /// breakdown order.
    pub fn categories(&self) -> [(&'static str, Money); 8] {
        [
            ("Base Price", self.base_price),
            ("Widgets", self.widgets_price),
            ("Data Sources", self.data_sources_price),
            ("Integrations", self.integrations_price),
            ("Features", self.features_price),
            ("Branding", self.branding_price),
            ("Support", self.support_price),
            ("Hosting", self.hosting_price),
        ]
    }

    /// Cost breakdown for display: priced categories with a non-zero
    /// amount, plus the dashboards row, which is always surfaced as
    /// included at no charge.
    ///
    /// Whether dashboards are genuinely free-tier or an unpriced rule is
    /// an open product question; until that is settled they contribute
    /// zero and render as "Included" rather than as a priced line.
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut items = Vec::new();
        for (label, amount) in self.categories() {
            if !amount.is_zero() {
                items.push(LineItem {
                    label,
                    amount: LineAmount::Priced(amount),
                });
            }
            if label == "Widgets" {
                items.push(LineItem {
                    label: "Dashboards",
                    amount: LineAmount::Included,
                });
            }
        }
        items
    }

    /// Exact sum of the eight category amounts.
    ///
    /// Always equals `total_price` for an engine-produced quote; exposed
    /// so consumers can verify quotes deserialized from external sources.
    pub fn category_sum(&self) -> Money {
        self.categories().into_iter().map(|(_, amount)| amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> Quote {
        Quote {
            base_price: Money(1000),
            widgets_price: Money(200),
            data_sources_price: Money(0),
            integrations_price: Money(2400),
            features_price: Money(0),
            branding_price: Money(240),
            support_price: Money(0),
            hosting_price: Money(4300),
            total_price: Money(8140),
            currency: Currency::Usd,
        }
    }

    #[test]
    fn test_line_items_skip_zero_amounts() {
        let quote = sample_quote();
        let items = quote.line_items();

        let labels: Vec<&str> = items.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec!["Base Price", "Widgets", "Dashboards", "Integrations", "Branding", "Hosting"]
        );
    }

    #[test]
    fn test_dashboards_always_included() {
        let quote = sample_quote();
        let dashboards = quote
            .line_items()
            .into_iter()
            .find(|item| item.label == "Dashboards")
            .unwrap();
        assert_eq!(dashboards.amount, LineAmount::Included);
    }

    #[test]
    fn test_category_sum_matches_total() {
        let quote = sample_quote();
        assert_eq!(quote.category_sum(), quote.total_price);
    }

    #[test]
    fn test_serialization() {
        let quote = sample_quote();
        let json = serde_json::to_string_pretty(&quote).unwrap();

        assert!(json.contains("\"total_price\": 8140"));
        assert!(json.contains("\"currency\": \"USD\""));

        let roundtrip: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, roundtrip);
    }
}
