//! # Pricing Engine
//!
//! Maps a [`Requirements`] snapshot to an itemized [`Quote`]. The engine
//! is a pure function: deterministic, no I/O, no side effects, and total.
//! It never fails: requirements arrive pre-coerced (missing or malformed
//! fields read as zero), so every input prices to *something*, degrading
//! unpopulated scope to a zero contribution rather than an error. A
//! caller that forgets to fill in a field gets a quote priced as if that
//! field were zero; required-field checks belong to the form layer.
//!
//! Every rate the engine charges lives on [`PricingRates`]. The defaults
//! are the published schedule; callers that need a different schedule
//! pass their own rates to [`generate_quote_with`].
//!
//! ## Example
//!
//! ```rust
//! use quote_core::pricing::generate_quote;
//! use quote_core::requirements::Requirements;
//!
//! let requirements = Requirements::builder().with_widgets(10).build();
//! let quote = generate_quote(&requirements);
//!
//! assert_eq!(quote.widgets_price.amount(), 200);
//! assert_eq!(quote.total_price, quote.category_sum());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::currency::Currency;
use crate::money::Money;
use crate::quote::Quote;
use crate::requirements::{Branding, DatabaseSource, Hosting, Requirements};

/// Record-count band boundaries for per-table fees.
///
/// Bands are half-open: a table with exactly `MEDIUM_TABLE_MIN` records
/// prices at the medium fee, not the small one.
const MEDIUM_TABLE_MIN: u64 = 1_000;
const LARGE_TABLE_MIN: u64 = 10_000;
const XLARGE_TABLE_MIN: u64 = 100_000;
const HUGE_TABLE_MIN: u64 = 1_000_000;

/// Fixed hosting services charged on every quote: frontend deployment,
/// frontend testing, backend deployment, backend testing.
const HOSTING_SERVICES: u64 = 4;

/// The rate schedule.
///
/// All amounts are whole currency units in `currency`. `Default` is the
/// published schedule; the fixed fees (`base_fee`, `hosting_service_fee`)
/// carry no derivation; they are flat additive charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    /// Currency the schedule is denominated in
    pub currency: Currency,

    /// Flat fee charged on every quote
    pub base_fee: Money,

    /// Per widget
    pub widget_rate: Money,

    /// Per file-based data source
    pub file_source_rate: Money,

    /// Per database table, banded by record count
    pub small_table_fee: Money,
    pub medium_table_fee: Money,
    pub large_table_fee: Money,
    pub xlarge_table_fee: Money,
    pub huge_table_fee: Money,

    /// Per integration, any kind
    pub integration_rate: Money,

    /// Per drilldown, per widget
    pub drilldown_rate: Money,

    /// Flat fee for custom logo placement
    pub logo_fee: Money,

    /// Per widget, for each widget-level branding option
    pub widget_branding_rate: Money,

    /// Per dashboard, for each dashboard-level branding option
    pub dashboard_branding_rate: Money,

    /// Per support hour
    pub support_hourly_rate: Money,

    /// Widgets (or hosted APIs) per infrastructure tier
    pub hosting_tier_size: u64,

    /// Per infrastructure tier, frontend and backend alike
    pub hosting_tier_fee: Money,

    /// Per fixed deployment/testing service (charged four times)
    pub hosting_service_fee: Money,

    /// Per table wired into hosted dashboards
    pub hosted_table_rate: Money,
}

impl Default for PricingRates {
    fn default() -> Self {
        PricingRates {
            currency: Currency::Usd,
            base_fee: Money(1000),
            widget_rate: Money(20),
            file_source_rate: Money(40),
            small_table_fee: Money(40),
            medium_table_fee: Money(100),
            large_table_fee: Money(200),
            xlarge_table_fee: Money(300),
            huge_table_fee: Money(700),
            integration_rate: Money(1200),
            drilldown_rate: Money(20),
            logo_fee: Money(40),
            widget_branding_rate: Money(20),
            dashboard_branding_rate: Money(20),
            support_hourly_rate: Money(40),
            hosting_tier_size: 10,
            hosting_tier_fee: Money(1000),
            hosting_service_fee: Money(500),
            hosted_table_rate: Money(150),
        }
    }
}

impl PricingRates {
    /// Banded per-table fee for a table with the given record count.
    pub fn table_fee(&self, records: u64) -> Money {
        if records < MEDIUM_TABLE_MIN {
            self.small_table_fee
        } else if records < LARGE_TABLE_MIN {
            self.medium_table_fee
        } else if records < XLARGE_TABLE_MIN {
            self.large_table_fee
        } else if records < HUGE_TABLE_MIN {
            self.xlarge_table_fee
        } else {
            self.huge_table_fee
        }
    }

    /// Number of infrastructure tiers needed for `units` widgets or APIs.
    /// Zero units means zero tiers, not one.
    fn tiers(&self, units: u64) -> u64 {
        units.div_ceil(self.hosting_tier_size.max(1))
    }
}

/// Price a requirements snapshot with the published rate schedule.
pub fn generate_quote(requirements: &Requirements) -> Quote {
    generate_quote_with(&PricingRates::default(), requirements)
}

/// Price a requirements snapshot with an explicit rate schedule.
pub fn generate_quote_with(rates: &PricingRates, requirements: &Requirements) -> Quote {
    let num_widgets = requirements.quote.num_widgets;
    let num_dashboards = requirements.quote.num_dashboards;

    let widgets_price = rates.widget_rate * num_widgets;
    // Dashboards are included at no charge; the presenter surfaces them
    // as an "Included" line rather than a priced one.
    let data_sources_price = file_sources_price(rates, &requirements.technical.file_counts)
        + database_price(rates, &requirements.technical.databases);
    let integrations_price = rates.integration_rate * requirements.technical.integrations.total();
    let features_price = rates.drilldown_rate * (requirements.features.drilldowns * num_widgets);
    let branding_price = branding_price(
        rates,
        &requirements.features.branding,
        num_widgets,
        num_dashboards,
    );
    let support_price = rates.support_hourly_rate * requirements.pricing.support_hours;
    let hosting_price = hosting_price(rates, num_widgets, &requirements.pricing.hosting);

    let total_price = rates.base_fee
        + widgets_price
        + data_sources_price
        + integrations_price
        + features_price
        + branding_price
        + support_price
        + hosting_price;

    Quote {
        base_price: rates.base_fee,
        widgets_price,
        data_sources_price,
        integrations_price,
        features_price,
        branding_price,
        support_price,
        hosting_price,
        total_price,
        currency: rates.currency,
    }
}

/// Flat per-file fee, summed across all file-type tags.
fn file_sources_price(rates: &PricingRates, file_counts: &BTreeMap<String, u64>) -> Money {
    file_counts
        .values()
        .map(|&count| rates.file_source_rate * count)
        .sum()
}

/// Banded per-table fee, summed across every table of every database.
fn database_price(rates: &PricingRates, databases: &[DatabaseSource]) -> Money {
    databases
        .iter()
        .flat_map(|db| &db.tables)
        .map(|table| rates.table_fee(table.records))
        .sum()
}

/// Branding options are independent and additive: a flat logo fee, plus
/// per-widget and per-dashboard charges for each enabled option.
fn branding_price(
    rates: &PricingRates,
    branding: &Branding,
    num_widgets: u64,
    num_dashboards: u64,
) -> Money {
    let mut total = Money::ZERO;
    if branding.logo {
        total += rates.logo_fee;
    }
    if branding.widget_color {
        total += rates.widget_branding_rate * num_widgets;
    }
    if branding.dashboard_color {
        total += rates.dashboard_branding_rate * num_dashboards;
    }
    if branding.widget_font {
        total += rates.widget_branding_rate * num_widgets;
    }
    if branding.dashboard_style {
        total += rates.dashboard_branding_rate * num_dashboards;
    }
    total
}

/// Frontend tiers scale with widgets, backend tiers with hosted APIs,
/// both at one tier per started block of `hosting_tier_size`. The four
/// fixed deployment/testing services are charged even on an empty quote.
fn hosting_price(rates: &PricingRates, num_widgets: u64, hosting: &Hosting) -> Money {
    rates.hosting_tier_fee * rates.tiers(num_widgets)
        + rates.hosting_tier_fee * rates.tiers(hosting.api_count)
        + rates.hosting_service_fee * HOSTING_SERVICES
        + rates.hosted_table_rate * hosting.tables_count
}
