//! # Requirements Data Structures
//!
//! The `Requirements` struct is the input record for the pricing engine:
//! a nested snapshot of everything an analyst captured about a dashboard
//! engagement. Sections are collected independently by the form layer and
//! assembled into one immutable snapshot via [`RequirementsBuilder`].
//!
//! ## Permissive deserialization
//!
//! Requirements documents arrive from form layers that may leave any field
//! missing, null, or populated with a non-numeric value. The engine must
//! still price them, so every numeric field funnels through one coercion
//! point (`de::count`): numbers are floored and clamped to zero, numeric
//! strings are parsed, and everything else reads as zero. Missing sections
//! and collections read as empty.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "quote": { "num_widgets": 10, "num_dashboards": 2 },
//!   "technical": {
//!     "file_counts": { "csv": 4, "json": 2 },
//!     "databases": [ { "tables": [ { "records": 500 }, { "records": 15000 } ] } ],
//!     "integrations": { "custom_apis": 1, "cloud_integrations": 1, "software_integrations": 0 }
//!   },
//!   "features": {
//!     "drilldowns": 1,
//!     "branding": { "logo": true, "widget_color": true }
//!   },
//!   "pricing": {
//!     "support_hours": 5,
//!     "hosting": { "api_count": 3, "tables_count": 2 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Complete requirements snapshot for one engagement.
///
/// Every section is optional; an empty `Requirements` still prices
/// (to the base fee plus fixed hosting services).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    /// Headline scope: widget and dashboard counts
    #[serde(deserialize_with = "de::lenient")]
    pub quote: QuoteScope,

    /// Technical scope: data sources and integrations
    #[serde(deserialize_with = "de::lenient")]
    pub technical: TechnicalScope,

    /// Interactive features and branding options
    #[serde(deserialize_with = "de::lenient")]
    pub features: FeatureScope,

    /// Pricing factors: support and hosting
    #[serde(deserialize_with = "de::lenient")]
    pub pricing: PricingFactors,
}

impl Requirements {
    /// Start building a requirements snapshot
    pub fn builder() -> RequirementsBuilder {
        RequirementsBuilder::default()
    }
}

/// Widget and dashboard counts for the engagement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteScope {
    #[serde(deserialize_with = "de::count")]
    pub num_widgets: u64,

    #[serde(deserialize_with = "de::count")]
    pub num_dashboards: u64,
}

/// Data sources and integrations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalScope {
    /// File-based sources, keyed by file-type tag (e.g. "csv", "excel")
    #[serde(deserialize_with = "de::count_map")]
    pub file_counts: BTreeMap<String, u64>,

    /// Database sources, in the order the analyst entered them
    #[serde(deserialize_with = "de::lenient")]
    pub databases: Vec<DatabaseSource>,

    #[serde(deserialize_with = "de::lenient")]
    pub integrations: Integrations,
}

/// One database source and its tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSource {
    #[serde(deserialize_with = "de::lenient")]
    pub tables: Vec<TableSource>,
}

impl DatabaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table with the given record count
    pub fn with_table(mut self, records: u64) -> Self {
        self.tables.push(TableSource { records });
        self
    }
}

/// One table within a database source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSource {
    /// Approximate record count, used for banded per-table fees
    #[serde(deserialize_with = "de::count")]
    pub records: u64,
}

/// Integration counts by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Integrations {
    #[serde(deserialize_with = "de::count")]
    pub custom_apis: u64,

    #[serde(deserialize_with = "de::count")]
    pub cloud_integrations: u64,

    #[serde(deserialize_with = "de::count")]
    pub software_integrations: u64,
}

impl Integrations {
    /// Total integration count across all kinds
    pub fn total(&self) -> u64 {
        self.custom_apis + self.cloud_integrations + self.software_integrations
    }
}

/// Interactive features and branding options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureScope {
    /// Number of drilldown interactions (each applies across every widget)
    #[serde(deserialize_with = "de::count")]
    pub drilldowns: u64,

    #[serde(deserialize_with = "de::lenient")]
    pub branding: Branding,
}

/// Branding options. Flags accept booleans or 0/1.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    #[serde(deserialize_with = "de::flag")]
    pub logo: bool,

    #[serde(deserialize_with = "de::flag")]
    pub widget_color: bool,

    #[serde(deserialize_with = "de::flag")]
    pub dashboard_color: bool,

    #[serde(deserialize_with = "de::flag")]
    pub widget_font: bool,

    #[serde(deserialize_with = "de::flag")]
    pub dashboard_style: bool,
}

/// Support and hosting factors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingFactors {
    #[serde(deserialize_with = "de::count")]
    pub support_hours: u64,

    #[serde(deserialize_with = "de::lenient")]
    pub hosting: Hosting,
}

/// Hosting scope beyond the widget count (which lives in [`QuoteScope`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hosting {
    /// APIs to host on backend infrastructure
    #[serde(deserialize_with = "de::count")]
    pub api_count: u64,

    /// Tables wired into hosted dashboards
    #[serde(deserialize_with = "de::count")]
    pub tables_count: u64,
}

/// Builder owned by the form layer.
///
/// Sections accumulate through chained setters; [`build`](Self::build)
/// produces the immutable snapshot handed to the pricing engine. The
/// engine never sees the intermediate mutable state.
///
/// # Example
///
/// ```rust
/// use quote_core::requirements::{DatabaseSource, Requirements};
///
/// let requirements = Requirements::builder()
///     .with_widgets(10)
///     .with_dashboards(2)
///     .with_file_source("csv", 4)
///     .with_database(DatabaseSource::new().with_table(500))
///     .with_support_hours(5)
///     .build();
///
/// assert_eq!(requirements.quote.num_widgets, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequirementsBuilder {
    requirements: Requirements,
}

impl RequirementsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_widgets(mut self, count: u64) -> Self {
        self.requirements.quote.num_widgets = count;
        self
    }

    pub fn with_dashboards(mut self, count: u64) -> Self {
        self.requirements.quote.num_dashboards = count;
        self
    }

    /// Set the count for one file-type tag (replaces any prior count)
    pub fn with_file_source(mut self, tag: impl Into<String>, count: u64) -> Self {
        self.requirements.technical.file_counts.insert(tag.into(), count);
        self
    }

    pub fn with_database(mut self, database: DatabaseSource) -> Self {
        self.requirements.technical.databases.push(database);
        self
    }

    pub fn with_integrations(mut self, integrations: Integrations) -> Self {
        self.requirements.technical.integrations = integrations;
        self
    }

    pub fn with_drilldowns(mut self, count: u64) -> Self {
        self.requirements.features.drilldowns = count;
        self
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.requirements.features.branding = branding;
        self
    }

    pub fn with_support_hours(mut self, hours: u64) -> Self {
        self.requirements.pricing.support_hours = hours;
        self
    }

    pub fn with_hosting(mut self, api_count: u64, tables_count: u64) -> Self {
        self.requirements.pricing.hosting = Hosting {
            api_count,
            tables_count,
        };
        self
    }

    /// Freeze the accumulated sections into an immutable snapshot
    pub fn build(self) -> Requirements {
        self.requirements
    }
}

/// Deserialization helpers implementing the permissiveness contract.
///
/// All numeric reads in a requirements document route through [`count`];
/// this module is the single place where "missing or non-numeric means
/// zero" is enforced.
pub(crate) mod de {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::collections::BTreeMap;

    /// Deserialize a count field: numeric-or-zero, clamped to `u64`.
    pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_count(&value))
    }

    /// Deserialize an option flag: booleans, or numbers treated as 0/1.
    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match &value {
            Value::Bool(b) => *b,
            Value::Number(_) => coerce_count(&value) != 0,
            _ => false,
        })
    }

    /// Deserialize a tag→count mapping, coercing each value.
    /// Anything other than an object reads as an empty map.
    pub fn count_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let mut counts = BTreeMap::new();
        if let Value::Object(entries) = value {
            for (tag, entry) in entries {
                counts.insert(tag, coerce_count(&entry));
            }
        }
        Ok(counts)
    }

    /// Deserialize a nested section or collection, falling back to its
    /// default when the value has the wrong shape (e.g. null, or a scalar
    /// where a record was expected).
    pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// The numeric-or-zero conversion applied to every count field.
    ///
    /// - unsigned integers pass through
    /// - signed/float values floor, negatives clamp to zero
    /// - strings parse as integer, then float; unparseable reads zero
    /// - everything else reads zero
    pub fn coerce_count(value: &Value) -> u64 {
        match value {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    u
                } else if let Some(f) = n.as_f64() {
                    if f > 0.0 {
                        f.floor() as u64
                    } else {
                        0
                    }
                } else {
                    0
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if let Ok(u) = trimmed.parse::<u64>() {
                    u
                } else if let Ok(f) = trimmed.parse::<f64>() {
                    if f > 0.0 {
                        f.floor() as u64
                    } else {
                        0
                    }
                } else {
                    0
                }
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_defaults() {
        let requirements: Requirements = serde_json::from_str("{}").unwrap();
        assert_eq!(requirements, Requirements::default());
        assert_eq!(requirements.quote.num_widgets, 0);
        assert!(requirements.technical.databases.is_empty());
        assert!(requirements.technical.file_counts.is_empty());
    }

    #[test]
    fn test_full_document() {
        let json = r#"{
            "quote": { "num_widgets": 10, "num_dashboards": 2 },
            "technical": {
                "file_counts": { "csv": 4, "json": 2 },
                "databases": [ { "tables": [ { "records": 500 }, { "records": 15000 } ] } ],
                "integrations": { "custom_apis": 1, "cloud_integrations": 1, "software_integrations": 0 }
            },
            "features": { "drilldowns": 1, "branding": { "logo": true, "widget_color": true } },
            "pricing": { "support_hours": 5, "hosting": { "api_count": 3, "tables_count": 2 } }
        }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();

        assert_eq!(requirements.quote.num_widgets, 10);
        assert_eq!(requirements.technical.file_counts["csv"], 4);
        assert_eq!(requirements.technical.databases[0].tables[1].records, 15000);
        assert_eq!(requirements.technical.integrations.total(), 2);
        assert!(requirements.features.branding.widget_color);
        assert!(!requirements.features.branding.dashboard_color);
        assert_eq!(requirements.pricing.hosting.api_count, 3);
    }

    #[test]
    fn test_non_numeric_reads_as_zero() {
        let json = r#"{ "quote": { "num_widgets": "", "num_dashboards": null } }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();
        assert_eq!(requirements.quote.num_widgets, 0);
        assert_eq!(requirements.quote.num_dashboards, 0);

        // Same result as omitting the fields entirely
        let omitted: Requirements = serde_json::from_str(r#"{ "quote": {} }"#).unwrap();
        assert_eq!(requirements, omitted);
    }

    #[test]
    fn test_numeric_strings_parse() {
        let json = r#"{ "quote": { "num_widgets": "12", "num_dashboards": "3.9" } }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();
        assert_eq!(requirements.quote.num_widgets, 12);
        assert_eq!(requirements.quote.num_dashboards, 3);
    }

    #[test]
    fn test_negative_and_float_clamping() {
        let json = r#"{ "quote": { "num_widgets": -4, "num_dashboards": 2.7 } }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();
        assert_eq!(requirements.quote.num_widgets, 0);
        assert_eq!(requirements.quote.num_dashboards, 2);
    }

    #[test]
    fn test_malformed_collections_read_empty() {
        let json = r#"{
            "technical": {
                "file_counts": 7,
                "databases": null,
                "integrations": "none"
            }
        }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();
        assert!(requirements.technical.file_counts.is_empty());
        assert!(requirements.technical.databases.is_empty());
        assert_eq!(requirements.technical.integrations, Integrations::default());
    }

    #[test]
    fn test_file_count_values_coerced() {
        let json = r#"{ "technical": { "file_counts": { "csv": "3", "excel": "lots", "json": 2 } } }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();
        assert_eq!(requirements.technical.file_counts["csv"], 3);
        assert_eq!(requirements.technical.file_counts["excel"], 0);
        assert_eq!(requirements.technical.file_counts["json"], 2);
    }

    #[test]
    fn test_numeric_branding_flags() {
        let json = r#"{ "features": { "branding": { "logo": 1, "widget_color": 0, "widget_font": "yes" } } }"#;
        let requirements: Requirements = serde_json::from_str(json).unwrap();
        assert!(requirements.features.branding.logo);
        assert!(!requirements.features.branding.widget_color);
        assert!(!requirements.features.branding.widget_font);
    }

    #[test]
    fn test_builder_snapshot() {
        let requirements = Requirements::builder()
            .with_widgets(10)
            .with_dashboards(2)
            .with_file_source("csv", 4)
            .with_file_source("json", 2)
            .with_database(DatabaseSource::new().with_table(500).with_table(15000))
            .with_integrations(Integrations {
                custom_apis: 1,
                cloud_integrations: 1,
                software_integrations: 0,
            })
            .with_drilldowns(1)
            .with_branding(Branding {
                logo: true,
                widget_color: true,
                ..Branding::default()
            })
            .with_support_hours(5)
            .with_hosting(3, 2)
            .build();

        assert_eq!(requirements.quote.num_widgets, 10);
        assert_eq!(requirements.technical.databases[0].tables.len(), 2);
        assert_eq!(requirements.pricing.hosting.tables_count, 2);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let requirements = Requirements::builder()
            .with_widgets(7)
            .with_database(DatabaseSource::new().with_table(1000))
            .with_hosting(1, 4)
            .build();

        let json = serde_json::to_string_pretty(&requirements).unwrap();
        let roundtrip: Requirements = serde_json::from_str(&json).unwrap();
        assert_eq!(requirements, roundtrip);
    }
}
