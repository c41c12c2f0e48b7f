//! # quote_core - Dashboard Engagement Quoting Engine
//!
//! `quote_core` is the computational heart of Quotient: it turns a
//! structured requirements record for a dashboard-development engagement
//! into an itemized, reproducible price quote, and tracks the resulting
//! opportunity through a fixed pipeline of stages. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The pricing engine is a pure function of its input
//! - **Total**: Pricing never fails; missing or malformed fields read as zero
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Exact**: Integer arithmetic throughout; totals are exact sums
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::pricing::generate_quote;
//! use quote_core::requirements::Requirements;
//!
//! let requirements = Requirements::builder()
//!     .with_widgets(10)
//!     .with_dashboards(2)
//!     .with_support_hours(5)
//!     .build();
//!
//! let quote = generate_quote(&requirements);
//! assert_eq!(quote.total_price, quote.category_sum());
//!
//! // Serialize for display or export
//! let json = serde_json::to_string_pretty(&quote).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`requirements`] - Input record, permissive deserialization, builder
//! - [`pricing`] - The pricing engine and rate schedule
//! - [`quote`] - Itemized quote output and line-item breakdown
//! - [`money`] / [`currency`] - Monetary amounts and currency tags
//! - [`pipeline`] - Pipeline stages, tickets, and the board view
//! - [`project`] - Opportunity container (client, requirements, quote, attachments)
//! - [`errors`] - Structured error types
//! - [`file_io`] - Opportunity files and quote exports with atomic saves

pub mod currency;
pub mod errors;
pub mod file_io;
pub mod money;
pub mod pipeline;
pub mod pricing;
pub mod project;
pub mod quote;
pub mod requirements;

// Re-export commonly used types at crate root for convenience
pub use currency::Currency;
pub use errors::{QuoteError, QuoteResult};
pub use file_io::{export_quote, load_opportunity, save_opportunity};
pub use money::Money;
pub use pipeline::{Board, Stage, Ticket};
pub use pricing::{generate_quote, generate_quote_with, PricingRates};
pub use project::{ClientProfile, Opportunity, OpportunityMetadata};
pub use quote::{LineAmount, LineItem, Quote};
pub use requirements::{Requirements, RequirementsBuilder};
