//! # Opportunity Container
//!
//! The `Opportunity` struct is the root record for one quoting
//! engagement: analyst and client information, the requirements
//! snapshot, the generated quote, and attachment metadata. It is what
//! gets saved to `.qop` files (see [`crate::file_io`]) and what the
//! pipeline board summarizes into tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::money::Money;
use crate::pipeline::Ticket;
use crate::pricing::{generate_quote_with, PricingRates};
use crate::quote::Quote;
use crate::requirements::Requirements;

/// Current schema version for .qop files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root container for one quoting engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Opportunity metadata (version, analyst, title, timestamps)
    pub meta: OpportunityMetadata,

    /// Who the quote is for
    pub client: ClientProfile,

    /// The requirements snapshot supplied by the form layer
    pub requirements: Requirements,

    /// The generated quote, once priced
    pub quote: Option<Quote>,

    /// Attached document metadata (no file contents are stored)
    pub documents: Vec<DocumentMeta>,
}

impl Opportunity {
    /// Create a new unpriced opportunity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quote_core::project::{ClientProfile, Opportunity};
    ///
    /// let client = ClientProfile::new("Acme Corporation", "contact@acme.example");
    /// let opportunity = Opportunity::new("Dana Analyst", "Sales Dashboard Project", client);
    /// assert!(opportunity.quote.is_none());
    /// ```
    pub fn new(
        analyst: impl Into<String>,
        title: impl Into<String>,
        client: ClientProfile,
    ) -> Self {
        let now = Utc::now();
        Opportunity {
            meta: OpportunityMetadata {
                version: SCHEMA_VERSION.to_string(),
                analyst: analyst.into(),
                title: title.into(),
                created: now,
                modified: now,
            },
            client,
            requirements: Requirements::default(),
            quote: None,
            documents: Vec::new(),
        }
    }

    /// Replace the requirements snapshot.
    pub fn set_requirements(&mut self, requirements: Requirements) {
        self.requirements = requirements;
        self.touch();
    }

    /// Price the stored requirements and keep the result.
    ///
    /// The quote is denominated in the client's currency; rates are
    /// otherwise the published schedule. Re-pricing replaces any
    /// earlier quote.
    pub fn price(&mut self) -> Quote {
        let rates = PricingRates {
            currency: self.client.currency,
            ..PricingRates::default()
        };
        let quote = generate_quote_with(&rates, &self.requirements);
        self.quote = Some(quote);
        self.touch();
        quote
    }

    /// Record an attached document. Metadata only; the file itself is
    /// not stored.
    pub fn attach_document(&mut self, filename: impl Into<String>, filetype: impl Into<String>) {
        self.documents.push(DocumentMeta {
            filename: filename.into(),
            filetype: filetype.into(),
            uploaded_at: Utc::now(),
        });
        self.touch();
    }

    /// Summarize this opportunity into a pipeline ticket.
    ///
    /// The ticket reads the quote total as a display value (zero while
    /// unpriced) and starts in the initial stage.
    pub fn ticket(&self) -> Ticket {
        let total = self.quote.map(|quote| quote.total_price).unwrap_or(Money::ZERO);
        Ticket::new(self.meta.title.clone(), self.client.name.clone(), total)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Opportunity metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the analyst who captured the requirements
    pub analyst: String,

    /// Engagement title (e.g. "Sales Dashboard Project")
    pub title: String,

    /// When the opportunity was created
    pub created: DateTime<Utc>,

    /// When the opportunity was last modified
    pub modified: DateTime<Utc>,
}

/// Client information captured alongside the requirements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientProfile {
    pub name: String,
    pub client_type: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub currency: Currency,
    pub industry_sector: Option<String>,
    pub contact_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

impl ClientProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        ClientProfile {
            name: name.into(),
            email: email.into(),
            ..ClientProfile::default()
        }
    }
}

/// Metadata for one attached document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub filename: String,

    /// File type tag (e.g. "pdf", "xlsx")
    pub filetype: String,

    pub uploaded_at: DateTime<Utc>,
}
