//! # Pipeline Tracking
//!
//! Every quoted engagement becomes a ticket that moves through a fixed,
//! ordered set of pipeline stages, from initial pricing submission to
//! post-delivery change-log resolution. The board is a thin view over a
//! list of tickets keyed by their stage field: moving a ticket is an
//! explicit transition request that rewrites that field, nothing more.
//! Tickets carry the quote total as a display value only; the board
//! never calls back into the pricing engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{QuoteError, QuoteResult};
use crate::money::Money;

/// A pipeline stage. The set and its order are fixed.
///
/// Serializes as the display name (e.g. `"Pricing Submissions"`), which
/// is also the column title on a rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Pricing Submissions")]
    PricingSubmissions,
    #[serde(rename = "Quote Generated")]
    QuoteGenerated,
    #[serde(rename = "Contract Signed")]
    ContractSigned,
    #[serde(rename = "Contract Rejected")]
    ContractRejected,
    #[serde(rename = "Project Started")]
    ProjectStarted,
    #[serde(rename = "Project Delivered")]
    ProjectDelivered,
    #[serde(rename = "Project Change Log After Delivery")]
    ChangeLogAfterDelivery,
    #[serde(rename = "Change Log Pricing Accepted")]
    ChangeLogPricingAccepted,
    #[serde(rename = "Change Log Pricing Rejected")]
    ChangeLogPricingRejected,
}

impl Stage {
    /// All stages in pipeline order (the board's column order)
    pub const ALL: [Stage; 9] = [
        Stage::PricingSubmissions,
        Stage::QuoteGenerated,
        Stage::ContractSigned,
        Stage::ContractRejected,
        Stage::ProjectStarted,
        Stage::ProjectDelivered,
        Stage::ChangeLogAfterDelivery,
        Stage::ChangeLogPricingAccepted,
        Stage::ChangeLogPricingRejected,
    ];

    /// The display name, as rendered on board columns
    pub fn name(self) -> &'static str {
        match self {
            Stage::PricingSubmissions => "Pricing Submissions",
            Stage::QuoteGenerated => "Quote Generated",
            Stage::ContractSigned => "Contract Signed",
            Stage::ContractRejected => "Contract Rejected",
            Stage::ProjectStarted => "Project Started",
            Stage::ProjectDelivered => "Project Delivered",
            Stage::ChangeLogAfterDelivery => "Project Change Log After Delivery",
            Stage::ChangeLogPricingAccepted => "Change Log Pricing Accepted",
            Stage::ChangeLogPricingRejected => "Change Log Pricing Rejected",
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::PricingSubmissions
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Stage {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| QuoteError::unknown_stage(s))
    }
}

/// One opportunity on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,

    /// Engagement title (e.g. "Sales Dashboard Project")
    pub title: String,

    /// Client display name
    pub client: String,

    /// Quoted total, display value only
    pub quote_total: Money,

    pub status: Stage,

    /// Free-form labels for filtering (e.g. "high-priority")
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a new ticket in the initial stage.
    pub fn new(title: impl Into<String>, client: impl Into<String>, quote_total: Money) -> Self {
        let now = Utc::now();
        Ticket {
            id: Uuid::new_v4(),
            title: title.into(),
            client: client.into(),
            quote_total,
            status: Stage::default(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// The pipeline board: a list of tickets viewed by stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    tickets: Vec<Ticket>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ticket, returning its id.
    pub fn add(&mut self, ticket: Ticket) -> Uuid {
        let id = ticket.id;
        self.tickets.push(ticket);
        id
    }

    /// Get a ticket by id.
    pub fn get(&self, id: Uuid) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    /// Tickets in one stage, in insertion order (one board column).
    pub fn tickets_in(&self, stage: Stage) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| ticket.status == stage)
            .collect()
    }

    /// Move a ticket to another stage.
    ///
    /// A move to the ticket's current stage is a no-op. Unknown ids are
    /// rejected; there are no adjacency constraints between stages.
    pub fn move_ticket(&mut self, id: Uuid, to: Stage) -> QuoteResult<()> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or(QuoteError::UnknownTicket { id })?;

        if ticket.status != to {
            ticket.status = to;
            ticket.updated_at = Utc::now();
        }
        Ok(())
    }

    /// Case-insensitive search across title, client, and tags.
    pub fn search(&self, term: &str) -> Vec<&Ticket> {
        let term = term.to_lowercase();
        self.tickets
            .iter()
            .filter(|ticket| {
                ticket.title.to_lowercase().contains(&term)
                    || ticket.client.to_lowercase().contains(&term)
                    || ticket
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> (Board, Uuid, Uuid) {
        let mut board = Board::new();
        let sales = board.add(
            Ticket::new("Sales Dashboard Project", "Acme Corporation", Money(25000))
                .with_tag("high-priority")
                .with_tag("enterprise"),
        );
        let marketing = board.add(
            Ticket::new("Marketing Analytics Dashboard", "TechStart Inc", Money(15000))
                .with_tag("demo"),
        );
        (board, sales, marketing)
    }

    #[test]
    fn test_new_tickets_start_in_pricing_submissions() {
        let (board, _, _) = sample_board();
        assert_eq!(board.tickets_in(Stage::PricingSubmissions).len(), 2);
        assert!(board.tickets_in(Stage::QuoteGenerated).is_empty());
    }

    #[test]
    fn test_move_ticket_changes_column() {
        let (mut board, sales, _) = sample_board();
        board.move_ticket(sales, Stage::QuoteGenerated).unwrap();

        assert_eq!(board.get(sales).unwrap().status, Stage::QuoteGenerated);
        assert_eq!(board.tickets_in(Stage::PricingSubmissions).len(), 1);
        assert_eq!(board.tickets_in(Stage::QuoteGenerated).len(), 1);
    }

    #[test]
    fn test_move_unknown_ticket_rejected() {
        let (mut board, _, _) = sample_board();
        let result = board.move_ticket(Uuid::new_v4(), Stage::ContractSigned);
        assert!(matches!(result, Err(QuoteError::UnknownTicket { .. })));
    }

    #[test]
    fn test_move_to_same_stage_is_noop() {
        let (mut board, sales, _) = sample_board();
        let before = board.get(sales).unwrap().updated_at;
        board.move_ticket(sales, Stage::PricingSubmissions).unwrap();
        assert_eq!(board.get(sales).unwrap().updated_at, before);
    }

    #[test]
    fn test_search_matches_title_client_and_tags() {
        let (board, sales, marketing) = sample_board();

        assert_eq!(board.search("acme")[0].id, sales);
        assert_eq!(board.search("analytics")[0].id, marketing);
        assert_eq!(board.search("ENTERPRISE")[0].id, sales);
        assert!(board.search("nonexistent").is_empty());
    }

    #[test]
    fn test_stage_names_roundtrip() {
        for stage in Stage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.name()));

            let roundtrip: Stage = serde_json::from_str(&json).unwrap();
            assert_eq!(roundtrip, stage);

            let parsed: Stage = stage.name().parse().unwrap();
            assert_eq!(parsed, stage);
        }
    }

    #[test]
    fn test_unknown_stage_name_rejected() {
        let result: Result<Stage, _> = "Signed Off".parse();
        assert!(matches!(result, Err(QuoteError::UnknownStage { .. })));
    }

    #[test]
    fn test_board_serialization_roundtrip() {
        let (board, sales, _) = sample_board();
        let json = serde_json::to_string_pretty(&board).unwrap();
        assert!(json.contains("Pricing Submissions"));

        let roundtrip: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.len(), 2);
        assert_eq!(roundtrip.get(sales).unwrap().client, "Acme Corporation");
    }
}
