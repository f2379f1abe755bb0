//! Market metadata types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Lifecycle status of a market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum MarketStatus {
    /// Open for trading
    Active,
    /// Trading has ended, outcome not yet final
    Closed,
    /// Outcome is final
    Resolved,
    /// Absent from the response, or a value this client does not know
    Unknown,
}

impl From<String> for MarketStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "ACTIVE" => MarketStatus::Active,
            "CLOSED" => MarketStatus::Closed,
            "RESOLVED" => MarketStatus::Resolved,
            _ => MarketStatus::Unknown,
        }
    }
}

impl Default for MarketStatus {
    fn default() -> Self {
        MarketStatus::Unknown
    }
}

/// One tradable outcome of a market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Outcome label, typically "Yes" or "No"
    #[serde(default)]
    pub outcome: String,

    #[serde(default)]
    pub token_id: String,
}

impl Outcome {
    pub fn is_yes(&self) -> bool {
        self.outcome == "Yes"
    }

    pub fn is_no(&self) -> bool {
        self.outcome == "No"
    }
}

/// A prediction market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    #[serde(default)]
    pub market_slug: String,

    #[serde(default)]
    pub condition_id: String,

    /// Human-readable question
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// At most one outcome is flagged "Yes" and one "No"
    #[serde(default)]
    pub outcomes: Vec<Outcome>,

    /// Unix seconds when trading opens
    #[serde(default)]
    pub start_time: Option<i64>,

    /// Unix seconds when trading closes
    #[serde(default)]
    pub end_time: Option<i64>,

    #[serde(default)]
    pub volume: f64,

    #[serde(default)]
    pub liquidity: f64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub status: MarketStatus,
}

impl Market {
    pub fn is_active(&self) -> bool {
        self.status == MarketStatus::Active
    }

    pub fn is_closed(&self) -> bool {
        self.status == MarketStatus::Closed
    }

    pub fn is_resolved(&self) -> bool {
        self.status == MarketStatus::Resolved
    }

    /// The outcome labeled "Yes", if present
    pub fn yes_outcome(&self) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.is_yes())
    }

    /// The outcome labeled "No", if present
    pub fn no_outcome(&self) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.is_no())
    }

    pub fn yes_token_id(&self) -> Option<&str> {
        self.yes_outcome().map(|o| o.token_id.as_str())
    }

    pub fn no_token_id(&self) -> Option<&str> {
        self.no_outcome().map(|o| o.token_id.as_str())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_time.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_time.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Response from the markets endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketsResponse {
    #[serde(default)]
    pub markets: Vec<Market>,

    #[serde(default)]
    pub pagination: Pagination,
}

impl MarketsResponse {
    /// Total markets matching the query, across all pages
    pub fn total_markets(&self) -> u64 {
        self.pagination.total.unwrap_or(0)
    }

    pub fn limit(&self) -> u32 {
        self.pagination.limit
    }

    pub fn offset(&self) -> u32 {
        self.pagination.offset.unwrap_or(0)
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
