//! Typed request parameters for the Dome REST endpoints

use serde::{Deserialize, Serialize};

/// Candlestick bucket length.
///
/// The API expresses intervals in minutes and accepts exactly these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleInterval {
    /// 1 minute buckets
    OneMinute,
    /// 1 hour buckets
    OneHour,
    /// 1 day buckets
    OneDay,
}

impl CandleInterval {
    /// Wire value in minutes
    pub fn as_minutes(&self) -> u32 {
        match self {
            CandleInterval::OneMinute => 1,
            CandleInterval::OneHour => 60,
            CandleInterval::OneDay => 1440,
        }
    }

    /// Parse from the wire value in minutes
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            1 => Some(CandleInterval::OneMinute),
            60 => Some(CandleInterval::OneHour),
            1440 => Some(CandleInterval::OneDay),
            _ => None,
        }
    }
}

impl Default for CandleInterval {
    fn default() -> Self {
        CandleInterval::OneMinute
    }
}

/// Bucketing period for a wallet PnL series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
            Granularity::All => "all",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filters for the order-history endpoint.
///
/// All fields are optional; the outgoing query always carries `limit`
/// (default 100) and `offset` (default 0) unless a `pagination_key` cursor is
/// supplied, which replaces `offset` entirely.
#[derive(Debug, Clone, Default)]
pub struct OrderHistoryParams {
    pub market_slug: Option<String>,
    pub condition_id: Option<String>,
    pub token_id: Option<String>,
    /// Inclusive unix-seconds lower bound
    pub start_time: Option<i64>,
    /// Inclusive unix-seconds upper bound
    pub end_time: Option<i64>,
    /// Filter by user wallet address
    pub user: Option<String>,
    /// Page size, 1-1000 (default 100)
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Opaque cursor; mutually exclusive with `offset` in the outgoing query
    pub pagination_key: Option<String>,
}

/// Filters for the activity endpoint (the user address is a required
/// positional argument on the call itself)
#[derive(Debug, Clone, Default)]
pub struct ActivityParams {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub market_slug: Option<String>,
    pub condition_id: Option<String>,
    /// Page size, 1-1000 (default 100)
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub pagination_key: Option<String>,
}

/// Filters for the markets endpoint.
///
/// The array-valued filters emit one repeated query pair per element.
#[derive(Debug, Clone, Default)]
pub struct MarketsParams {
    pub market_slug: Vec<String>,
    pub event_slug: Vec<String>,
    pub condition_id: Vec<String>,
    pub tags: Vec<String>,
    /// Page size, 1-100
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub pagination_key: Option<String>,
}
