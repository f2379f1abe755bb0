//! Order and activity records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Side of an order or activity record.
///
/// The upstream set is open-ended (redemption and merge events show up in
/// activity feeds alongside plain trades), so unrecognized values decode to
/// `Other` instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum OrderSide {
    Buy,
    Sell,
    Redeem,
    Merge,
    Split,
    Other,
}

impl From<String> for OrderSide {
    fn from(side: String) -> Self {
        match side.as_str() {
            "BUY" => OrderSide::Buy,
            "SELL" => OrderSide::Sell,
            "REDEEM" => OrderSide::Redeem,
            "MERGE" => OrderSide::Merge,
            "SPLIT" => OrderSide::Split,
            _ => OrderSide::Other,
        }
    }
}

impl Default for OrderSide {
    fn default() -> Self {
        OrderSide::Other
    }
}

/// A single historical order or activity record.
///
/// Both the order-history and activity endpoints emit this shape; the activity
/// feed simply includes the non-trade sides (`REDEEM`, `MERGE`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Token the order traded
    #[serde(default)]
    pub token_id: String,

    #[serde(default)]
    pub side: OrderSide,

    #[serde(default)]
    pub market_slug: String,

    #[serde(default)]
    pub condition_id: String,

    /// Share amount in raw integer units
    #[serde(default)]
    pub shares: i64,

    /// Share amount scaled by the upstream decimals; taken from the wire,
    /// never re-derived from `shares`
    #[serde(default)]
    pub shares_normalized: f64,

    /// Execution price (0.0 - 1.0, represents probability)
    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub tx_hash: String,

    /// Market question title
    #[serde(default)]
    pub title: String,

    /// Unix timestamp in seconds
    #[serde(default)]
    pub timestamp: i64,

    #[serde(default)]
    pub order_hash: String,

    /// Wallet address of the user who placed the order
    #[serde(default)]
    pub user: String,
}

impl Order {
    pub fn is_buy(&self) -> bool {
        self.side == OrderSide::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.side == OrderSide::Sell
    }

    /// Order timestamp as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Response from the order-history endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistoryResponse {
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub pagination: Pagination,
}

impl OrderHistoryResponse {
    /// Total orders matching the query, across all pages
    pub fn total_orders(&self) -> u64 {
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
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn first(&self) -> Option<&Order> {
        self.orders.first()
    }

    pub fn last(&self) -> Option<&Order> {
        self.orders.last()
    }
}

/// Response from the activity endpoint.
///
/// Same record shape as order history, but the envelope's total field is
/// named `count` upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    #[serde(default)]
    pub activities: Vec<Order>,

    #[serde(default)]
    pub pagination: Pagination,
}

impl ActivityResponse {
    /// Total activity records matching the query, across all pages
    pub fn total_activities(&self) -> u64 {
        self.pagination.count.unwrap_or(0)
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
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn first(&self) -> Option<&Order> {
        self.activities.first()
    }

    pub fn last(&self) -> Option<&Order> {
        self.activities.last()
    }
}
