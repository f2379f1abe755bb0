//! Pagination envelope shared by the collection endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to collection responses.
///
/// The API is inconsistent about the "how many in total" field: the orders and
/// markets endpoints call it `total`, the activity endpoint calls it `count`.
/// Both are kept as-is here; the response types expose the right one.
///
/// `offset` is absent when the response was produced by cursor-based
/// pagination, in which case `pagination_key` carries the cursor for the next
/// page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size the server applied
    #[serde(default)]
    pub limit: u32,

    /// Numeric offset of this page (absent under cursor pagination)
    #[serde(default)]
    pub offset: Option<u32>,

    /// Total number of records (orders/markets endpoints)
    #[serde(default)]
    pub total: Option<u64>,

    /// Total number of records (activity endpoint)
    #[serde(default)]
    pub count: Option<u64>,

    /// Whether more pages are available
    #[serde(default)]
    pub has_more: bool,

    /// Opaque cursor for the next page, when the server issues one
    #[serde(default)]
    pub pagination_key: Option<String>,
}
