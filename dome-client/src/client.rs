//! Dome REST API client
//!
//! Every operation follows the same shape: validate arguments, build the
//! query, issue exactly one GET, map the status to an error, decode the body.
//! Nothing is retried and nothing is cached.

use crate::params::{
    ActivityParams, CandleInterval, Granularity, MarketsParams, OrderHistoryParams,
};
use crate::validate;
use dome_core::{
    ActivityResponse, Candlestick, CandlestickResponse, DomeError, DomeResult, MarketPrice,
    MarketsResponse, OrderHistoryResponse, WalletPnlResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL for the Dome API
const DOME_API_BASE: &str = "https://api.domeapi.io/v1";

/// Venue path segment; the API namespaces every endpoint by venue
const DEFAULT_VENUE: &str = "polymarket";

/// Default page size for the order-history and activity endpoints
const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Largest page size accepted by the order-history and activity endpoints
const MAX_PAGE_LIMIT: u32 = 1000;

/// Largest page size accepted by the markets endpoint
const MAX_MARKETS_LIMIT: u32 = 100;

/// Dome API client
#[derive(Clone)]
pub struct DomeClient {
    client: Client,
    base_url: String,
    venue: String,
    api_key: Option<String>,
}

impl DomeClient {
    /// Create a client that authenticates with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::build(Some(api_key.into()))
    }

    /// Create a client without credentials.
    ///
    /// The API rejects unauthenticated requests to keyed endpoints with 401;
    /// that error is surfaced as [`DomeError::Unauthorized`].
    pub fn anonymous() -> Self {
        Self::build(None)
    }

    /// Create a client from the `DOME_API_KEY` environment variable, falling
    /// back to an unauthenticated client when it is unset
    pub fn from_env() -> Self {
        Self::build(std::env::var("DOME_API_KEY").ok().filter(|k| !k.trim().is_empty()))
    }

    fn build(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("dome-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: DOME_API_BASE.to_string(),
            venue: DEFAULT_VENUE.to_string(),
            api_key,
        }
    }

    /// Check if the client has an API key configured
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch historical orders, optionally filtered
    pub async fn get_order_history(
        &self,
        params: &OrderHistoryParams,
    ) -> DomeResult<OrderHistoryResponse> {
        validate::limit_in_range(params.limit, MAX_PAGE_LIMIT)?;

        let url = format!("{}/{}/orders", self.base_url, self.venue);
        self.get_json(&url, order_history_query(params)).await
    }

    /// Fetch activity records for one user wallet
    pub async fn get_activity(
        &self,
        user: &str,
        params: &ActivityParams,
    ) -> DomeResult<ActivityResponse> {
        validate::wallet_address(user)?;
        validate::limit_in_range(params.limit, MAX_PAGE_LIMIT)?;
        validate::optional_time_range(params.start_time, params.end_time)?;

        let url = format!("{}/{}/activity", self.base_url, self.venue);
        self.get_json(&url, activity_query(user, params)).await
    }

    /// Fetch market metadata, optionally filtered by slug, event, condition
    /// id, or tags
    pub async fn get_markets(&self, params: &MarketsParams) -> DomeResult<MarketsResponse> {
        validate::limit_in_range(params.limit, MAX_MARKETS_LIMIT)?;

        let url = format!("{}/{}/markets", self.base_url, self.venue);
        self.get_json(&url, markets_query(params)).await
    }

    /// Fetch the price of a token, now or at a past instant
    pub async fn get_market_price(
        &self,
        token_id: &str,
        at_time: Option<i64>,
    ) -> DomeResult<MarketPrice> {
        validate::non_blank(token_id, "Token ID")?;
        if let Some(at_time) = at_time {
            validate::positive_timestamp(at_time, "at_time")?;
        }

        let url = format!("{}/{}/market-price/{}", self.base_url, self.venue, token_id);
        let mut query = Vec::new();
        if let Some(at_time) = at_time {
            query.push(("at_time".to_string(), at_time.to_string()));
        }
        self.get_json(&url, query).await
    }

    /// Fetch candlesticks for a market over a time range
    pub async fn get_candlesticks(
        &self,
        condition_id: &str,
        start_time: i64,
        end_time: i64,
        interval: CandleInterval,
    ) -> DomeResult<CandlestickResponse> {
        validate::non_blank(condition_id, "Condition ID")?;
        validate::time_range(start_time, end_time)?;

        let url = format!(
            "{}/{}/candlesticks/{}",
            self.base_url, self.venue, condition_id
        );
        let query = vec![
            ("start_time".to_string(), start_time.to_string()),
            ("end_time".to_string(), end_time.to_string()),
            ("interval".to_string(), interval.as_minutes().to_string()),
        ];

        let payload: CandlesticksPayload = self.get_json(&url, query).await?;
        Ok(flatten_candlesticks(payload))
    }

    /// Fetch the cumulative PnL series for a wallet
    pub async fn get_wallet_pnl(
        &self,
        wallet_address: &str,
        granularity: Granularity,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> DomeResult<WalletPnlResponse> {
        validate::wallet_address(wallet_address)?;
        validate::optional_time_range(start_time, end_time)?;

        let url = format!(
            "{}/{}/wallet/pnl/{}",
            self.base_url, self.venue, wallet_address
        );
        let mut query = vec![("granularity".to_string(), granularity.as_str().to_string())];
        if let Some(start) = start_time {
            query.push(("start_time".to_string(), start.to_string()));
        }
        if let Some(end) = end_time {
            query.push(("end_time".to_string(), end.to_string()));
        }
        self.get_json(&url, query).await
    }

    /// Issue one GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: Vec<(String, String)>,
    ) -> DomeResult<T> {
        debug!("Fetching {}", url);

        let mut request = self.client.get(url).header("Accept", "application/json");
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomeError::network(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| DomeError::parse(format!("Failed to decode response body: {e}")));
        }

        match status.as_u16() {
            401 => Err(DomeError::Unauthorized),
            429 => Err(DomeError::RateLimited),
            400 => Err(DomeError::bad_request(
                response.text().await.unwrap_or_default(),
            )),
            code => Err(DomeError::http(
                code,
                status.canonical_reason().unwrap_or("unknown"),
            )),
        }
    }
}

impl std::fmt::Debug for DomeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomeClient")
            .field("base_url", &self.base_url)
            .field("venue", &self.venue)
            .finish()
    }
}

// ============================================================================
// Query builders
// ============================================================================
//
// Pure functions so the pagination rules are testable without a transport.
// When a pagination_key cursor is supplied it replaces offset in the outgoing
// query entirely, even if an offset was also set.

fn order_history_query(params: &OrderHistoryParams) -> Vec<(String, String)> {
    let mut query = Vec::new();

    push_opt(&mut query, "market_slug", params.market_slug.as_deref());
    push_opt(&mut query, "condition_id", params.condition_id.as_deref());
    push_opt(&mut query, "token_id", params.token_id.as_deref());
    push_opt_ts(&mut query, "start_time", params.start_time);
    push_opt_ts(&mut query, "end_time", params.end_time);
    push_opt(&mut query, "user", params.user.as_deref());

    query.push((
        "limit".to_string(),
        params.limit.unwrap_or(DEFAULT_PAGE_LIMIT).to_string(),
    ));
    match &params.pagination_key {
        Some(key) => query.push(("pagination_key".to_string(), key.clone())),
        None => query.push(("offset".to_string(), params.offset.unwrap_or(0).to_string())),
    }

    query
}

fn activity_query(user: &str, params: &ActivityParams) -> Vec<(String, String)> {
    let mut query = vec![("user".to_string(), user.to_string())];

    push_opt_ts(&mut query, "start_time", params.start_time);
    push_opt_ts(&mut query, "end_time", params.end_time);
    push_opt(&mut query, "market_slug", params.market_slug.as_deref());
    push_opt(&mut query, "condition_id", params.condition_id.as_deref());

    query.push((
        "limit".to_string(),
        params.limit.unwrap_or(DEFAULT_PAGE_LIMIT).to_string(),
    ));
    match &params.pagination_key {
        Some(key) => query.push(("pagination_key".to_string(), key.clone())),
        None => query.push(("offset".to_string(), params.offset.unwrap_or(0).to_string())),
    }

    query
}

fn markets_query(params: &MarketsParams) -> Vec<(String, String)> {
    let mut query = Vec::new();

    for slug in &params.market_slug {
        query.push(("market_slug".to_string(), slug.clone()));
    }
    for slug in &params.event_slug {
        query.push(("event_slug".to_string(), slug.clone()));
    }
    for id in &params.condition_id {
        query.push(("condition_id".to_string(), id.clone()));
    }
    for tag in &params.tags {
        query.push(("tags".to_string(), tag.clone()));
    }

    if let Some(limit) = params.limit {
        query.push(("limit".to_string(), limit.to_string()));
    }
    match &params.pagination_key {
        Some(key) => query.push(("pagination_key".to_string(), key.clone())),
        None => {
            if let Some(offset) = params.offset {
                query.push(("offset".to_string(), offset.to_string()));
            }
        }
    }

    query
}

fn push_opt(query: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}

fn push_opt_ts(query: &mut Vec<(String, String)>, key: &str, value: Option<i64>) {
    if let Some(value) = value {
        query.push((key.to_string(), value.to_string()));
    }
}

// ============================================================================
// Candlestick payload decoding
// ============================================================================

/// Raw candlesticks payload: an array of `[records, token_metadata]` tuples
#[derive(Debug, Deserialize)]
struct CandlesticksPayload {
    #[serde(default)]
    candlesticks: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TokenMetadata {
    #[serde(default)]
    token_id: Option<String>,
}

/// Flatten the per-tuple record arrays into one ordered series.
///
/// The token id comes from the first metadata object that carries one; later
/// tuples' metadata is ignored, since a request is always scoped to a single
/// token. Tuples that are not arrays of length >= 2 and record batches that
/// fail to decode are skipped, never fatal.
fn flatten_candlesticks(payload: CandlesticksPayload) -> CandlestickResponse {
    let mut candlesticks = Vec::new();
    let mut token_id: Option<String> = None;

    for tuple in payload.candlesticks {
        let Some(parts) = tuple.as_array() else {
            continue;
        };
        if parts.len() < 2 {
            continue;
        }

        if token_id.is_none() {
            if let Ok(meta) = serde_json::from_value::<TokenMetadata>(parts[1].clone()) {
                token_id = meta.token_id;
            }
        }

        match serde_json::from_value::<Vec<Candlestick>>(parts[0].clone()) {
            Ok(batch) => candlesticks.extend(batch),
            Err(e) => warn!("Skipping undecodable candlestick batch: {}", e),
        }
    }

    CandlestickResponse::new(candlesticks, token_id)
}
