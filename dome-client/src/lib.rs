//! Client for the Dome prediction market data API
//!
//! This crate provides a typed client for the Dome REST API (orders, market
//! activity, market metadata, prices, candlesticks, wallet PnL) and a
//! WebSocket client for the live order event stream.
//!
//! Authentication uses a bearer API key; set `DOME_API_KEY` to use the
//! `from_env` constructors.

pub mod client;
pub mod params;
pub mod websocket;

mod validate;

pub use client::DomeClient;
pub use params::{
    ActivityParams, CandleInterval, Granularity, MarketsParams, OrderHistoryParams,
};
pub use websocket::{DomeWebSocket, SubscribeHandle, SubscribeRequest};

pub use dome_core::{
    ActivityResponse, BidAskBlock, Candlestick, CandlestickResponse, DailyChange, DomeError,
    DomeResult, Market, MarketPrice, MarketStatus, MarketsResponse, Order, OrderHistoryResponse,
    OrderSide, Outcome, Pagination, PnlPoint, PriceBlock, PriceTrend, WalletPnlResponse,
};
