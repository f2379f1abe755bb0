//! Core types for the Dome prediction market data API
//!
//! This crate defines the domain entities returned by the Dome API together
//! with the analytics derived from them (PnL performance, candlestick series
//! metrics), and the shared error type. All types are plain immutable values;
//! network access lives in `dome-client`.

pub mod candle;
pub mod error;
pub mod market;
pub mod order;
pub mod pagination;
pub mod pnl;
pub mod price;

pub use candle::{BidAskBlock, Candlestick, CandlestickResponse, PriceBlock, PriceTrend};
pub use error::{DomeError, DomeResult};
pub use market::{Market, MarketStatus, MarketsResponse, Outcome};
pub use order::{ActivityResponse, Order, OrderHistoryResponse, OrderSide};
pub use pagination::Pagination;
pub use pnl::{DailyChange, PnlPoint, WalletPnlResponse};
pub use price::MarketPrice;
