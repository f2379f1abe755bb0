//! Candlestick data and series analytics

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OHLC price block of a candlestick.
///
/// The `*_dollars` mirrors are decimal strings produced upstream; they are
/// decoded verbatim and never recomputed from the float fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceBlock {
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub previous: Option<f64>,

    #[serde(default)]
    pub open_dollars: Option<Decimal>,
    #[serde(default)]
    pub high_dollars: Option<Decimal>,
    #[serde(default)]
    pub low_dollars: Option<Decimal>,
    #[serde(default)]
    pub close_dollars: Option<Decimal>,
    #[serde(default)]
    pub mean_dollars: Option<Decimal>,
    #[serde(default)]
    pub previous_dollars: Option<Decimal>,
}

/// Bid or ask summary for the "yes" side of a candlestick period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BidAskBlock {
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,

    #[serde(default)]
    pub open_dollars: Option<Decimal>,
    #[serde(default)]
    pub close_dollars: Option<Decimal>,
    #[serde(default)]
    pub high_dollars: Option<Decimal>,
    #[serde(default)]
    pub low_dollars: Option<Decimal>,
}

impl BidAskBlock {
    /// Open-to-close spread; 0 when either side is absent
    pub fn spread(&self) -> f64 {
        match (self.open, self.close) {
            (Some(open), Some(close)) => open - close,
            _ => 0.0,
        }
    }
}

/// One fixed-period candlestick for a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candlestick {
    /// Unix seconds at the end of the period
    #[serde(default)]
    pub end_period_ts: i64,

    #[serde(default)]
    pub open_interest: f64,

    #[serde(default)]
    pub volume: f64,

    #[serde(default)]
    pub price: Option<PriceBlock>,

    #[serde(default)]
    pub yes_ask: Option<BidAskBlock>,

    #[serde(default)]
    pub yes_bid: Option<BidAskBlock>,
}

impl Candlestick {
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end_period_ts, 0)
    }

    /// Close price of the period, when the price block carries one
    pub fn close_price(&self) -> Option<f64> {
        self.price.as_ref().and_then(|p| p.close)
    }

    /// High minus low; 0 when either is absent
    pub fn price_range(&self) -> f64 {
        match self.price.as_ref() {
            Some(PriceBlock {
                high: Some(high),
                low: Some(low),
                ..
            }) => high - low,
            _ => 0.0,
        }
    }

    /// Close minus open; 0 when either is absent
    pub fn price_change(&self) -> f64 {
        match self.price.as_ref() {
            Some(PriceBlock {
                open: Some(open),
                close: Some(close),
                ..
            }) => close - open,
            _ => 0.0,
        }
    }

    /// Percentage change over the period; 0 when the open is 0 or absent
    pub fn price_change_percent(&self) -> f64 {
        match self.price.as_ref().and_then(|p| p.open) {
            Some(open) if open != 0.0 => self.price_change() / open * 100.0,
            _ => 0.0,
        }
    }
}

/// Direction of a candlestick series, first close to last close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Flat,
    /// Fewer than two candlesticks, or a close price is missing
    Unknown,
}

/// Candlestick series for one token, with series-level analytics.
///
/// Candlesticks keep the server's order. Every metric is computed on access;
/// nothing is cached, since the inputs are immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandlestickResponse {
    pub candlesticks: Vec<Candlestick>,

    /// Token the series belongs to, from the response metadata
    pub token_id: Option<String>,
}

impl CandlestickResponse {
    pub fn new(candlesticks: Vec<Candlestick>, token_id: Option<String>) -> Self {
        Self {
            candlesticks,
            token_id,
        }
    }

    pub fn len(&self) -> usize {
        self.candlesticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candlesticks.is_empty()
    }

    pub fn first(&self) -> Option<&Candlestick> {
        self.candlesticks.first()
    }

    pub fn last(&self) -> Option<&Candlestick> {
        self.candlesticks.last()
    }

    pub fn total_volume(&self) -> f64 {
        self.candlesticks.iter().map(|c| c.volume).sum()
    }

    /// Mean volume per candlestick; 0 for an empty series
    pub fn average_volume(&self) -> f64 {
        if self.candlesticks.is_empty() {
            return 0.0;
        }
        self.total_volume() / self.candlesticks.len() as f64
    }

    pub fn volume_data(&self) -> Vec<f64> {
        self.candlesticks.iter().map(|c| c.volume).collect()
    }

    pub fn open_interest_data(&self) -> Vec<f64> {
        self.candlesticks.iter().map(|c| c.open_interest).collect()
    }

    /// Highest high minus lowest low across the series.
    ///
    /// Candlesticks without a price block are excluded rather than treated as
    /// zero; an empty series (or one with no priced candlesticks) yields 0.
    pub fn price_range(&self) -> f64 {
        let prices: Vec<f64> = self
            .candlesticks
            .iter()
            .filter_map(|c| c.price.as_ref())
            .flat_map(|p| [p.high, p.low])
            .flatten()
            .collect();

        if prices.is_empty() {
            return 0.0;
        }

        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        max - min
    }

    /// Direction from the first candlestick's close to the last's
    pub fn price_trend(&self) -> PriceTrend {
        if self.candlesticks.len() < 2 {
            return PriceTrend::Unknown;
        }

        let first = self.candlesticks.first().and_then(Candlestick::close_price);
        let last = self.candlesticks.last().and_then(Candlestick::close_price);

        match (first, last) {
            (Some(first), Some(last)) if last > first => PriceTrend::Up,
            (Some(first), Some(last)) if last < first => PriceTrend::Down,
            (Some(_), Some(_)) => PriceTrend::Flat,
            _ => PriceTrend::Unknown,
        }
    }

    /// (end time, close price) pairs, omitting candlesticks without a close
    pub fn time_series(&self) -> Vec<(DateTime<Utc>, f64)> {
        self.candlesticks
            .iter()
            .filter_map(|c| Some((c.end_time()?, c.close_price()?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    fn candle(close: f64) -> Candlestick {
        Candlestick {
            end_period_ts: 1757008800,
            open_interest: 0.0,
            volume: 0.0,
            price: Some(PriceBlock {
                close: Some(close),
                ..PriceBlock::default()
            }),
            yes_ask: None,
            yes_bid: None,
        }
    }

    #[test]
    fn decodes_full_candlestick() {
        let candle: Candlestick = serde_json::from_str(
            r#"{
                "end_period_ts": 1757008800,
                "open_interest": 1520.0,
                "volume": 312.5,
                "price": {
                    "open": 0.61, "high": 0.66, "low": 0.60, "close": 0.65,
                    "mean": 0.63, "previous": 0.59,
                    "open_dollars": "0.61", "close_dollars": "0.65"
                },
                "yes_ask": {"open": 0.62, "close": 0.66, "high": 0.67, "low": 0.61},
                "yes_bid": {"open": 0.60, "close": 0.64, "high": 0.65, "low": 0.59}
            }"#,
        )
        .unwrap();

        let price = candle.price.as_ref().unwrap();
        assert_eq!(price.close, Some(0.65));
        assert_eq!(price.close_dollars, Some(Decimal::new(65, 2)));
        assert!((candle.price_range() - 0.06).abs() < EPS);
        assert!((candle.price_change() - 0.04).abs() < EPS);
        assert!((candle.price_change_percent() - 0.04 / 0.61 * 100.0).abs() < EPS);
    }

    #[test]
    fn price_range_within_float_tolerance() {
        let candle = Candlestick {
            price: Some(PriceBlock {
                high: Some(0.0049),
                low: Some(0.0048),
                ..PriceBlock::default()
            }),
            ..candle(0.0)
        };
        assert!((candle.price_range() - 0.0001).abs() < EPS);
    }

    #[test]
    fn change_percent_is_zero_on_zero_or_absent_open() {
        let zero_open = Candlestick {
            price: Some(PriceBlock {
                open: Some(0.0),
                close: Some(0.5),
                ..PriceBlock::default()
            }),
            ..candle(0.0)
        };
        assert_eq!(zero_open.price_change_percent(), 0.0);

        let no_block = Candlestick {
            price: None,
            ..candle(0.0)
        };
        assert_eq!(no_block.price_change_percent(), 0.0);
        assert_eq!(no_block.price_range(), 0.0);
    }

    #[test]
    fn spread_within_float_tolerance() {
        let bid = BidAskBlock {
            open: Some(0.00489),
            close: Some(0.00482),
            ..BidAskBlock::default()
        };
        assert!((bid.spread() - 0.00007).abs() < EPS);

        let half = BidAskBlock {
            open: Some(0.5),
            ..BidAskBlock::default()
        };
        assert_eq!(half.spread(), 0.0);
    }

    #[test]
    fn trend_up_down_flat() {
        let up = CandlestickResponse::new(vec![candle(0.55), candle(0.65)], None);
        assert_eq!(up.price_trend(), PriceTrend::Up);

        let down = CandlestickResponse::new(vec![candle(0.65), candle(0.55)], None);
        assert_eq!(down.price_trend(), PriceTrend::Down);

        let flat = CandlestickResponse::new(vec![candle(0.55), candle(0.55)], None);
        assert_eq!(flat.price_trend(), PriceTrend::Flat);
    }

    #[test]
    fn trend_unknown_when_short_or_unpriced() {
        let single = CandlestickResponse::new(vec![candle(0.55)], None);
        assert_eq!(single.price_trend(), PriceTrend::Unknown);

        let mut unpriced = candle(0.0);
        unpriced.price = None;
        let series = CandlestickResponse::new(vec![candle(0.55), unpriced], None);
        assert_eq!(series.price_trend(), PriceTrend::Unknown);
    }

    #[test]
    fn series_price_range_skips_unpriced_candles() {
        let mut unpriced = candle(0.0);
        unpriced.price = None;

        let series = CandlestickResponse::new(
            vec![
                Candlestick {
                    price: Some(PriceBlock {
                        high: Some(0.70),
                        low: Some(0.60),
                        ..PriceBlock::default()
                    }),
                    ..candle(0.0)
                },
                unpriced,
                Candlestick {
                    price: Some(PriceBlock {
                        high: Some(0.68),
                        low: Some(0.55),
                        ..PriceBlock::default()
                    }),
                    ..candle(0.0)
                },
            ],
            None,
        );
        assert!((series.price_range() - 0.15).abs() < EPS);
    }

    #[test]
    fn volume_metrics() {
        let mut a = candle(0.5);
        a.volume = 100.0;
        let mut b = candle(0.6);
        b.volume = 50.0;

        let series = CandlestickResponse::new(vec![a, b], Some("1111".into()));
        assert_eq!(series.total_volume(), 150.0);
        assert_eq!(series.average_volume(), 75.0);
        assert_eq!(series.volume_data(), vec![100.0, 50.0]);
    }

    #[test]
    fn empty_series_metrics() {
        let series = CandlestickResponse::new(Vec::new(), None);
        assert_eq!(series.total_volume(), 0.0);
        assert_eq!(series.average_volume(), 0.0);
        assert_eq!(series.price_range(), 0.0);
        assert_eq!(series.price_trend(), PriceTrend::Unknown);
        assert!(series.time_series().is_empty());
    }

    #[test]
    fn time_series_omits_missing_closes() {
        let mut no_close = candle(0.0);
        no_close.price = Some(PriceBlock::default());

        let series = CandlestickResponse::new(vec![candle(0.55), no_close, candle(0.65)], None);
        let points = series.time_series();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].1, 0.55);
        assert_eq!(points[1].1, 0.65);
    }
}
