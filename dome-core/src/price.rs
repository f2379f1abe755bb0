//! Market price snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds after which a priced snapshot is no longer "current"
const CURRENT_WINDOW_SECS: i64 = 300;

/// Price of one token at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrice {
    /// Price (0.0 - 1.0, represents probability)
    #[serde(default)]
    pub price: f64,

    /// Unix seconds the price was observed; absent for some snapshots
    #[serde(default)]
    pub at_time: Option<i64>,
}

impl MarketPrice {
    /// Whether the snapshot is at most five minutes old.
    ///
    /// A snapshot without `at_time` is never current.
    pub fn is_current(&self) -> bool {
        match self.at_time {
            Some(at_time) => Utc::now().timestamp() - at_time <= CURRENT_WINDOW_SECS,
            None => false,
        }
    }

    pub fn is_historical(&self) -> bool {
        !self.is_current()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.at_time.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_price_is_current() {
        let price = MarketPrice {
            price: 0.65,
            at_time: Some(Utc::now().timestamp() - 10),
        };
        assert!(price.is_current());
        assert!(!price.is_historical());
    }

    #[test]
    fn stale_price_is_historical() {
        let price = MarketPrice {
            price: 0.65,
            at_time: Some(Utc::now().timestamp() - 3600),
        };
        assert!(!price.is_current());
        assert!(price.is_historical());
    }

    #[test]
    fn missing_at_time_is_never_current() {
        let price: MarketPrice = serde_json::from_str(r#"{"price": 0.5}"#).unwrap();
        assert_eq!(price.at_time, None);
        assert!(!price.is_current());
        assert_eq!(price.timestamp(), None);
    }

    #[test]
    fn decodes_snapshot() {
        let price: MarketPrice =
            serde_json::from_str(r#"{"price": 0.42, "at_time": 1757008834}"#).unwrap();
        assert_eq!(price.price, 0.42);
        assert_eq!(price.timestamp().unwrap().timestamp(), 1757008834);
    }
}
