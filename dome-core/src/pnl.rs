//! Wallet profit-and-loss series and performance analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of a cumulative PnL series.
///
/// `pnl_to_date` is the running total in integer cents; the dollar value is
/// always derived from it, never stored, so comparisons stay exact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PnlPoint {
    /// Unix seconds at the end of the period
    #[serde(default)]
    pub timestamp: i64,

    /// Cumulative PnL in cents as of this period
    #[serde(default)]
    pub pnl_to_date: i64,
}

impl PnlPoint {
    pub fn pnl_dollars(&self) -> f64 {
        self.pnl_to_date as f64 / 100.0
    }

    /// Cumulative PnL is positive at this point
    pub fn is_profit(&self) -> bool {
        self.pnl_to_date > 0
    }

    /// Cumulative PnL is negative at this point
    pub fn is_loss(&self) -> bool {
        self.pnl_to_date < 0
    }

    pub fn is_break_even(&self) -> bool {
        self.pnl_to_date == 0
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Period-over-period change in cumulative PnL.
///
/// Carries the later point's timestamp; the dollar value is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChange {
    pub timestamp: i64,

    /// Change in cents from the previous point
    pub change: i64,
}

impl DailyChange {
    pub fn change_dollars(&self) -> f64 {
        self.change as f64 / 100.0
    }
}

/// Response from the wallet PnL endpoint, with performance analytics.
///
/// Points keep the server's order (ascending by timestamp). Every metric is
/// computed on access over the immutable series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletPnlResponse {
    #[serde(default)]
    pub granularity: String,

    #[serde(default)]
    pub start_time: Option<i64>,

    #[serde(default)]
    pub end_time: Option<i64>,

    #[serde(default)]
    pub wallet_address: String,

    #[serde(default)]
    pub pnl_over_time: Vec<PnlPoint>,
}

impl WalletPnlResponse {
    pub fn len(&self) -> usize {
        self.pnl_over_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pnl_over_time.is_empty()
    }

    pub fn first(&self) -> Option<&PnlPoint> {
        self.pnl_over_time.first()
    }

    pub fn last(&self) -> Option<&PnlPoint> {
        self.pnl_over_time.last()
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_time.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_time.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Latest cumulative PnL in cents; `None` for an empty series.
    ///
    /// Distinct from [`total_pnl`](Self::total_pnl), which defaults to 0 on an
    /// empty series. Callers that must tell "no data" apart from "flat" use
    /// this one.
    pub fn current_pnl(&self) -> Option<i64> {
        self.last().map(|p| p.pnl_to_date)
    }

    pub fn current_pnl_dollars(&self) -> Option<f64> {
        self.current_pnl().map(|cents| cents as f64 / 100.0)
    }

    /// Latest cumulative PnL in cents; 0 for an empty series
    pub fn total_pnl(&self) -> i64 {
        self.current_pnl().unwrap_or(0)
    }

    pub fn total_pnl_dollars(&self) -> f64 {
        self.total_pnl() as f64 / 100.0
    }

    /// Highest cumulative PnL in cents; 0 for an empty series
    pub fn peak_pnl(&self) -> i64 {
        self.pnl_over_time
            .iter()
            .map(|p| p.pnl_to_date)
            .max()
            .unwrap_or(0)
    }

    pub fn peak_pnl_dollars(&self) -> f64 {
        self.peak_pnl() as f64 / 100.0
    }

    /// Lowest cumulative PnL in cents; 0 for an empty series
    pub fn trough_pnl(&self) -> i64 {
        self.pnl_over_time
            .iter()
            .map(|p| p.pnl_to_date)
            .min()
            .unwrap_or(0)
    }

    pub fn trough_pnl_dollars(&self) -> f64 {
        self.trough_pnl() as f64 / 100.0
    }

    /// Peak-to-trough distance in cents.
    ///
    /// Defined as 0 whenever the peak never goes positive, so an all-loss
    /// series does not report a misleading drawdown.
    pub fn max_drawdown(&self) -> i64 {
        let peak = self.peak_pnl();
        if peak <= 0 {
            return 0;
        }
        (peak - self.trough_pnl()).abs()
    }

    pub fn max_drawdown_dollars(&self) -> f64 {
        self.max_drawdown() as f64 / 100.0
    }

    /// Drawdown as a percentage of the peak; 0 whenever the peak is <= 0
    pub fn max_drawdown_percent(&self) -> f64 {
        let peak = self.peak_pnl();
        if peak <= 0 {
            return 0.0;
        }
        self.max_drawdown() as f64 / peak as f64 * 100.0
    }

    /// Points whose cumulative PnL is positive.
    ///
    /// Day classification follows the cumulative value at each point, not the
    /// sign of that period's change.
    pub fn profit_days(&self) -> usize {
        self.pnl_over_time.iter().filter(|p| p.is_profit()).count()
    }

    /// Points whose cumulative PnL is negative
    pub fn loss_days(&self) -> usize {
        self.pnl_over_time.iter().filter(|p| p.is_loss()).count()
    }

    /// Points whose cumulative PnL is exactly zero
    pub fn break_even_days(&self) -> usize {
        self.pnl_over_time
            .iter()
            .filter(|p| p.is_break_even())
            .count()
    }

    /// Share of points in profit, as a percentage; 0 for an empty series
    pub fn win_rate(&self) -> f64 {
        if self.pnl_over_time.is_empty() {
            return 0.0;
        }
        self.profit_days() as f64 / self.pnl_over_time.len() as f64 * 100.0
    }

    /// (timestamp, cumulative cents) pairs for charting
    pub fn pnl_series(&self) -> Vec<(i64, i64)> {
        self.pnl_over_time
            .iter()
            .map(|p| (p.timestamp, p.pnl_to_date))
            .collect()
    }

    /// First differences of the series; empty when fewer than 2 points.
    ///
    /// Each entry carries the later point's timestamp.
    pub fn daily_changes(&self) -> Vec<DailyChange> {
        self.pnl_over_time
            .windows(2)
            .map(|pair| DailyChange {
                timestamp: pair[1].timestamp,
                change: pair[1].pnl_to_date - pair[0].pnl_to_date,
            })
            .collect()
    }

    /// The largest single-period gain; `None` when fewer than 2 points
    pub fn best_day(&self) -> Option<DailyChange> {
        self.daily_changes().into_iter().max_by_key(|c| c.change)
    }

    /// The largest single-period loss; `None` when fewer than 2 points
    pub fn worst_day(&self) -> Option<DailyChange> {
        self.daily_changes().into_iter().min_by_key(|c| c.change)
    }

    /// Mean period change in cents; 0 when fewer than 2 points
    pub fn average_daily_pnl(&self) -> f64 {
        let changes = self.daily_changes();
        if changes.is_empty() {
            return 0.0;
        }
        changes.iter().map(|c| c.change).sum::<i64>() as f64 / changes.len() as f64
    }

    pub fn average_daily_pnl_dollars(&self) -> f64 {
        self.average_daily_pnl() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[i64]) -> WalletPnlResponse {
        WalletPnlResponse {
            granularity: "day".to_string(),
            start_time: Some(1_756_000_000),
            end_time: Some(1_757_000_000),
            wallet_address: "0x7c3db723f1d4d8cb9c550095203b686cb11e5c6b".to_string(),
            pnl_over_time: values
                .iter()
                .enumerate()
                .map(|(i, &pnl)| PnlPoint {
                    timestamp: 1_756_000_000 + i as i64 * 86_400,
                    pnl_to_date: pnl,
                })
                .collect(),
        }
    }

    #[test]
    fn decodes_response() {
        let resp: WalletPnlResponse = serde_json::from_str(
            r#"{
                "granularity": "day",
                "start_time": 1756000000,
                "end_time": 1757000000,
                "wallet_address": "0x7c3db723f1d4d8cb9c550095203b686cb11e5c6b",
                "pnl_over_time": [
                    {"timestamp": 1756000000, "pnl_to_date": 1000},
                    {"timestamp": 1756086400, "pnl_to_date": 1500}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(resp.len(), 2);
        assert_eq!(resp.granularity, "day");
        assert_eq!(resp.total_pnl(), 1500);
        assert_eq!(resp.total_pnl_dollars(), 15.0);
    }

    #[test]
    fn performance_over_mixed_series() {
        let resp = series(&[1000, 1500, 1200, 800, 2000]);

        assert_eq!(resp.peak_pnl(), 2000);
        assert_eq!(resp.trough_pnl(), 800);
        assert_eq!(resp.max_drawdown(), 1200);
        assert_eq!(resp.max_drawdown_percent(), 60.0);
        assert_eq!(resp.current_pnl(), Some(2000));
        assert_eq!(resp.total_pnl(), 2000);

        let changes: Vec<i64> = resp.daily_changes().iter().map(|c| c.change).collect();
        assert_eq!(changes, vec![500, -300, -400, 1200]);

        assert_eq!(resp.best_day().unwrap().change, 1200);
        assert_eq!(resp.worst_day().unwrap().change, -400);
        assert_eq!(resp.average_daily_pnl(), 250.0);
        assert_eq!(resp.average_daily_pnl_dollars(), 2.5);

        // every cumulative value is positive
        assert_eq!(resp.profit_days(), 5);
        assert_eq!(resp.win_rate(), 100.0);
    }

    #[test]
    fn drawdown_is_zero_when_peak_never_positive() {
        let resp = series(&[-100, -50, -200]);
        assert_eq!(resp.peak_pnl(), -50);
        assert_eq!(resp.trough_pnl(), -200);
        assert_eq!(resp.max_drawdown(), 0);
        assert_eq!(resp.max_drawdown_percent(), 0.0);
        assert_eq!(resp.win_rate(), 0.0);
        assert_eq!(resp.loss_days(), 3);
    }

    #[test]
    fn empty_series_defaults() {
        let resp = series(&[]);
        assert_eq!(resp.peak_pnl(), 0);
        assert_eq!(resp.trough_pnl(), 0);
        assert_eq!(resp.max_drawdown(), 0);
        assert_eq!(resp.max_drawdown_percent(), 0.0);
        assert_eq!(resp.win_rate(), 0.0);
        assert_eq!(resp.current_pnl(), None);
        assert_eq!(resp.current_pnl_dollars(), None);
        assert_eq!(resp.total_pnl(), 0);
        assert!(resp.daily_changes().is_empty());
        assert_eq!(resp.best_day(), None);
        assert_eq!(resp.worst_day(), None);
        assert_eq!(resp.average_daily_pnl(), 0.0);
    }

    #[test]
    fn single_point_has_no_changes() {
        let resp = series(&[750]);
        assert!(resp.daily_changes().is_empty());
        assert_eq!(resp.best_day(), None);
        assert_eq!(resp.average_daily_pnl(), 0.0);
        assert_eq!(resp.current_pnl(), Some(750));
        assert_eq!(resp.win_rate(), 100.0);
    }

    #[test]
    fn day_classification_uses_cumulative_sign() {
        // deltas are [+200, -300, +100] but classification follows the
        // cumulative values [100, 300, 0, 100]
        let resp = series(&[100, 300, 0, 100]);
        assert_eq!(resp.profit_days(), 3);
        assert_eq!(resp.loss_days(), 0);
        assert_eq!(resp.break_even_days(), 1);
        assert_eq!(resp.win_rate(), 75.0);
    }

    #[test]
    fn daily_change_carries_later_timestamp() {
        let resp = series(&[100, 200]);
        let changes = resp.daily_changes();
        assert_eq!(changes[0].timestamp, resp.pnl_over_time[1].timestamp);
        assert_eq!(changes[0].change_dollars(), 1.0);
    }

    #[test]
    fn point_sign_predicates() {
        let profit = PnlPoint {
            timestamp: 0,
            pnl_to_date: 5,
        };
        let loss = PnlPoint {
            timestamp: 0,
            pnl_to_date: -5,
        };
        let flat = PnlPoint {
            timestamp: 0,
            pnl_to_date: 0,
        };
        assert!(profit.is_profit() && !profit.is_loss());
        assert!(loss.is_loss() && !loss.is_break_even());
        assert!(flat.is_break_even() && !flat.is_profit());
        assert_eq!(loss.pnl_dollars(), -0.05);
    }
}
