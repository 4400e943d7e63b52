use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Market point as delivered by the upstream market feed: one close per
/// trading day, ordered oldest to newest. A record with a missing or
/// non-finite close is skipped during derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarketPoint {
    pub date: String,
    #[serde(default)]
    pub close: Option<f64>,
}

/// One trading day with its derived day-over-day movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPoint {
    pub date: NaiveDate,
    pub close_value: f64,
    /// `close[t] - close[t-1]`; 0 for the first point of a window with no
    /// pre-window close.
    pub change: f64,
    /// `change / close[t-1] * 100`; 0 when the predecessor is 0 or absent.
    pub percent_change: f64,
}
