use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentiment summary for one calendar day.
///
/// Only days with at least one article are materialized, so `article_count`
/// is always >= 1 and equals the sum of the three category counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub article_count: u32,
    pub positive_count: u32,
    pub negative_count: u32,
    pub neutral_count: u32,
    /// Arithmetic mean of the day's article scores, in [-1, 1].
    pub average_score: f64,
}
