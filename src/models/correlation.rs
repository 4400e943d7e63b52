use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One date's joined market movement and sentiment summary.
///
/// Rows are built from the market series, so every market day in the window
/// appears; a day with no scored articles carries zero counts and score 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationRow {
    pub date: NaiveDate,
    pub close_value: f64,
    pub change: f64,
    pub percent_change: f64,
    pub average_score: f64,
    pub article_count: u32,
    pub positive_count: u32,
    pub negative_count: u32,
    pub neutral_count: u32,
}

/// Pearson correlations between the sentiment series and market changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorrelationSummary {
    /// Sentiment vs. same-day market change.
    pub same_day: f64,
    /// Sentiment vs. next-day market change (lag 1), the forecast driver.
    pub next_day: f64,
}

/// Secondary correlation views that never feed the forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationDiagnostics {
    /// Same correlations computed with zero-sentiment days removed first.
    pub nonzero: CorrelationSummary,
    /// Sentiment vs. the market close level (not its change).
    pub sentiment_to_level: f64,
}
