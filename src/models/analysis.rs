use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::correlation::{CorrelationDiagnostics, CorrelationRow, CorrelationSummary};
use super::daily_sentiment::DailySentiment;
use super::news::NewsArticle;
use super::prediction::Prediction;

/// Complete output of one analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub articles: Vec<NewsArticle>,
    pub daily_sentiment: BTreeMap<NaiveDate, DailySentiment>,
    pub rows: Vec<CorrelationRow>,
    pub correlations: CorrelationSummary,
    pub diagnostics: CorrelationDiagnostics,
    pub predictions: Vec<Prediction>,
    pub articles_analyzed: usize,
    pub articles_skipped: usize,
    pub market_points_skipped: usize,
    pub generated_at: DateTime<Utc>,
}
