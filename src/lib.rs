//! Sentiment, correlation, and forecasting engine for market news dashboards.
//!
//! The crate turns two already-fetched snapshots (a news article feed and a
//! market index series) into daily sentiment summaries, Pearson correlations
//! (same-day and lag-1), and two confidence-weighted directional predictions.
//! One call to [`services::analysis_service::run_analysis`] performs the whole
//! pass synchronously; fetching, persistence, and rendering live in the
//! applications that consume this crate.

pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

pub use errors::AnalysisError;
pub use models::{
    AnalysisReport, CorrelationDiagnostics, CorrelationRow, CorrelationSummary, DailySentiment,
    Direction, MarketPoint, NewsArticle, Prediction, RawArticle, RawMarketPoint, Sentiment,
    Timeframe,
};
pub use services::analysis_service::run_analysis;
pub use services::sentiment_service::{SentimentLexicon, SentimentScorer};
pub use services::tagging_service::{TickerDirectory, TickerTagger};
