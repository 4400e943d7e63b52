mod analysis;
mod correlation;
mod daily_sentiment;
mod market;
mod news;
mod prediction;

pub use analysis::AnalysisReport;
pub use correlation::{CorrelationDiagnostics, CorrelationRow, CorrelationSummary};
pub use daily_sentiment::DailySentiment;
pub use market::{MarketPoint, RawMarketPoint};
pub use news::{NewsArticle, RawArticle, Sentiment, NEUTRAL_BAND};
pub use prediction::{Direction, Prediction, Timeframe};
