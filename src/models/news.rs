use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Dead zone around zero inside which a score is classified as neutral.
/// Every category derivation in the crate goes through [`Sentiment::from_score`]
/// so this constant stays single-sourced.
pub const NEUTRAL_BAND: f64 = 0.1;

/// Sentiment classification for news
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify a normalized score: > 0.1 positive, < -0.1 negative, else neutral.
    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_BAND {
            Sentiment::Positive
        } else if score < -NEUTRAL_BAND {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Article as delivered by the upstream news feed, before scoring.
///
/// `published_at` is kept as the provider's raw ISO 8601 string; records where
/// it is missing or unparseable are skipped during scoring rather than
/// failing the pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source: String,
    pub url: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// A scored news article. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// Normalized lexicon score in [-1, 1].
    pub sentiment_score: f64,
    pub sentiment: Sentiment,
    pub related_symbols: BTreeSet<String>,
}
