use regex::Regex;

use crate::errors::AnalysisError;
use crate::models::Sentiment;

/// Market-positive terms and their signal strengths.
const POSITIVE_TERMS: &[(&str, f64)] = &[
    // Strong signals
    ("soar", 1.5),
    ("soared", 1.5),
    ("soaring", 1.5),
    ("surge", 1.5),
    ("surged", 1.5),
    ("breakthrough", 1.5),
    ("boom", 1.5),
    ("bullish", 1.5),
    // Medium signals
    ("gain", 1.0),
    ("gains", 1.0),
    ("rise", 1.0),
    ("rises", 1.0),
    ("rising", 1.0),
    ("rose", 1.0),
    ("jump", 1.0),
    ("jumps", 1.0),
    ("jumped", 1.0),
    ("growth", 1.0),
    ("grow", 1.0),
    ("grew", 1.0),
    ("increase", 1.0),
    ("increased", 1.0),
    ("higher", 1.0),
    ("strong", 1.0),
    ("strength", 1.0),
    ("positive", 1.0),
    ("profit", 1.0),
    ("profits", 1.0),
    ("boost", 1.0),
    ("boosted", 1.0),
    // Mild signals
    ("success", 0.5),
    ("successful", 0.5),
    ("opportunity", 0.5),
    ("opportunities", 0.5),
    ("optimistic", 0.5),
    ("optimism", 0.5),
    ("recovery", 0.5),
    ("recover", 0.5),
    ("recovered", 0.5),
    ("upbeat", 0.5),
    ("confident", 0.5),
    ("confidence", 0.5),
];

/// Market-negative terms and their signal strengths.
const NEGATIVE_TERMS: &[(&str, f64)] = &[
    // Strong signals
    ("crash", 1.5),
    ("crisis", 1.5),
    ("bearish", 1.5),
    ("recession", 1.5),
    ("collapse", 1.5),
    ("plummet", 1.5),
    ("plunged", 1.5),
    // Medium signals
    ("drop", 1.0),
    ("drops", 1.0),
    ("dropped", 1.0),
    ("fall", 1.0),
    ("falls", 1.0),
    ("fell", 1.0),
    ("fallen", 1.0),
    ("decline", 1.0),
    ("declines", 1.0),
    ("declined", 1.0),
    ("decrease", 1.0),
    ("decreased", 1.0),
    ("lower", 1.0),
    ("slump", 1.0),
    ("slumped", 1.0),
    ("loss", 1.0),
    ("losses", 1.0),
    ("weak", 1.0),
    ("weakness", 1.0),
    ("negative", 1.0),
    ("fail", 1.0),
    ("fails", 1.0),
    ("failed", 1.0),
    ("failure", 1.0),
    // Mild signals
    ("fear", 0.5),
    ("fears", 0.5),
    ("concerned", 0.5),
    ("concern", 0.5),
    ("concerns", 0.5),
    ("warning", 0.5),
    ("warn", 0.5),
    ("warns", 0.5),
    ("warned", 0.5),
    ("worry", 0.5),
    ("worried", 0.5),
    ("worries", 0.5),
    ("risk", 0.5),
    ("risks", 0.5),
    ("risky", 0.5),
    ("volatile", 0.5),
    ("volatility", 0.5),
    ("downturn", 0.5),
    ("trouble", 0.5),
    ("troubled", 0.5),
    ("slowdown", 0.5),
];

/// Word-to-weight tables used for scoring. Read-only once constructed;
/// tests substitute smaller tables through [`SentimentScorer::new`].
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    pub positive: Vec<(String, f64)>,
    pub negative: Vec<(String, f64)>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        let to_owned = |terms: &[(&str, f64)]| {
            terms
                .iter()
                .map(|(term, weight)| (term.to_string(), *weight))
                .collect()
        };
        Self {
            positive: to_owned(POSITIVE_TERMS),
            negative: to_owned(NEGATIVE_TERMS),
        }
    }
}

/// Result of scoring one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentReading {
    pub score: f64,
    pub category: Sentiment,
}

impl SentimentReading {
    fn neutral() -> Self {
        Self {
            score: 0.0,
            category: Sentiment::Neutral,
        }
    }
}

/// Lexicon-based sentiment scorer.
///
/// Matching is whole-word and case-insensitive; every occurrence of a term
/// contributes its weight, so the per-term patterns are compiled once here.
pub struct SentimentScorer {
    positive: Vec<(Regex, f64)>,
    negative: Vec<(Regex, f64)>,
}

impl SentimentScorer {
    pub fn new(lexicon: &SentimentLexicon) -> Result<Self, AnalysisError> {
        Ok(Self {
            positive: compile_terms(&lexicon.positive)?,
            negative: compile_terms(&lexicon.negative)?,
        })
    }

    pub fn with_default_lexicon() -> Result<Self, AnalysisError> {
        Self::new(&SentimentLexicon::default())
    }

    /// Score free text to a value in [-1, 1] plus its category.
    ///
    /// Empty text scores 0 / neutral. The raw signed total of matched weights
    /// is normalized by `max(word_count / 20, 1)` so that long texts need
    /// proportionally more signal, then clamped.
    pub fn score(&self, text: &str) -> SentimentReading {
        if text.trim().is_empty() {
            return SentimentReading::neutral();
        }

        let positive_total = weighted_matches(&self.positive, text);
        let negative_total = weighted_matches(&self.negative, text);

        let word_count = text.split_whitespace().count();
        let normalizer = (word_count as f64 / 20.0).max(1.0);

        let score = ((positive_total - negative_total) / normalizer).clamp(-1.0, 1.0);

        SentimentReading {
            score,
            category: Sentiment::from_score(score),
        }
    }
}

fn compile_terms(terms: &[(String, f64)]) -> Result<Vec<(Regex, f64)>, AnalysisError> {
    terms
        .iter()
        .map(|(term, weight)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            Ok((Regex::new(&pattern)?, *weight))
        })
        .collect()
}

fn weighted_matches(terms: &[(Regex, f64)], text: &str) -> f64 {
    terms
        .iter()
        .map(|(pattern, weight)| pattern.find_iter(text).count() as f64 * weight)
        .sum()
}
