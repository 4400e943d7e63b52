use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{AnalysisReport, CorrelationDiagnostics, NewsArticle, RawArticle, RawMarketPoint};
use crate::services::aggregation_service::{aggregate_daily, build_market_points, join_rows};
use crate::services::correlation_service::{correlate, correlate_nonzero, level_correlation};
use crate::services::forecasting_service::generate_predictions;
use crate::services::sentiment_service::SentimentScorer;
use crate::services::tagging_service::TickerTagger;

/// Placeholder carried on articles whose feed record had no description.
const NO_DESCRIPTION: &str = "No description available";

/// Score and tag a raw article feed.
///
/// Scoring and tagging both run over the title and description concatenated.
/// Records with a missing or unparseable `published_at` are skipped, and
/// duplicate titles keep only the first occurrence so one syndicated story
/// cannot count twice. Returns the scored articles and the skip count.
pub fn score_articles(
    scorer: &SentimentScorer,
    tagger: &TickerTagger,
    raw: &[RawArticle],
) -> (Vec<NewsArticle>, usize) {
    let mut articles = Vec::with_capacity(raw.len());
    let mut seen_titles: HashSet<&str> = HashSet::new();
    let mut skipped = 0;

    for record in raw {
        let published_at = match record
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        {
            Some(parsed) => parsed.with_timezone(&Utc),
            None => {
                warn!("skipping article without a usable publish date: {:?}", record.title);
                skipped += 1;
                continue;
            }
        };

        if !seen_titles.insert(record.title.as_str()) {
            skipped += 1;
            continue;
        }

        let text = format!("{} {}", record.title, record.description.as_deref().unwrap_or(""));
        let reading = scorer.score(&text);
        let related_symbols = tagger.tag(&text);

        articles.push(NewsArticle {
            id: articles.len() as u32 + 1,
            title: record.title.clone(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            source: record.source.clone(),
            url: record.url.clone(),
            published_at,
            sentiment_score: reading.score,
            sentiment: reading.category,
            related_symbols,
        });
    }

    (articles, skipped)
}

/// Keep only articles published at or after `cutoff`.
///
/// The cutoff is a parameter rather than a clock read so the pass stays
/// reproducible; the caller decides what "recent" means.
pub fn filter_recent(raw: &[RawArticle], cutoff: DateTime<Utc>) -> Vec<RawArticle> {
    raw.iter()
        .filter(|record| {
            record
                .published_at
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|parsed| parsed.with_timezone(&Utc) >= cutoff)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Run one full analysis pass: score and tag the feed, aggregate per day,
/// join against the market series, correlate, and forecast.
///
/// The pass is synchronous, side-effect-free, and total: malformed records
/// are skipped and counted, empty inputs produce an empty-but-valid report.
pub fn run_analysis(
    scorer: &SentimentScorer,
    tagger: &TickerTagger,
    raw_articles: &[RawArticle],
    raw_market: &[RawMarketPoint],
) -> AnalysisReport {
    info!(
        "starting analysis pass over {} articles and {} market points",
        raw_articles.len(),
        raw_market.len()
    );

    let (articles, articles_skipped) = score_articles(scorer, tagger, raw_articles);
    let daily_sentiment = aggregate_daily(&articles);

    let (market_points, market_points_skipped) = build_market_points(raw_market, None);
    let rows = join_rows(&market_points, &daily_sentiment);

    let correlations = correlate(&rows);
    let diagnostics = CorrelationDiagnostics {
        nonzero: correlate_nonzero(&rows),
        sentiment_to_level: level_correlation(&rows),
    };
    let predictions = generate_predictions(&rows, &correlations);

    info!(
        "analysis pass complete: {} articles over {} days, same-day r={:.2}, next-day r={:.2}, next-day call {}",
        articles.len(),
        daily_sentiment.len(),
        correlations.same_day,
        correlations.next_day,
        predictions[0].direction
    );

    AnalysisReport {
        id: Uuid::new_v4(),
        articles_analyzed: articles.len(),
        articles,
        daily_sentiment,
        rows,
        correlations,
        diagnostics,
        predictions,
        articles_skipped,
        market_points_skipped,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentimentScorer {
        SentimentScorer::with_default_lexicon().unwrap()
    }

    fn tagger() -> TickerTagger {
        TickerTagger::with_default_directory()
    }

    fn raw_article(title: &str, description: &str, published_at: Option<&str>) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            description: Some(description.to_string()),
            source: "wire".to_string(),
            url: "https://example.com/story".to_string(),
            published_at: published_at.map(str::to_string),
        }
    }

    #[test]
    fn test_score_articles_skips_missing_publish_date() {
        let raw = vec![
            raw_article("Markets surge", "strong gains", Some("2026-03-02T09:00:00Z")),
            raw_article("No date here", "text", None),
            raw_article("Bad date", "text", Some("yesterday")),
        ];

        let (articles, skipped) = score_articles(&scorer(), &tagger(), &raw);
        assert_eq!(articles.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_score_articles_deduplicates_titles() {
        let raw = vec![
            raw_article("Same story", "first copy", Some("2026-03-02T09:00:00Z")),
            raw_article("Same story", "syndicated copy", Some("2026-03-02T11:00:00Z")),
        ];

        let (articles, skipped) = score_articles(&scorer(), &tagger(), &raw);
        assert_eq!(articles.len(), 1);
        assert_eq!(skipped, 1);
        assert_eq!(articles[0].description, "first copy");
    }

    #[test]
    fn test_score_articles_assigns_sequential_ids() {
        let raw = vec![
            raw_article("First", "a", Some("2026-03-02T09:00:00Z")),
            raw_article("Second", "b", Some("2026-03-02T10:00:00Z")),
        ];
        let (articles, _) = score_articles(&scorer(), &tagger(), &raw);
        assert_eq!(articles[0].id, 1);
        assert_eq!(articles[1].id, 2);
    }

    #[test]
    fn test_score_articles_missing_description_placeholder() {
        let raw = vec![RawArticle {
            title: "Apple profits surge".to_string(),
            description: None,
            source: "wire".to_string(),
            url: "https://example.com".to_string(),
            published_at: Some("2026-03-02T09:00:00Z".to_string()),
        }];

        let (articles, _) = score_articles(&scorer(), &tagger(), &raw);
        assert_eq!(articles[0].description, NO_DESCRIPTION);
        // Scoring still sees the title
        assert!(articles[0].sentiment_score > 0.0);
        assert!(articles[0].related_symbols.contains("AAPL"));
    }

    #[test]
    fn test_filter_recent_drops_old_and_undated() {
        let raw = vec![
            raw_article("Old", "a", Some("2026-02-01T09:00:00Z")),
            raw_article("New", "b", Some("2026-03-02T09:00:00Z")),
            raw_article("Undated", "c", None),
        ];
        let cutoff = DateTime::parse_from_rfc3339("2026-03-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let recent = filter_recent(&raw, cutoff);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "New");
    }

    #[test]
    fn test_run_analysis_on_empty_inputs() {
        let report = run_analysis(&scorer(), &tagger(), &[], &[]);
        assert!(report.articles.is_empty());
        assert!(report.daily_sentiment.is_empty());
        assert!(report.rows.is_empty());
        assert_eq!(report.correlations.same_day, 0.0);
        assert_eq!(report.correlations.next_day, 0.0);
        assert_eq!(report.predictions.len(), 2);
        assert_eq!(report.articles_analyzed, 0);
    }
}
