use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;

use crate::models::{
    CorrelationRow, DailySentiment, MarketPoint, NewsArticle, RawMarketPoint, Sentiment,
};

/// Group scored articles by calendar day (UTC date truncation) and reduce
/// each day to its summary statistics.
///
/// Category counts come from each article's precomputed category, never
/// re-derived from the score. Days with zero articles are not materialized.
pub fn aggregate_daily(articles: &[NewsArticle]) -> BTreeMap<NaiveDate, DailySentiment> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&NewsArticle>> = BTreeMap::new();
    for article in articles {
        by_date
            .entry(article.published_at.date_naive())
            .or_default()
            .push(article);
    }

    by_date
        .into_iter()
        .map(|(date, day_articles)| {
            let mut positive_count = 0;
            let mut negative_count = 0;
            let mut neutral_count = 0;
            for article in &day_articles {
                match article.sentiment {
                    Sentiment::Positive => positive_count += 1,
                    Sentiment::Negative => negative_count += 1,
                    Sentiment::Neutral => neutral_count += 1,
                }
            }

            let article_count = day_articles.len() as u32;
            let average_score = day_articles
                .iter()
                .map(|a| a.sentiment_score)
                .sum::<f64>()
                / day_articles.len() as f64;

            (
                date,
                DailySentiment {
                    date,
                    article_count,
                    positive_count,
                    negative_count,
                    neutral_count,
                    average_score,
                },
            )
        })
        .collect()
}

/// Derive day-over-day movement from a raw close series, assumed ordered
/// oldest to newest.
///
/// `prior_close` is the close of the trading day before the window, when the
/// caller has it; without it the first point gets change 0. Records with a
/// missing or non-finite close, or an unparseable date, are skipped and
/// counted rather than failing the pass.
pub fn build_market_points(
    raw: &[RawMarketPoint],
    prior_close: Option<f64>,
) -> (Vec<MarketPoint>, usize) {
    let mut points = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    let mut prev_close = prior_close;

    for record in raw {
        let date = match NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!("skipping market point with invalid date {:?}", record.date);
                skipped += 1;
                continue;
            }
        };
        let close_value = match record.close {
            Some(close) if close.is_finite() => close,
            _ => {
                warn!("skipping market point {} with missing close", record.date);
                skipped += 1;
                continue;
            }
        };

        let (change, percent_change) = match prev_close {
            Some(prev) if prev != 0.0 => {
                let change = close_value - prev;
                (change, change / prev * 100.0)
            }
            Some(prev) => (close_value - prev, 0.0),
            None => (0.0, 0.0),
        };

        points.push(MarketPoint {
            date,
            close_value,
            change,
            percent_change,
        });
        prev_close = Some(close_value);
    }

    (points, skipped)
}

/// Join market days with the daily sentiment map by date.
///
/// The market series drives the row set; a trading day with no scored
/// articles joins as a zero-count, zero-score day so the correlation input
/// keeps one row per market day.
pub fn join_rows(
    market: &[MarketPoint],
    daily: &BTreeMap<NaiveDate, DailySentiment>,
) -> Vec<CorrelationRow> {
    market
        .iter()
        .map(|point| {
            let sentiment = daily.get(&point.date);
            CorrelationRow {
                date: point.date,
                close_value: point.close_value,
                change: point.change,
                percent_change: point.percent_change,
                average_score: sentiment.map_or(0.0, |s| s.average_score),
                article_count: sentiment.map_or(0, |s| s.article_count),
                positive_count: sentiment.map_or(0, |s| s.positive_count),
                negative_count: sentiment.map_or(0, |s| s.negative_count),
                neutral_count: sentiment.map_or(0, |s| s.neutral_count),
            }
        })
        .collect()
}
