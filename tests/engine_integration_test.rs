/// End-to-end tests for the analysis pass: raw feeds in, report out.
///
/// Each scenario drives the public surface only (score, aggregate,
/// correlate, forecast) the way an embedding application would.
use chrono::NaiveDate;

use marketmood::services::correlation_service::correlate;
use marketmood::services::forecasting_service::generate_predictions;
use marketmood::{
    run_analysis, Direction, RawArticle, RawMarketPoint, SentimentScorer, TickerTagger,
};

fn scorer() -> SentimentScorer {
    SentimentScorer::with_default_lexicon().unwrap()
}

fn tagger() -> TickerTagger {
    TickerTagger::with_default_directory()
}

fn article(title: &str, description: &str, published_at: &str) -> RawArticle {
    RawArticle {
        title: title.to_string(),
        description: Some(description.to_string()),
        source: "newswire".to_string(),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        published_at: Some(published_at.to_string()),
    }
}

fn market_point(date: &str, close: f64) -> RawMarketPoint {
    RawMarketPoint {
        date: date.to_string(),
        close: Some(close),
    }
}

// ---------------------------------------------------------------------------
// Scenario: one strongly positive day
// ---------------------------------------------------------------------------

#[test]
fn test_single_surge_day_scores_positive() {
    let raw = vec![
        article(
            "Tech shares surge",
            "Chipmakers lead a broad rally as demand stays hot",
            "2026-03-02T09:30:00Z",
        ),
        article(
            "Retail stocks surge on spending data",
            "Consumer appetite shows little sign of cooling this quarter",
            "2026-03-02T13:10:00Z",
        ),
    ];

    let report = run_analysis(&scorer(), &tagger(), &raw, &[]);

    let day = &report.daily_sentiment[&NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()];
    assert_eq!(day.article_count, 2);
    assert_eq!(day.positive_count, 2);
    assert!(day.average_score > 0.1);

    for a in &report.articles {
        assert!(a.sentiment_score > 0.1);
        assert!(a.sentiment_score <= 1.0);
    }
}

// ---------------------------------------------------------------------------
// Scenario: a week with no sentiment signal
// ---------------------------------------------------------------------------

#[test]
fn test_flat_week_yields_neutral_forecast() {
    let mut raw_articles = Vec::new();
    let mut raw_market = Vec::new();
    for day in 2..=8 {
        raw_articles.push(article(
            &format!("Committee session day {}", day),
            "Officials met on schedule and reviewed the agenda",
            &format!("2026-03-0{}T10:00:00Z", day),
        ));
        raw_market.push(market_point(
            &format!("2026-03-0{}", day),
            5000.0 + (day as f64) * 3.0,
        ));
    }

    let report = run_analysis(&scorer(), &tagger(), &raw_articles, &raw_market);

    assert_eq!(report.correlations.next_day, 0.0);
    assert_eq!(report.correlations.same_day, 0.0);

    let next_day = &report.predictions[0];
    assert_eq!(next_day.direction, Direction::Neutral);
    // With zero signal the confidence is carried by data sufficiency and
    // article volume alone: 15 + (7 / 50 * 10)
    assert!((next_day.confidence - 16.4).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Scenario: rising sentiment echoed by next-day market moves
// ---------------------------------------------------------------------------

#[test]
fn test_lagged_rise_predicts_up() {
    let mut raw_articles = Vec::new();
    // Day d carries d bullish articles and (8 - d) quiet ones, so the daily
    // average climbs strictly from 1/8 toward 7/8.
    for day in 2..=8 {
        let strength = day - 1;
        for i in 0..strength {
            raw_articles.push(article(
                &format!("Profits gain day {} item {}", day, i),
                "",
                &format!("2026-03-0{}T09:00:00Z", day),
            ));
        }
        for i in 0..(8 - strength) {
            raw_articles.push(article(
                &format!("Schedule note day {} item {}", day, i),
                "",
                &format!("2026-03-0{}T15:00:00Z", day),
            ));
        }
    }

    // Each day's close moves by 100x the previous day's sentiment average,
    // making the lag-1 pairing exactly linear.
    let mut raw_market = Vec::new();
    let mut close = 5000.0;
    for day in 2..=8 {
        if day > 2 {
            let prev_avg = (day - 2) as f64 / 8.0;
            close += prev_avg * 100.0;
        }
        raw_market.push(market_point(&format!("2026-03-0{}", day), close));
    }

    let report = run_analysis(&scorer(), &tagger(), &raw_articles, &raw_market);

    assert!((report.correlations.next_day - 1.0).abs() < 1e-6);

    let next_day = &report.predictions[0];
    assert_eq!(next_day.direction, Direction::Up);
    assert!(next_day.confidence > 50.0);
    assert_eq!(report.predictions[1].direction, Direction::Up);
}

// ---------------------------------------------------------------------------
// Robustness: malformed records never poison the pass
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_records_are_skipped_not_fatal() {
    let raw_articles = vec![
        article("Valid surge story", "markets rally", "2026-03-02T09:00:00Z"),
        RawArticle {
            title: "Missing date".to_string(),
            description: None,
            source: "newswire".to_string(),
            url: "https://example.com/broken".to_string(),
            published_at: None,
        },
        article("Bad date format", "text", "03/02/2026"),
    ];
    let raw_market = vec![
        market_point("2026-03-02", 5000.0),
        RawMarketPoint {
            date: "2026-03-03".to_string(),
            close: None,
        },
        market_point("2026-03-04", 5040.0),
    ];

    let report = run_analysis(&scorer(), &tagger(), &raw_articles, &raw_market);

    assert_eq!(report.articles_analyzed, 1);
    assert_eq!(report.articles_skipped, 2);
    assert_eq!(report.market_points_skipped, 1);
    assert_eq!(report.rows.len(), 2);

    let aggregated: u32 = report
        .daily_sentiment
        .values()
        .map(|d| d.article_count)
        .sum();
    assert_eq!(aggregated as usize, report.articles_analyzed);
}

// ---------------------------------------------------------------------------
// Report invariants
// ---------------------------------------------------------------------------

#[test]
fn test_report_invariants_hold() {
    let raw_articles = vec![
        article("Apple profits surge", "record quarter", "2026-03-02T09:00:00Z"),
        article("Banks fall on warnings", "lenders under pressure", "2026-03-03T09:00:00Z"),
        article("Quiet session expected", "nothing on the calendar", "2026-03-04T09:00:00Z"),
    ];
    let raw_market = vec![
        market_point("2026-03-02", 5000.0),
        market_point("2026-03-03", 5025.0),
        market_point("2026-03-04", 4990.0),
    ];

    let report = run_analysis(&scorer(), &tagger(), &raw_articles, &raw_market);

    for day in report.daily_sentiment.values() {
        assert_eq!(
            day.positive_count + day.negative_count + day.neutral_count,
            day.article_count
        );
        assert!(day.average_score >= -1.0 && day.average_score <= 1.0);
    }

    assert_eq!(report.predictions.len(), 2);
    for p in &report.predictions {
        assert!(p.confidence >= 0.0 && p.confidence <= 95.0);
    }

    // Every article gets at least one tag
    for a in &report.articles {
        assert!(!a.related_symbols.is_empty());
    }
}

#[test]
fn test_report_serializes_to_plain_json() {
    let raw_articles = vec![article(
        "Tesla deliveries surge",
        "quarterly record",
        "2026-03-02T09:00:00Z",
    )];
    let raw_market = vec![market_point("2026-03-02", 5000.0)];

    let report = run_analysis(&scorer(), &tagger(), &raw_articles, &raw_market);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["predictions"][0]["timeframe"], "next_day");
    assert_eq!(json["predictions"][1]["timeframe"], "next_week");
    assert!(json["articles"][0]["related_symbols"]
        .as_array()
        .unwrap()
        .contains(&serde_json::Value::String("TSLA".to_string())));
}

// ---------------------------------------------------------------------------
// Forecast path consumes the full row set, zero days included
// ---------------------------------------------------------------------------

#[test]
fn test_forecast_uses_rows_with_zero_days() {
    let raw_articles = vec![article(
        "Markets surge on stimulus",
        "broad rally",
        "2026-03-02T09:00:00Z",
    )];
    let raw_market = vec![
        market_point("2026-03-02", 5000.0),
        market_point("2026-03-03", 5050.0),
        market_point("2026-03-04", 5010.0),
    ];

    let report = run_analysis(&scorer(), &tagger(), &raw_articles, &raw_market);

    // The quiet market days stay in the forecast input...
    assert_eq!(report.rows.len(), 3);
    // ...and the diagnostics view drops them
    let nonzero_rows: Vec<_> = report
        .rows
        .iter()
        .filter(|r| r.average_score != 0.0)
        .cloned()
        .collect();
    let expected = correlate(&nonzero_rows);
    assert_eq!(report.diagnostics.nonzero.same_day, expected.same_day);
    assert_eq!(report.diagnostics.nonzero.next_day, expected.next_day);

    // Rebuilding predictions from the report's own rows is reproducible
    let rebuilt = generate_predictions(&report.rows, &report.correlations);
    assert_eq!(rebuilt[0].direction, report.predictions[0].direction);
    assert_eq!(rebuilt[0].confidence, report.predictions[0].confidence);
}
