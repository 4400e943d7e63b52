use tracing::{debug, warn};

use crate::models::{CorrelationRow, CorrelationSummary, Direction, Prediction, Timeframe};

/// Number of most-recent days the forecast looks at.
const RECENT_WINDOW: usize = 7;
/// Adjusted strength beyond which the call stops being neutral.
const DIRECTION_THRESHOLD: f64 = 0.05;
/// Confidence ceiling in percent.
const MAX_CONFIDENCE: f64 = 95.0;

/// Produce the next-day and next-week predictions from the joined rows and
/// the precomputed correlations. Deterministic; no randomness anywhere.
///
/// The directional signal is recency-weighted sentiment scaled by the lag-1
/// correlation, dampened by sentiment volatility and amplified by a clear
/// trend. Confidence is the sum of five bounded contributions: correlation
/// strength (40), consistency (20), trend (15), data sufficiency (15), and
/// article volume (10), capped at 95.
pub fn generate_predictions(
    rows: &[CorrelationRow],
    correlations: &CorrelationSummary,
) -> Vec<Prediction> {
    let mut recent: Vec<&CorrelationRow> = rows.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_WINDOW);

    if recent.is_empty() {
        warn!("no correlation rows available, emitting neutral predictions");
        return neutral_predictions();
    }

    // Recency-weighted sentiment: weight 7 for the newest row down to 1 for
    // the 7th-most-recent, normalized by the weights actually used.
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (i, row) in recent.iter().enumerate() {
        let weight = (RECENT_WINDOW - i) as f64;
        weighted_sum += row.average_score * weight;
        total_weight += weight;
    }
    let weighted_sentiment = weighted_sum / total_weight;

    let sentiment_trend = if recent.len() >= 2 {
        recent.first().map(|r| r.average_score).unwrap_or(0.0)
            - recent.last().map(|r| r.average_score).unwrap_or(0.0)
    } else {
        0.0
    };

    let n = recent.len() as f64;
    let avg_sentiment = recent.iter().map(|r| r.average_score).sum::<f64>() / n;
    let variance = recent
        .iter()
        .map(|r| (r.average_score - avg_sentiment).powi(2))
        .sum::<f64>()
        / n;
    let sentiment_std_dev = variance.sqrt();

    let volatility_factor = (sentiment_std_dev * 3.0).min(1.0);
    let trend_factor = (sentiment_trend.abs() * 2.0).min(1.0);

    let raw_strength = weighted_sentiment * correlations.next_day;
    let adjusted_strength =
        raw_strength * (1.0 - 0.3 * volatility_factor) * (1.0 + 0.2 * trend_factor);

    let direction = if adjusted_strength > DIRECTION_THRESHOLD {
        Direction::Up
    } else if adjusted_strength < -DIRECTION_THRESHOLD {
        Direction::Down
    } else {
        Direction::Neutral
    };

    let total_articles: u32 = recent.iter().map(|r| r.article_count).sum();

    // Confidence contributions, each individually capped.
    let correlation_term = (correlations.next_day.abs() * 40.0).min(40.0);
    // A window with no sentiment signal at all earns no consistency credit;
    // a flat-but-nonzero window earns the maximum.
    let has_signal = recent.iter().any(|r| r.average_score != 0.0);
    let consistency_term = if has_signal {
        (1.0 - sentiment_std_dev.min(0.5) / 0.5) * 20.0
    } else {
        0.0
    };
    let trend_term = (sentiment_trend.abs() * 10.0).min(15.0);
    let data_term = (recent.len() as f64 / RECENT_WINDOW as f64 * 15.0).min(15.0);
    let volume_term = (total_articles as f64 / 50.0 * 10.0).min(10.0);

    let confidence =
        (correlation_term + consistency_term + trend_term + data_term + volume_term)
            .min(MAX_CONFIDENCE);

    debug!(
        "forecast factors: weighted={:.3}, trend={:.3}, std_dev={:.3}, adjusted={:.3}, confidence={:.1}",
        weighted_sentiment, sentiment_trend, sentiment_std_dev, adjusted_strength, confidence
    );

    let trend_word = if sentiment_trend > 0.0 {
        "improving"
    } else if sentiment_trend < 0.0 {
        "deteriorating"
    } else {
        "flat"
    };

    let next_day = Prediction {
        timeframe: Timeframe::NextDay,
        direction,
        confidence,
        sentiment_value: weighted_sentiment,
        explanation: format!(
            "Based on {} articles over the last {} days, weighted sentiment is {:.2} and {}; \
             with a next-day correlation of {:.2}, the market is predicted to move {}.",
            total_articles,
            recent.len(),
            weighted_sentiment,
            trend_word,
            correlations.next_day,
            direction
        ),
    };

    // The weekly horizon trusts a clear trend over the daily signal.
    let week_direction = if sentiment_trend.abs() > 0.1 {
        if sentiment_trend > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else {
        direction
    };

    let next_week = Prediction {
        timeframe: Timeframe::NextWeek,
        direction: week_direction,
        confidence: (confidence * 0.75).round(),
        sentiment_value: weighted_sentiment + sentiment_trend,
        explanation: format!(
            "Extended outlook from the {} sentiment trend ({:+.2}) and historical \
             correlation patterns.",
            trend_word, sentiment_trend
        ),
    };

    vec![next_day, next_week]
}

fn neutral_predictions() -> Vec<Prediction> {
    let explain = "No sentiment history available for this window.".to_string();
    vec![
        Prediction {
            timeframe: Timeframe::NextDay,
            direction: Direction::Neutral,
            confidence: 0.0,
            sentiment_value: 0.0,
            explanation: explain.clone(),
        },
        Prediction {
            timeframe: Timeframe::NextWeek,
            direction: Direction::Neutral,
            confidence: 0.0,
            sentiment_value: 0.0,
            explanation: explain,
        },
    ]
}
