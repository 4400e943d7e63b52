use crate::models::{CorrelationRow, CorrelationSummary};

/// Pearson correlation coefficient.
///
/// Pairs where either value is non-finite are dropped first. Fewer than 2
/// valid pairs, mismatched lengths, or zero variance in either series all
/// return 0: absence of signal, not an error.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() {
        return 0.0;
    }

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .collect();

    let n = pairs.len() as f64;
    if pairs.len() < 2 {
        return 0.0;
    }

    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (a, b) in &pairs {
        let diff_x = a - mean_x;
        let diff_y = b - mean_y;
        covariance += diff_x * diff_y;
        var_x += diff_x * diff_x;
        var_y += diff_y * diff_y;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    covariance / (var_x.sqrt() * var_y.sqrt())
}

/// Correlate sentiment against market change over the full row set,
/// zero-sentiment days included. This is the forecast input.
///
/// `next_day` pairs each day's sentiment with the following day's change
/// (sentiment truncated to all-but-last), measuring the lag-1 relationship.
pub fn correlate(rows: &[CorrelationRow]) -> CorrelationSummary {
    let scores: Vec<f64> = rows.iter().map(|r| r.average_score).collect();
    let changes: Vec<f64> = rows.iter().map(|r| r.change).collect();

    let same_day = pearson(&scores, &changes);

    let next_day = if rows.len() < 2 {
        0.0
    } else {
        pearson(&scores[..scores.len() - 1], &changes[1..])
    };

    CorrelationSummary { same_day, next_day }
}

/// Diagnostic variant of [`correlate`] that removes days with no sentiment
/// signal (`average_score == 0`) before pairing.
pub fn correlate_nonzero(rows: &[CorrelationRow]) -> CorrelationSummary {
    let active: Vec<CorrelationRow> = rows
        .iter()
        .filter(|r| r.average_score != 0.0)
        .cloned()
        .collect();
    correlate(&active)
}

/// Diagnostic correlation of sentiment against the market close level
/// rather than its change. Never used by the forecast path.
pub fn level_correlation(rows: &[CorrelationRow]) -> f64 {
    let scores: Vec<f64> = rows.iter().map(|r| r.average_score).collect();
    let closes: Vec<f64> = rows.iter().map(|r| r.close_value).collect();
    pearson(&scores, &closes)
}
