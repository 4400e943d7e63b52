use serde::{Deserialize, Serialize};

/// Prediction horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    NextDay,
    NextWeek,
}

impl Timeframe {
    pub fn description(&self) -> &'static str {
        match self {
            Timeframe::NextDay => "Next Day",
            Timeframe::NextWeek => "Next Week",
        }
    }
}

/// Predicted market direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Neutral => write!(f, "neutral"),
        }
    }
}

/// A directional forecast for one horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub timeframe: Timeframe,
    pub direction: Direction,
    /// Heuristic reliability in [0, 95] percent, not a probability.
    pub confidence: f64,
    /// Weighted sentiment the direction was derived from.
    pub sentiment_value: f64,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Timeframe::NextDay).unwrap(),
            "\"next_day\""
        );
        assert_eq!(
            serde_json::to_string(&Timeframe::NextWeek).unwrap(),
            "\"next_week\""
        );
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
    }
}
