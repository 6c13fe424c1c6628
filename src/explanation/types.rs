use serde::{Deserialize, Serialize};

/// Percentile movement between the two most recent points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    ImportantDecline,
    MildDecline,
    Stable,
    Improvement,
}

impl TrendDirection {
    /// Derive direction from a percentile delta (latest - previous)
    pub fn from_delta(delta: f64) -> Self {
        match delta {
            d if d <= -10.0 => TrendDirection::ImportantDecline,
            d if d <= -4.0 => TrendDirection::MildDecline,
            d if d >= 8.0 => TrendDirection::Improvement,
            _ => TrendDirection::Stable,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            TrendDirection::ImportantDecline => "important decline",
            TrendDirection::MildDecline => "mild decline",
            TrendDirection::Stable => "stable",
            TrendDirection::Improvement => "improvement",
        }
    }
}

/// Interpretation of a trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInterpretation {
    pub message: String,
    /// None for fewer than two points
    pub percentile_delta: Option<f64>,
    pub direction: Option<TrendDirection>,
}
