//! Percentile risk zones
//!
//! | percentile          | zone   |
//! |---------------------|--------|
//! | < 3 or > 97         | red    |
//! | [3, 15) or (85, 97] | yellow |
//! | [15, 85]            | green  |

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Green,
    Yellow,
    Red,
}

impl Zone {
    /// Zone for a percentile; NaN is red
    pub fn classify(percentile: f64) -> Self {
        if (15.0..=85.0).contains(&percentile) {
            Zone::Green
        } else if (3.0..15.0).contains(&percentile) || (percentile > 85.0 && percentile <= 97.0) {
            Zone::Yellow
        } else {
            Zone::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Green => "green",
            Zone::Yellow => "yellow",
            Zone::Red => "red",
        }
    }
}
