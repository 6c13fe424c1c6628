//! Normal Range Buckets
//!
//! Clinically plausible [min, max] intervals for indicators that have no LMS
//! table in this crate. `min` is read as P3 and `max` as P97 by the range
//! profile builder, so these are a heuristic approximation of the WHO
//! standards, not a substitute for them.
//!
//! Weight/height-for-age buckets are keyed by age in months; weight-for-height
//! buckets are keyed by height in cm. Adjacent buckets share their end points;
//! lookups take the first match.

use serde::{Deserialize, Serialize};

use super::ApproxMetric;
use crate::error::TableError;

/// A single [lower_bound, upper_bound] → [min, max] range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRangeBucket {
    /// Age in months or height in cm, depending on the metric
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Metric value read as P3
    pub min: f64,
    /// Metric value read as P97
    pub max: f64,
}

impl NormalRangeBucket {
    pub fn contains(&self, input: f64) -> bool {
        input >= self.lower_bound && input <= self.upper_bound
    }
}

const fn bucket(lower_bound: f64, upper_bound: f64, min: f64, max: f64) -> NormalRangeBucket {
    NormalRangeBucket { lower_bound, upper_bound, min, max }
}

// ============================================================================
// EMBEDDED BUCKETS
// ============================================================================

/// Weight (kg) by age (months)
static WEIGHT_FOR_AGE: &[NormalRangeBucket] = &[
    bucket(6.0, 12.0, 6.4, 11.0),
    bucket(12.0, 24.0, 7.8, 14.5),
    bucket(24.0, 36.0, 9.9, 16.8),
    bucket(36.0, 48.0, 11.5, 19.5),
    bucket(48.0, 60.0, 13.0, 22.5),
];

/// Height (cm) by age (months)
static HEIGHT_FOR_AGE: &[NormalRangeBucket] = &[
    bucket(6.0, 12.0, 63.0, 80.0),
    bucket(12.0, 24.0, 71.0, 93.0),
    bucket(24.0, 36.0, 81.0, 102.0),
    bucket(36.0, 48.0, 88.0, 110.0),
    bucket(48.0, 60.0, 95.0, 118.0),
];

/// Weight (kg) by height (cm)
static WEIGHT_FOR_HEIGHT: &[NormalRangeBucket] = &[
    bucket(45.0, 65.0, 2.0, 8.0),
    bucket(65.0, 80.0, 6.0, 12.0),
    bucket(80.0, 95.0, 9.0, 16.0),
    bucket(95.0, 110.0, 12.0, 20.5),
    bucket(110.0, 120.0, 15.0, 25.0),
];

static WEIGHT_FOR_AGE_DEFAULT: NormalRangeBucket = bucket(0.0, f64::INFINITY, 5.0, 25.0);
static HEIGHT_FOR_AGE_DEFAULT: NormalRangeBucket = bucket(0.0, f64::INFINITY, 45.0, 125.0);
static WEIGHT_FOR_HEIGHT_DEFAULT: NormalRangeBucket = bucket(0.0, f64::INFINITY, 2.0, 30.0);

/// Ordered bucket table for a metric
pub fn bucket_table(metric: ApproxMetric) -> &'static [NormalRangeBucket] {
    match metric {
        ApproxMetric::WeightForAge => WEIGHT_FOR_AGE,
        ApproxMetric::HeightForAge => HEIGHT_FOR_AGE,
        ApproxMetric::WeightForHeight => WEIGHT_FOR_HEIGHT,
    }
}

/// Fallback bucket used when no table entry contains the input
pub fn default_bucket(metric: ApproxMetric) -> &'static NormalRangeBucket {
    match metric {
        ApproxMetric::WeightForAge => &WEIGHT_FOR_AGE_DEFAULT,
        ApproxMetric::HeightForAge => &HEIGHT_FOR_AGE_DEFAULT,
        ApproxMetric::WeightForHeight => &WEIGHT_FOR_HEIGHT_DEFAULT,
    }
}

/// Check ordering and non-overlap of every embedded bucket table
pub fn validate_buckets() -> Result<(), TableError> {
    for metric in ApproxMetric::ALL {
        let table = bucket_table(metric);
        for (index, b) in table.iter().enumerate() {
            if !(b.lower_bound < b.upper_bound) {
                return Err(TableError::InvalidBucket { metric, index, reason: "empty bound interval" });
            }
            if !(b.min > 0.0 && b.min < b.max) {
                return Err(TableError::InvalidBucket { metric, index, reason: "min must be positive and below max" });
            }
            if index > 0 && b.lower_bound < table[index - 1].upper_bound {
                return Err(TableError::InvalidBucket { metric, index, reason: "overlaps previous bucket" });
            }
        }

        let fallback = default_bucket(metric);
        if !(fallback.min > 0.0 && fallback.min < fallback.max) {
            return Err(TableError::InvalidBucket { metric, index: table.len(), reason: "default bucket has no span" });
        }
    }

    Ok(())
}
