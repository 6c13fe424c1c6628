//! Percentile profiles
//!
//! A profile is the metric value at P3, P15, P50, P85 and P97. Paired with
//! fixed percentile ranks or Z-score ranks it becomes the anchor set used by
//! the interpolation estimator, so both derived quantities come from the same
//! five points.

use serde::{Deserialize, Serialize};

use crate::utils::interpolation::{estimate, value_at, Anchors};

/// Percentile ranks of the profile points
pub const PERCENTILE_RANKS: [f64; 5] = [3.0, 15.0, 50.0, 85.0, 97.0];

/// Z-score ranks assigned to the profile points on the approximate path
pub const Z_SCORE_RANKS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Standard normal quantiles of `PERCENTILE_RANKS`
pub const PERCENTILE_QUANTILES: [f64; 5] = [-1.880_794, -1.036_433, 0.0, 1.036_433, 1.880_794];

/// How a profile was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileAccuracy {
    /// Derived from LMS reference parameters
    Exact,
    /// Linear spread of a plausibility range; not a WHO reference
    Approximate,
}

/// Metric values at P3, P15, P50, P85, P97 (native unit)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileProfile {
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64,
    pub accuracy: ProfileAccuracy,
}

impl PercentileProfile {
    pub fn from_values(values: [f64; 5], accuracy: ProfileAccuracy) -> Self {
        let [p3, p15, p50, p85, p97] = values;
        Self { p3, p15, p50, p85, p97, accuracy }
    }

    pub fn values(&self) -> [f64; 5] {
        [self.p3, self.p15, self.p50, self.p85, self.p97]
    }

    /// p3 < p15 < p50 < p85 < p97, all finite
    pub fn is_strictly_increasing(&self) -> bool {
        let values = self.values();
        values.iter().all(|v| v.is_finite()) && values.windows(2).all(|w| w[0] < w[1])
    }

    /// (value, percentile) anchors
    pub fn percentile_anchors(&self) -> Anchors {
        self.values().into_iter().zip(PERCENTILE_RANKS).collect()
    }

    /// (value, Z-score) anchors
    pub fn z_score_anchors(&self) -> Anchors {
        self.values().into_iter().zip(Z_SCORE_RANKS).collect()
    }

    /// Percentile of a raw value, clamped to [0, 100]
    pub fn percentile_of(&self, value: f64) -> f64 {
        estimate(value, &self.percentile_anchors()).clamp(0.0, 100.0)
    }

    /// Z-score of a raw value (linear beyond ±2)
    pub fn z_score_of(&self, value: f64) -> f64 {
        estimate(value, &self.z_score_anchors())
    }

    /// Raw value expected at a target percentile
    pub fn value_at_percentile(&self, percentile: f64) -> f64 {
        value_at(percentile, &self.percentile_anchors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> PercentileProfile {
        PercentileProfile::from_values([9.9, 10.78, 12.35, 13.92, 14.8], ProfileAccuracy::Approximate)
    }

    #[test]
    fn test_profile_points_map_to_ranks() {
        let p = profile();
        for (value, rank) in p.values().into_iter().zip(PERCENTILE_RANKS) {
            assert_eq!(p.percentile_of(value), rank);
        }
        for (value, rank) in p.values().into_iter().zip(Z_SCORE_RANKS) {
            assert_eq!(p.z_score_of(value), rank);
        }
    }

    #[test]
    fn test_median_round_trip() {
        let p = profile();
        assert_relative_eq!(p.percentile_of(p.p50), 50.0, epsilon = 1e-9);
        assert_relative_eq!(p.value_at_percentile(50.0), p.p50, epsilon = 1e-9);
    }

    #[test]
    fn test_percentile_is_clamped() {
        let p = profile();
        assert_eq!(p.percentile_of(1.0), 0.0);
        assert_eq!(p.percentile_of(100.0), 100.0);
        assert!(p.z_score_of(1.0) < -2.0);
    }

    #[test]
    fn test_strictly_increasing_check() {
        assert!(profile().is_strictly_increasing());
        let flat = PercentileProfile::from_values([1.0; 5], ProfileAccuracy::Approximate);
        assert!(!flat.is_strictly_increasing());
    }
}
