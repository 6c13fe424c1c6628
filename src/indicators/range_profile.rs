//! Range bucket profiles (approximate path)
//!
//! Spreads a [min, max] plausibility range over the five profile ranks:
//! min is P3, max is P97, and the ranks in between are placed linearly,
//! `value(p) = min + (max - min) × (p - 3) / 94`.

use crate::indicators::profile::{PercentileProfile, ProfileAccuracy, PERCENTILE_RANKS};
use crate::reference::{bucket_table, default_bucket, ApproxMetric, NormalRangeBucket};

/// Percentile span between the P3 and P97 ends
const RANK_SPAN: f64 = 94.0;

/// Approximate profile for a [min, max] range
pub fn build_profile(min: f64, max: f64) -> PercentileProfile {
    PercentileProfile::from_values(
        PERCENTILE_RANKS.map(|p| min + (max - min) * (p - 3.0) / RANK_SPAN),
        ProfileAccuracy::Approximate,
    )
}

/// First bucket containing `input` (age in months or height in cm), else the
/// metric's default bucket
pub fn select_bucket(metric: ApproxMetric, input: f64) -> &'static NormalRangeBucket {
    bucket_table(metric)
        .iter()
        .find(|bucket| bucket.contains(input))
        .unwrap_or_else(|| default_bucket(metric))
}

/// Profile for the bucket selected by `input`
pub fn profile_for(metric: ApproxMetric, input: f64) -> PercentileProfile {
    profile_from_bucket(metric, select_bucket(metric, input))
}

/// Profile for a specific bucket.
///
/// The embedded tables are validated, but a caller-built bucket may have no
/// positive span; that would produce a flat profile, so the metric's default
/// bucket is used instead.
pub fn profile_from_bucket(metric: ApproxMetric, bucket: &NormalRangeBucket) -> PercentileProfile {
    if bucket.max > bucket.min {
        return build_profile(bucket.min, bucket.max);
    }

    tracing::warn!(
        "{:?} bucket [{}, {}] has no span; using default range",
        metric,
        bucket.lower_bound,
        bucket.upper_bound
    );
    let fallback = default_bucket(metric);
    build_profile(fallback.min, fallback.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profile_spreads_range_linearly() {
        let profile = build_profile(9.4, 18.8);
        assert_relative_eq!(profile.p3, 9.4);
        assert_relative_eq!(profile.p15, 9.4 + 9.4 * 12.0 / 94.0, epsilon = 1e-12);
        assert_relative_eq!(profile.p50, 14.1, epsilon = 1e-12);
        assert_relative_eq!(profile.p85, 9.4 + 9.4 * 82.0 / 94.0, epsilon = 1e-12);
        assert_relative_eq!(profile.p97, 18.8, epsilon = 1e-12);
        assert_eq!(profile.accuracy, ProfileAccuracy::Approximate);
        assert!(profile.is_strictly_increasing());
    }

    #[test]
    fn test_select_bucket_first_match_wins() {
        // 24 months sits on the edge of two weight-for-age buckets
        let bucket = select_bucket(ApproxMetric::WeightForAge, 24.0);
        assert_eq!(bucket.lower_bound, 12.0);
        let bucket = select_bucket(ApproxMetric::WeightForAge, 24.5);
        assert_eq!(bucket.lower_bound, 24.0);
    }

    #[test]
    fn test_select_bucket_falls_back_to_default() {
        for metric in ApproxMetric::ALL {
            let bucket = select_bucket(metric, 500.0);
            assert_eq!(bucket, default_bucket(metric));
            let bucket = select_bucket(metric, f64::NAN);
            assert_eq!(bucket, default_bucket(metric));
        }
    }

    #[test]
    fn test_weight_for_height_uses_height_key() {
        let bucket = select_bucket(ApproxMetric::WeightForHeight, 87.0);
        assert_eq!((bucket.min, bucket.max), (9.0, 16.0));
    }

    #[test]
    fn test_zero_span_bucket_uses_default_range() {
        let flat = NormalRangeBucket {
            lower_bound: 12.0,
            upper_bound: 24.0,
            min: 10.0,
            max: 10.0,
        };
        let profile = profile_from_bucket(ApproxMetric::WeightForAge, &flat);
        let fallback = default_bucket(ApproxMetric::WeightForAge);
        assert_relative_eq!(profile.p3, fallback.min);
        assert_relative_eq!(profile.p97, fallback.max);
        assert!(profile.is_strictly_increasing());
    }
}
