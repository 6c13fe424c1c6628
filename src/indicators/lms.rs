//! LMS Z-score calculation
//!
//! Cole's LMS method: with skewness L, median M and coefficient of variation S
//! at the child's age,
//!
//! ```text
//! z = ((value / M)^L - 1) / (L × S)      (L ≠ 0)
//! z = ln(value / M) / S                  (L ≈ 0)
//! ```
//!
//! Beyond ±3 the power curve is replaced by a linear extension whose unit is
//! the distance between the ±2SD and ±3SD values (WHO 2006 restricted
//! application of the LMS method):
//!
//! ```text
//! z > 3:   z' =  3 + (value - SD3pos) / (SD3pos - SD2pos)
//! z < -3:  z' = -3 + (value - SD3neg) / (SD2neg - SD3neg)
//! ```

use crate::indicators::profile::{PercentileProfile, ProfileAccuracy, PERCENTILE_QUANTILES};
use crate::reference::ReferenceParameterPoint;

/// |L| below this is treated as the log-normal limit
const L_EPSILON: f64 = 1e-9;

/// Z-score of `value` against an (L, M, S) triple.
///
/// NaN when value, M or S is non-positive or any input is non-finite.
pub fn z_score(value: f64, point: &ReferenceParameterPoint) -> f64 {
    let ReferenceParameterPoint { l, m, s, .. } = *point;
    let valid = value.is_finite()
        && l.is_finite()
        && m.is_finite()
        && s.is_finite()
        && value > 0.0
        && m > 0.0
        && s > 0.0;
    if !valid {
        return f64::NAN;
    }

    let z = if l.abs() < L_EPSILON {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    };

    if z > 3.0 {
        let sd3 = sd_value(point, 3.0);
        let sd2 = sd_value(point, 2.0);
        corrected(z, 3.0, value, sd3, sd3 - sd2)
    } else if z < -3.0 {
        let sd3 = sd_value(point, -3.0);
        let sd2 = sd_value(point, -2.0);
        corrected(z, -3.0, value, sd3, sd2 - sd3)
    } else {
        z
    }
}

/// Tail extension from the ±3SD value; falls back to the raw z when the
/// SD2-SD3 span is unusable
fn corrected(z: f64, base: f64, value: f64, sd3: f64, span: f64) -> f64 {
    if !sd3.is_finite() || !span.is_finite() || span <= 0.0 {
        return z;
    }
    base + (value - sd3) / span
}

/// Measurement value at Z = k: `M × (1 + L·S·k)^(1/L)`.
///
/// NaN when the power base is non-positive (curve undefined at that k).
pub fn sd_value(point: &ReferenceParameterPoint, k: f64) -> f64 {
    let ReferenceParameterPoint { l, m, s, .. } = *point;
    if l.abs() < L_EPSILON {
        return m * (s * k).exp();
    }

    let base = 1.0 + l * s * k;
    if base <= 0.0 {
        return f64::NAN;
    }
    m * base.powf(1.0 / l)
}

/// Exact P3/P15/P50/P85/P97 values for an (L, M, S) triple
pub fn exact_profile(point: &ReferenceParameterPoint) -> PercentileProfile {
    PercentileProfile::from_values(
        PERCENTILE_QUANTILES.map(|z| sd_value(point, z)),
        ProfileAccuracy::Exact,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// WHO BMI-for-age, boys, 24 months
    fn boys_24() -> ReferenceParameterPoint {
        ReferenceParameterPoint { age_months: 24.0, l: -0.6187, m: 16.0189, s: 0.07785 }
    }

    #[test]
    fn test_median_is_zero() {
        assert_abs_diff_eq!(z_score(16.0189, &boys_24()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sd_values_round_trip() {
        let point = boys_24();
        for k in [-3.0, -2.0, -1.0, 1.0, 2.0, 3.0] {
            assert_relative_eq!(z_score(sd_value(&point, k), &point), k, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_log_normal_limit() {
        let point = ReferenceParameterPoint { age_months: 12.0, l: 0.0, m: 10.0, s: 0.1 };
        assert_relative_eq!(z_score(10.0 * 0.1f64.exp(), &point), 1.0, epsilon = 1e-12);
        assert_relative_eq!(sd_value(&point, 2.0), 10.0 * 0.2f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_are_nan() {
        let point = boys_24();
        assert!(z_score(0.0, &point).is_nan());
        assert!(z_score(-4.0, &point).is_nan());
        assert!(z_score(f64::NAN, &point).is_nan());
        assert!(z_score(f64::INFINITY, &point).is_nan());

        let bad_m = ReferenceParameterPoint { m: 0.0, ..point };
        assert!(z_score(15.0, &bad_m).is_nan());
        let bad_s = ReferenceParameterPoint { s: -0.1, ..point };
        assert!(z_score(15.0, &bad_s).is_nan());
    }

    #[test]
    fn test_upper_tail_is_linear_in_sd_units() {
        let point = boys_24();
        let sd2 = sd_value(&point, 2.0);
        let sd3 = sd_value(&point, 3.0);
        let step = sd3 - sd2;

        assert_relative_eq!(z_score(sd3 + step, &point), 4.0, epsilon = 1e-9);
        assert_relative_eq!(z_score(sd3 + 2.5 * step, &point), 5.5, epsilon = 1e-9);
    }

    #[test]
    fn test_lower_tail_is_linear_in_sd_units() {
        let point = boys_24();
        let sd2 = sd_value(&point, -2.0);
        let sd3 = sd_value(&point, -3.0);
        let step = sd2 - sd3;

        assert_relative_eq!(z_score(sd3 - step, &point), -4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tail_never_saturates() {
        // With L < 0 the uncorrected curve is bounded by -1/(L·S) ≈ 20.8
        let point = boys_24();
        let far = z_score(200.0, &point);
        let farther = z_score(400.0, &point);
        assert!(far > 21.0);
        assert!(farther > far);
    }

    #[test]
    fn test_exact_profile_is_increasing_and_centered() {
        let profile = exact_profile(&boys_24());
        assert!(profile.is_strictly_increasing());
        assert_relative_eq!(profile.p50, 16.0189, epsilon = 1e-12);
        assert_eq!(profile.accuracy, ProfileAccuracy::Exact);
    }
}
