//! Standard normal distribution helpers
//!
//! Z-score → percentile through Φ(z) = 0.5·(1 + erf(z/√2)), with erf from
//! Abramowitz & Stegun formula 7.1.26 (|error| < 1.5e-7).

use std::f64::consts::SQRT_2;

const P: f64 = 0.327_591_1;
const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;

/// Error function approximation (A&S 7.1.26), odd-extended to negative x
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal CDF Φ(z)
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Percentile (0-100) for a Z-score; NaN stays NaN
pub fn percentile_from_z(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    (100.0 * normal_cdf(z)).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_erf_matches_reference_within_tolerance() {
        let mut x = -4.0;
        while x <= 4.0 {
            assert_abs_diff_eq!(erf(x), libm::erf(x), epsilon = 1.5e-7);
            x += 0.01;
        }
    }

    #[test]
    fn test_erf_is_odd() {
        for x in [0.1, 0.5, 1.3, 2.7] {
            assert_relative_eq!(erf(-x), -erf(x));
        }
    }

    #[test]
    fn test_known_percentiles() {
        assert_abs_diff_eq!(percentile_from_z(0.0), 50.0, epsilon = 1e-5);
        assert_abs_diff_eq!(percentile_from_z(1.0), 84.134, epsilon = 1e-3);
        assert_abs_diff_eq!(percentile_from_z(-1.880_794), 3.0, epsilon = 1e-3);
        assert_abs_diff_eq!(percentile_from_z(1.036_433), 85.0, epsilon = 1e-3);
    }

    #[test]
    fn test_percentile_bounds() {
        assert_eq!(percentile_from_z(f64::INFINITY), 100.0);
        assert_eq!(percentile_from_z(f64::NEG_INFINITY), 0.0);
        assert!(percentile_from_z(f64::NAN).is_nan());
        for z in [-40.0, -8.0, 8.0, 40.0] {
            let p = percentile_from_z(z);
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn test_percentile_monotonic_in_z() {
        let mut previous = percentile_from_z(-6.0);
        let mut z = -6.0;
        while z <= 6.0 {
            let p = percentile_from_z(z);
            assert!(p >= previous, "percentile decreased at z = {}", z);
            previous = p;
            z += 0.005;
        }
    }
}
