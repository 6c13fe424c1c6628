//! Anchor Interpolation
//!
//! Piecewise-linear estimator over (value, mapped) anchor pairs. Turns a raw
//! measurement into a percentile or Z-score against a 5-point profile and,
//! with the pair roles swapped, reads a raw value back at a target percentile.
//!
//! Algorithm:
//! 1. Stable-sort anchors ascending by value
//! 2. Below the first anchor: extend the first segment's slope
//! 3. Above the last anchor: extend the last segment's slope
//! 4. Otherwise: mapped = mapped_i + fraction × (mapped_i+1 - mapped_i)

use smallvec::SmallVec;
use std::cmp::Ordering;

/// Anchor list sized for the 5-point profiles used throughout the crate
pub type Anchors = SmallVec<[(f64, f64); 5]>;

/// Estimate the mapped quantity at `input` from (value, mapped) anchors.
///
/// Anchors with equal values in the segment used yield the first anchor's
/// mapped quantity. One anchor yields its mapped value; none (or a NaN input)
/// yields NaN.
pub fn estimate(input: f64, anchors: &[(f64, f64)]) -> f64 {
    if input.is_nan() {
        return f64::NAN;
    }

    let mut sorted: Anchors = anchors.iter().copied().collect();
    // sort_by is stable: ties keep their original order
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    match sorted.len() {
        0 => return f64::NAN,
        1 => return sorted[0].1,
        _ => {}
    }

    let n = sorted.len();

    if input <= sorted[0].0 {
        return extend(input, sorted[0], sorted[1], sorted[0]);
    }
    if input >= sorted[n - 1].0 {
        return extend(input, sorted[n - 2], sorted[n - 1], sorted[n - 1]);
    }

    // First anchor at or above input; in 1..n-1 because of the checks above
    let upper = sorted.partition_point(|&(value, _)| value < input);
    if sorted[upper].0 == input {
        return sorted[upper].1;
    }
    segment(input, sorted[upper - 1], sorted[upper])
}

/// Read the value at a target mapped quantity (inverse of `estimate`)
pub fn value_at(target: f64, anchors: &[(f64, f64)]) -> f64 {
    let swapped: Anchors = anchors.iter().map(|&(value, mapped)| (mapped, value)).collect();
    estimate(target, &swapped)
}

/// Linear interpolation inside [lo, hi]
fn segment(input: f64, lo: (f64, f64), hi: (f64, f64)) -> f64 {
    let span = hi.0 - lo.0;
    if span == 0.0 {
        return lo.1;
    }

    let fraction = (input - lo.0) / span;
    lo.1 + fraction * (hi.1 - lo.1)
}

/// Linear extension through `pivot` with the slope of the sorted pair [lo, hi].
/// A zero-width pair yields `lo`'s mapped value.
fn extend(input: f64, lo: (f64, f64), hi: (f64, f64), pivot: (f64, f64)) -> f64 {
    let span = hi.0 - lo.0;
    if span == 0.0 {
        return lo.1;
    }

    let slope = (hi.1 - lo.1) / span;
    pivot.1 + (input - pivot.0) * slope
}
