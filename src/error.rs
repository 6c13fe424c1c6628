//! Reference data validation errors
//!
//! Only raised while an engine is being constructed. Per-measurement
//! computations never fail; they return NaN or empty results instead.

use thiserror::Error;

use crate::reference::{ApproxMetric, LmsMetric, Sex};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("no LMS table for {sex:?} / {metric:?}")]
    EmptyTable { sex: Sex, metric: LmsMetric },

    #[error("{sex:?} / {metric:?}: age {age_months} does not follow {previous} (ages must strictly increase)")]
    NonIncreasingAges {
        sex: Sex,
        metric: LmsMetric,
        previous: f64,
        age_months: f64,
    },

    #[error("{sex:?} / {metric:?}: table covers {first}-{last} months, required {required_min}-{required_max}")]
    IncompleteCoverage {
        sex: Sex,
        metric: LmsMetric,
        first: f64,
        last: f64,
        required_min: f64,
        required_max: f64,
    },

    #[error("{sex:?} / {metric:?}: gap between {from} and {to} months exceeds one month")]
    CoverageGap {
        sex: Sex,
        metric: LmsMetric,
        from: f64,
        to: f64,
    },

    #[error("{sex:?} / {metric:?}: invalid parameters at {age_months} months (M and S must be positive and finite)")]
    InvalidParameters {
        sex: Sex,
        metric: LmsMetric,
        age_months: f64,
    },

    #[error("{metric:?}: range bucket #{index} is malformed ({reason})")]
    InvalidBucket {
        metric: ApproxMetric,
        index: usize,
        reason: &'static str,
    },
}
