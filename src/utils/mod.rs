//! Shared numeric utilities
//!
//! - Interpolation: piecewise-linear anchor estimator
//! - Normal distribution: erf approximation and Z-score → percentile

pub mod interpolation;
pub mod normal_distribution;

pub use interpolation::{estimate, value_at, Anchors};
pub use normal_distribution::{erf, normal_cdf, percentile_from_z};
