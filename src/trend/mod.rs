//! Longitudinal growth trends
//!
//! Turns a patient's chronological measurement history into chart-ready
//! trend points, one per usable visit.

pub mod types;
pub mod labels;
pub mod builder;

pub use types::{GrowthTrendPoint, MeasurementRecord};
pub use labels::age_label;
pub use builder::GrowthTrendBuilder;
