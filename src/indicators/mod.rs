//! Growth indicator calculations
//!
//! - `lms`: exact LMS Z-scores and profiles
//! - `range_profile`: approximate profiles from range buckets
//! - `profile`: the shared 5-point profile and its anchors
//! - `percentile_source`: one entry point over both paths
//! - `zone`: percentile risk zones
//! - `nutrition`: BMI, BMI-for-age status and MUAC cut-offs
//! - `bmi_for_age`: single-measurement BMI-for-age helper

pub mod profile;
pub mod lms;
pub mod range_profile;
pub mod percentile_source;
pub mod zone;
pub mod nutrition;
pub mod bmi_for_age;

pub use profile::{PercentileProfile, ProfileAccuracy, PERCENTILE_RANKS, Z_SCORE_RANKS};
pub use percentile_source::{Assessment, GrowthMetric, IndicatorInput, PercentileSource};
pub use zone::Zone;
pub use nutrition::{compute_bmi, MuacStatus, NutritionalStatus};
pub use bmi_for_age::{bmi_for_age, ZScoreResult};
