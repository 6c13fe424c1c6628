//! Reference data for growth indicators
//!
//! - `lms_tables`: embedded WHO LMS parameters (exact path)
//! - `store`: per-(sex, metric) table lookup with age interpolation
//! - `range_buckets`: [min, max] plausibility ranges (approximate path)

pub mod lms_tables;
pub mod store;
pub mod range_buckets;

use serde::{Deserialize, Serialize};

pub use store::ReferenceTableStore;
pub use range_buckets::{bucket_table, default_bucket, NormalRangeBucket};

/// Biological sex used to select a reference population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Parse "male"/"female" (also "m"/"f", "boy"/"girl")
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Some(Sex::Male),
            "female" | "f" | "girl" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Indicators with full LMS reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LmsMetric {
    BmiForAge,
}

impl LmsMetric {
    pub const ALL: [LmsMetric; 1] = [LmsMetric::BmiForAge];
}

/// Indicators profiled from range buckets (approximate path)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproxMetric {
    /// Weight (kg) bucketed by age in months
    WeightForAge,
    /// Height (cm) bucketed by age in months
    HeightForAge,
    /// Weight (kg) bucketed by height in cm
    WeightForHeight,
}

impl ApproxMetric {
    pub const ALL: [ApproxMetric; 3] = [
        ApproxMetric::WeightForAge,
        ApproxMetric::HeightForAge,
        ApproxMetric::WeightForHeight,
    ];
}

/// One tabulated (L, M, S) triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceParameterPoint {
    pub age_months: f64,
    /// Box-Cox power (skewness)
    pub l: f64,
    /// Median
    pub m: f64,
    /// Coefficient of variation
    pub s: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse_accepts_aliases() {
        for name in ["male", "M", " boy "] {
            assert_eq!(Sex::parse(name), Some(Sex::Male));
        }
        for name in ["Female", "f", "girl"] {
            assert_eq!(Sex::parse(name), Some(Sex::Female));
        }
        assert_eq!(Sex::parse("-"), None);
        assert_eq!(Sex::parse(""), None);
    }
}
