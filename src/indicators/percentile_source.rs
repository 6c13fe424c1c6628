//! Percentile sources
//!
//! Every growth metric resolves its profile through one of two sources:
//! - `ExactLms`: WHO LMS parameters at the child's age (BMI-for-age)
//! - `RangeBucketApproximation`: a [min, max] range spread over the profile
//!   ranks (weight-for-age, height-for-age, weight-for-height)
//!
//! Callers get the same `Assessment` either way; `profile.accuracy` records
//! which source produced it.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::indicators::lms::{exact_profile, z_score};
use crate::indicators::profile::{PercentileProfile, ProfileAccuracy};
use crate::indicators::range_profile::profile_for;
use crate::reference::{ApproxMetric, LmsMetric, ReferenceTableStore, Sex};
use crate::utils::normal_distribution::percentile_from_z;

/// Metric selector for single assessments and trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMetric {
    WeightForAge,
    HeightForAge,
    WeightForHeight,
    BmiForAge,
}

impl GrowthMetric {
    pub const ALL: [GrowthMetric; 4] = [
        GrowthMetric::WeightForAge,
        GrowthMetric::HeightForAge,
        GrowthMetric::WeightForHeight,
        GrowthMetric::BmiForAge,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_for_age" | "wfa" => Some(GrowthMetric::WeightForAge),
            "height_for_age" | "hfa" => Some(GrowthMetric::HeightForAge),
            "weight_for_height" | "wfh" => Some(GrowthMetric::WeightForHeight),
            "bmi_for_age" | "bfa" | "bmi" => Some(GrowthMetric::BmiForAge),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthMetric::WeightForAge => "Weight-for-age",
            GrowthMetric::HeightForAge => "Height-for-age",
            GrowthMetric::WeightForHeight => "Weight-for-height",
            GrowthMetric::BmiForAge => "BMI-for-age",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GrowthMetric::WeightForAge | GrowthMetric::WeightForHeight => "kg",
            GrowthMetric::HeightForAge => "cm",
            GrowthMetric::BmiForAge => "kg/m²",
        }
    }
}

/// Measured value plus the context a source may key on
#[derive(Debug, Clone, Copy)]
pub struct IndicatorInput {
    pub value: f64,
    pub age_months: f64,
    pub height_cm: f64,
}

/// Profile with the derived percentile and Z-score of the measured value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub profile: PercentileProfile,
    pub percentile: f64,
    pub z_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentileSource {
    ExactLms(LmsMetric),
    RangeBucketApproximation(ApproxMetric),
}

impl PercentileSource {
    pub fn for_metric(metric: GrowthMetric) -> Self {
        match metric {
            GrowthMetric::BmiForAge => PercentileSource::ExactLms(LmsMetric::BmiForAge),
            GrowthMetric::WeightForAge => {
                PercentileSource::RangeBucketApproximation(ApproxMetric::WeightForAge)
            }
            GrowthMetric::HeightForAge => {
                PercentileSource::RangeBucketApproximation(ApproxMetric::HeightForAge)
            }
            GrowthMetric::WeightForHeight => {
                PercentileSource::RangeBucketApproximation(ApproxMetric::WeightForHeight)
            }
        }
    }

    pub fn accuracy(&self) -> ProfileAccuracy {
        match self {
            PercentileSource::ExactLms(_) => ProfileAccuracy::Exact,
            PercentileSource::RangeBucketApproximation(_) => ProfileAccuracy::Approximate,
        }
    }

    /// Profile at the input's age (or height), None outside the exact
    /// source's age domain
    pub fn profile(
        &self,
        store: &ReferenceTableStore,
        config: &EngineConfig,
        sex: Sex,
        input: &IndicatorInput,
    ) -> Option<PercentileProfile> {
        match *self {
            PercentileSource::ExactLms(metric) => {
                if !config.contains_age(input.age_months) {
                    return None;
                }
                let point = store.resolve(sex, metric, input.age_months)?;
                Some(exact_profile(&point))
            }
            PercentileSource::RangeBucketApproximation(metric) => {
                let key = match metric {
                    ApproxMetric::WeightForHeight => input.height_cm,
                    ApproxMetric::WeightForAge | ApproxMetric::HeightForAge => input.age_months,
                };
                Some(profile_for(metric, key))
            }
        }
    }

    /// Full assessment of the input's value; None when indeterminate
    pub fn assess(
        &self,
        store: &ReferenceTableStore,
        config: &EngineConfig,
        sex: Sex,
        input: &IndicatorInput,
    ) -> Option<Assessment> {
        let assessment = match *self {
            PercentileSource::ExactLms(metric) => {
                if !config.contains_age(input.age_months) {
                    return None;
                }
                let point = store.resolve(sex, metric, input.age_months)?;
                let z = z_score(input.value, &point);
                Assessment {
                    profile: exact_profile(&point),
                    percentile: percentile_from_z(z),
                    z_score: z,
                }
            }
            PercentileSource::RangeBucketApproximation(_) => {
                let profile = self.profile(store, config, sex, input)?;
                Assessment {
                    profile,
                    percentile: profile.percentile_of(input.value),
                    z_score: profile.z_score_of(input.value),
                }
            }
        };

        if assessment.percentile.is_finite() && assessment.z_score.is_finite() {
            Some(assessment)
        } else {
            None
        }
    }
}
