//! BMI-for-age for a single measurement
//!
//! Returns the LMS Z-score together with a whole-number percentile clamped to
//! [1, 99]. Outside the configured age domain (6-60 months by default) both
//! fields are NaN.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::indicators::lms::z_score;
use crate::reference::{LmsMetric, ReferenceTableStore, Sex};
use crate::utils::normal_distribution::percentile_from_z;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZScoreResult {
    pub z_score: f64,
    pub percentile: f64,
}

impl ZScoreResult {
    pub fn indeterminate() -> Self {
        Self {
            z_score: f64::NAN,
            percentile: f64::NAN,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        self.z_score.is_nan() || self.percentile.is_nan()
    }
}

pub fn bmi_for_age(
    store: &ReferenceTableStore,
    config: &EngineConfig,
    sex: Sex,
    bmi: f64,
    age_months: f64,
) -> ZScoreResult {
    if !config.contains_age(age_months) {
        return ZScoreResult::indeterminate();
    }

    let Some(point) = store.resolve(sex, LmsMetric::BmiForAge, age_months) else {
        return ZScoreResult::indeterminate();
    };

    let z = z_score(bmi, &point);
    if z.is_nan() {
        return ZScoreResult::indeterminate();
    }

    ZScoreResult {
        z_score: z,
        percentile: percentile_from_z(z).round().clamp(1.0, 99.0),
    }
}
