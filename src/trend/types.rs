use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::indicators::{GrowthMetric, PercentileProfile, Zone};

/// One visit from the caller's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub date: NaiveDate,
    pub age_months: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl MeasurementRecord {
    /// Weight, height and age all usable
    pub fn is_usable(&self) -> bool {
        self.weight_kg.is_finite()
            && self.height_cm.is_finite()
            && self.age_months.is_finite()
            && self.weight_kg > 0.0
            && self.height_cm > 0.0
            && self.age_months >= 0.0
    }

    /// Value plotted for a metric (BMI is derived from weight and height)
    pub fn value_for(&self, metric: GrowthMetric) -> f64 {
        match metric {
            GrowthMetric::WeightForAge | GrowthMetric::WeightForHeight => self.weight_kg,
            GrowthMetric::HeightForAge => self.height_cm,
            GrowthMetric::BmiForAge => crate::indicators::compute_bmi(self.weight_kg, self.height_cm),
        }
    }
}

/// Enriched chart point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthTrendPoint {
    pub date_label: String,
    pub age_label: String,
    pub actual_value: f64,
    pub percentiles: PercentileProfile,
    pub zone: Zone,
    pub percentile: f64,
    pub z_score: f64,
}
