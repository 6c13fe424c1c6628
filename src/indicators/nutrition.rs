//! Nutritional status helpers
//!
//! WHO under-five cut-offs for BMI-for-age Z-scores and for mid-upper-arm
//! circumference (MUAC).

use serde::{Deserialize, Serialize};

/// Body-mass index (kg/m²); NaN for non-positive or non-finite inputs
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let valid = weight_kg.is_finite() && height_cm.is_finite() && weight_kg > 0.0 && height_cm > 0.0;
    if !valid {
        return f64::NAN;
    }

    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI-for-age classification (children under 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionalStatus {
    SeverelyWasted,
    Wasted,
    Normal,
    PossibleRiskOfOverweight,
    Overweight,
    Obese,
    Indeterminate,
}

impl NutritionalStatus {
    pub fn from_bmi_z(z: f64) -> Self {
        match z {
            z if z.is_nan() => NutritionalStatus::Indeterminate,
            z if z > 3.0 => NutritionalStatus::Obese,
            z if z > 2.0 => NutritionalStatus::Overweight,
            z if z > 1.0 => NutritionalStatus::PossibleRiskOfOverweight,
            z if z >= -2.0 => NutritionalStatus::Normal,
            z if z >= -3.0 => NutritionalStatus::Wasted,
            _ => NutritionalStatus::SeverelyWasted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutritionalStatus::SeverelyWasted => "Severely wasted",
            NutritionalStatus::Wasted => "Wasted",
            NutritionalStatus::Normal => "Normal",
            NutritionalStatus::PossibleRiskOfOverweight => "Possible risk of overweight",
            NutritionalStatus::Overweight => "Overweight",
            NutritionalStatus::Obese => "Obese",
            NutritionalStatus::Indeterminate => "Indeterminate",
        }
    }
}

/// MUAC screening (6-59 months)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuacStatus {
    SevereAcuteMalnutrition,
    ModerateAcuteMalnutrition,
    Normal,
    Indeterminate,
}

impl MuacStatus {
    pub fn classify(muac_cm: f64) -> Self {
        match muac_cm {
            m if !m.is_finite() || m <= 0.0 => MuacStatus::Indeterminate,
            m if m < 11.5 => MuacStatus::SevereAcuteMalnutrition,
            m if m < 12.5 => MuacStatus::ModerateAcuteMalnutrition,
            _ => MuacStatus::Normal,
        }
    }
}
