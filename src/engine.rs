//! Growth Reference Engine - main entry point
//!
//! Holds the validated reference tables and configuration and exposes every
//! operation as a pure `&self` method. Construction is the only fallible step:
//! malformed tables are rejected here, never per request.
//! Includes a Rayon batch variant for many independent patient series.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::EngineConfig;
use crate::error::TableError;
use crate::explanation::{TrendInterpretation, TrendInterpretationGenerator};
use crate::indicators::{
    bmi_for_age, Assessment, GrowthMetric, IndicatorInput, PercentileProfile, PercentileSource,
    ZScoreResult,
};
use crate::reference::range_buckets::validate_buckets;
use crate::reference::{ReferenceTableStore, Sex};
use crate::trend::{GrowthTrendBuilder, GrowthTrendPoint, MeasurementRecord};

/// One patient's measurement history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientHistory {
    pub sex: Sex,
    pub records: Vec<MeasurementRecord>,
}

/// Stateless growth reference engine
#[derive(Debug, Clone)]
pub struct GrowthReferenceEngine {
    store: ReferenceTableStore,
    config: EngineConfig,
}

impl GrowthReferenceEngine {
    /// Engine over the embedded WHO tables with default configuration
    pub fn new() -> Result<Self, TableError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, TableError> {
        Self::from_parts(ReferenceTableStore::embedded(), config)
    }

    /// Engine over LMS tables loaded from a JSON file
    pub fn from_json(path: &Path, config: EngineConfig) -> Result<Self> {
        let store = ReferenceTableStore::load(path)?;
        Self::from_parts(store, config)
            .with_context(|| format!("Invalid reference tables in {:?}", path))
    }

    /// Validate tables and buckets against the configured age domain
    pub fn from_parts(store: ReferenceTableStore, config: EngineConfig) -> Result<Self, TableError> {
        store.validate(config.min_age_months, config.max_age_months)?;
        validate_buckets()?;

        tracing::info!(
            "Reference tables validated ({}-{} months)",
            config.min_age_months,
            config.max_age_months
        );

        Ok(Self { store, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &ReferenceTableStore {
        &self.store
    }

    /// BMI-for-age Z-score and whole percentile in [1, 99]; NaN outside the
    /// age domain
    pub fn bmi_for_age(&self, sex: Sex, bmi: f64, age_months: f64) -> ZScoreResult {
        bmi_for_age(&self.store, &self.config, sex, bmi, age_months)
    }

    /// Assess one measurement for any metric; None when indeterminate
    pub fn assess(
        &self,
        sex: Sex,
        metric: GrowthMetric,
        value: f64,
        age_months: f64,
        height_cm: f64,
    ) -> Option<Assessment> {
        let input = IndicatorInput { value, age_months, height_cm };
        PercentileSource::for_metric(metric).assess(&self.store, &self.config, sex, &input)
    }

    /// Reference profile for a metric at an age (or height, for
    /// weight-for-height)
    pub fn profile(
        &self,
        sex: Sex,
        metric: GrowthMetric,
        age_months: f64,
        height_cm: f64,
    ) -> Option<PercentileProfile> {
        let input = IndicatorInput { value: f64::NAN, age_months, height_cm };
        PercentileSource::for_metric(metric).profile(&self.store, &self.config, sex, &input)
    }

    /// Trend points in chronological (input) order
    pub fn build_points(
        &self,
        sex: Sex,
        metric: GrowthMetric,
        rows: &[MeasurementRecord],
    ) -> Vec<GrowthTrendPoint> {
        GrowthTrendBuilder::new(&self.store, &self.config).build_points(sex, metric, rows)
    }

    pub fn interpret(&self, points: &[GrowthTrendPoint], metric: GrowthMetric) -> String {
        TrendInterpretationGenerator::interpret(points, metric)
    }

    pub fn interpretation(
        &self,
        points: &[GrowthTrendPoint],
        metric: GrowthMetric,
    ) -> TrendInterpretation {
        TrendInterpretationGenerator::generate(points, metric)
    }

    /// Trend series for many patients (parallel, order preserved)
    pub fn build_series_batch(
        &self,
        metric: GrowthMetric,
        histories: &[PatientHistory],
    ) -> Vec<Vec<GrowthTrendPoint>> {
        histories
            .par_iter()
            .map(|history| self.build_points(history.sex, metric, &history.records))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrowthReferenceEngine>();
    }

    #[test]
    fn test_narrow_config_still_validates() {
        let config = EngineConfig { min_age_months: 12.0, max_age_months: 48.0, ..Default::default() };
        let engine = GrowthReferenceEngine::with_config(config).unwrap();
        assert!(engine.bmi_for_age(Sex::Male, 16.0, 10.0).is_indeterminate());
        assert!(!engine.bmi_for_age(Sex::Male, 16.0, 24.0).is_indeterminate());
    }

    #[test]
    fn test_wider_domain_than_tables_is_rejected() {
        let config = EngineConfig { min_age_months: 0.0, ..Default::default() };
        assert!(matches!(
            GrowthReferenceEngine::with_config(config),
            Err(TableError::IncompleteCoverage { .. })
        ));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = GrowthReferenceEngine::new().unwrap();
        let record = |age: f64, weight: f64| MeasurementRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            age_months: age,
            weight_kg: weight,
            height_cm: 85.0,
        };
        let histories = vec![
            PatientHistory { sex: Sex::Male, records: vec![record(20.0, 11.0), record(24.0, 12.0)] },
            PatientHistory { sex: Sex::Female, records: vec![] },
            PatientHistory { sex: Sex::Female, records: vec![record(30.0, 13.0)] },
        ];

        let batch = engine.build_series_batch(GrowthMetric::WeightForAge, &histories);
        assert_eq!(batch.len(), 3);
        for (series, history) in batch.iter().zip(&histories) {
            let sequential = engine.build_points(history.sex, GrowthMetric::WeightForAge, &history.records);
            assert_eq!(series, &sequential);
        }
    }

    #[test]
    fn test_profile_for_each_metric() {
        let engine = GrowthReferenceEngine::new().unwrap();
        for metric in GrowthMetric::ALL {
            let profile = engine.profile(Sex::Female, metric, 30.0, 90.0).unwrap();
            assert!(profile.is_strictly_increasing(), "{:?}", metric);
        }
    }
}
