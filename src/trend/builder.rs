//! Growth Trend Builder
//!
//! For each usable record, in input order:
//! 1. Pick the metric's value (weight, height or derived BMI)
//! 2. Assess it through the metric's percentile source
//! 3. Classify the percentile into a zone
//!
//! Records with unusable measurements, or that the source cannot assess
//! (e.g. BMI-for-age outside 6-60 months), are skipped rather than failing
//! the series.

use crate::config::EngineConfig;
use crate::indicators::{GrowthMetric, IndicatorInput, PercentileSource, Zone};
use crate::reference::{ReferenceTableStore, Sex};
use crate::trend::labels::{age_label, date_label};
use crate::trend::types::{GrowthTrendPoint, MeasurementRecord};

pub struct GrowthTrendBuilder<'a> {
    store: &'a ReferenceTableStore,
    config: &'a EngineConfig,
}

impl<'a> GrowthTrendBuilder<'a> {
    pub fn new(store: &'a ReferenceTableStore, config: &'a EngineConfig) -> Self {
        Self { store, config }
    }

    /// Trend points in the same (chronological) order as `rows`
    pub fn build_points(
        &self,
        sex: Sex,
        metric: GrowthMetric,
        rows: &[MeasurementRecord],
    ) -> Vec<GrowthTrendPoint> {
        let source = PercentileSource::for_metric(metric);
        let mut points = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            if !row.is_usable() {
                tracing::debug!("Skipping record #{} ({}): unusable measurements", index, row.date);
                continue;
            }

            let input = IndicatorInput {
                value: row.value_for(metric),
                age_months: row.age_months,
                height_cm: row.height_cm,
            };

            let Some(assessment) = source.assess(self.store, self.config, sex, &input) else {
                tracing::debug!(
                    "Skipping record #{} ({}): {} indeterminate at {} months",
                    index,
                    row.date,
                    metric.display_name(),
                    row.age_months
                );
                continue;
            };

            points.push(GrowthTrendPoint {
                date_label: date_label(row.date, &self.config.date_format),
                age_label: age_label(row.age_months),
                actual_value: input.value,
                percentiles: assessment.profile,
                zone: Zone::classify(assessment.percentile),
                percentile: assessment.percentile,
                z_score: assessment.z_score,
            });
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::ProfileAccuracy;
    use chrono::NaiveDate;

    fn record(day: u32, age_months: f64, weight_kg: f64, height_cm: f64) -> MeasurementRecord {
        MeasurementRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            age_months,
            weight_kg,
            height_cm,
        }
    }

    fn build(sex: Sex, metric: GrowthMetric, rows: &[MeasurementRecord]) -> Vec<GrowthTrendPoint> {
        let store = ReferenceTableStore::embedded();
        let config = EngineConfig::default();
        GrowthTrendBuilder::new(&store, &config).build_points(sex, metric, rows)
    }

    #[test]
    fn test_empty_series() {
        assert!(build(Sex::Male, GrowthMetric::WeightForAge, &[]).is_empty());
    }

    #[test]
    fn test_single_record() {
        let points = build(Sex::Male, GrowthMetric::WeightForAge, &[record(1, 18.0, 10.8, 81.0)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date_label, "2024-01-01");
        assert_eq!(points[0].age_label, "18 mo");
        assert_eq!(points[0].actual_value, 10.8);
        assert_eq!(points[0].percentiles.accuracy, ProfileAccuracy::Approximate);
    }

    #[test]
    fn test_unusable_rows_are_filtered() {
        let rows = [
            record(1, 12.0, 9.5, 75.0),
            record(2, 13.0, 0.0, 76.0),
            record(3, 14.0, 9.9, -1.0),
            record(4, 15.0, f64::NAN, 77.0),
            record(5, 16.0, 10.3, 78.0),
        ];
        let points = build(Sex::Female, GrowthMetric::WeightForAge, &rows);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date_label, "2024-01-01");
        assert_eq!(points[1].date_label, "2024-01-05");
    }

    #[test]
    fn test_order_is_preserved() {
        // Deliberately not sorted by value or age
        let rows = [
            record(1, 30.0, 14.0, 92.0),
            record(2, 10.0, 8.0, 72.0),
            record(3, 20.0, 11.0, 84.0),
        ];
        let points = build(Sex::Male, GrowthMetric::WeightForAge, &rows);
        let values: Vec<f64> = points.iter().map(|p| p.actual_value).collect();
        assert_eq!(values, vec![14.0, 8.0, 11.0]);
    }

    #[test]
    fn test_low_weight_is_red() {
        let points = build(Sex::Male, GrowthMetric::WeightForAge, &[record(1, 24.0, 6.0, 85.0)]);
        assert_eq!(points.len(), 1);
        assert!(points[0].percentile < 3.0);
        assert_eq!(points[0].zone, Zone::Red);
    }

    #[test]
    fn test_bmi_series_uses_exact_profiles_and_skips_out_of_domain() {
        let rows = [
            record(1, 4.0, 6.5, 62.0),
            record(2, 24.0, 12.0, 87.0),
            record(3, 36.0, 14.3, 96.0),
        ];
        let points = build(Sex::Male, GrowthMetric::BmiForAge, &rows);
        assert_eq!(points.len(), 2);
        for point in &points {
            assert_eq!(point.percentiles.accuracy, ProfileAccuracy::Exact);
            assert!(point.percentiles.is_strictly_increasing());
            assert!(point.z_score.is_finite());
        }
    }
}
