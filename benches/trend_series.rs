use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growth_reference_rust::{GrowthMetric, GrowthReferenceEngine, MeasurementRecord, PatientHistory, Sex};

/// Monthly visits from 6 to 60 months
fn history() -> Vec<MeasurementRecord> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (6..=60)
        .map(|month| MeasurementRecord {
            date: start + Duration::days(30 * month as i64),
            age_months: month as f64,
            weight_kg: 7.5 + 0.2 * month as f64,
            height_cm: 66.0 + 0.9 * month as f64,
        })
        .collect()
}

fn bench_single_series(c: &mut Criterion) {
    let engine = GrowthReferenceEngine::new().unwrap();
    let rows = history();

    for metric in [GrowthMetric::BmiForAge, GrowthMetric::WeightForAge] {
        c.bench_function(&format!("build_points/{:?}", metric), |b| {
            b.iter(|| engine.build_points(Sex::Male, metric, black_box(&rows)))
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let engine = GrowthReferenceEngine::new().unwrap();
    let histories: Vec<PatientHistory> = (0..256)
        .map(|i| PatientHistory {
            sex: if i % 2 == 0 { Sex::Male } else { Sex::Female },
            records: history(),
        })
        .collect();

    c.bench_function("build_series_batch/256", |b| {
        b.iter(|| engine.build_series_batch(GrowthMetric::BmiForAge, black_box(&histories)))
    });
}

criterion_group!(benches, bench_single_series, bench_batch);
criterion_main!(benches);
