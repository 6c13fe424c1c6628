// Trend report: print trend points and interpretation for one patient history
//
// Usage: cargo run --bin trend_report -- <history.json> <sex> <metric>
//   history.json: {"sex": "male", "records": [{"date": "2024-01-15", "age_months": 18.0,
//                  "weight_kg": 10.8, "height_cm": 81.0}, ...]}
//   sex:          male | female (m/f, boy/girl), or "-" to use the history's sex
//   metric:       weight_for_age | height_for_age | weight_for_height | bmi_for_age
// Optional: GROWTH_CONFIG=<config.json>, GROWTH_TABLES=<lms_tables.json>

use anyhow::{Context, Result};
use growth_reference_rust::{EngineConfig, GrowthMetric, GrowthReferenceEngine, PatientHistory, Sex};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_reference_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        anyhow::bail!("usage: {} <history.json> <sex> <metric>", args[0]);
    }

    let sex_override = match args[2].as_str() {
        "-" => None,
        name => Some(Sex::parse(name).with_context(|| format!("Unknown sex: {}", name))?),
    };
    let metric = GrowthMetric::parse(&args[3])
        .with_context(|| format!("Unknown metric: {}", args[3]))?;

    let config = match std::env::var("GROWTH_CONFIG") {
        Ok(path) => EngineConfig::load(Path::new(&path))?,
        Err(_) => EngineConfig::default(),
    };

    let engine = match std::env::var("GROWTH_TABLES") {
        Ok(path) => GrowthReferenceEngine::from_json(Path::new(&path), config)?,
        Err(_) => GrowthReferenceEngine::with_config(config)?,
    };

    let history_path = Path::new(&args[1]);
    let contents = fs::read_to_string(history_path)
        .with_context(|| format!("Failed to read history: {:?}", history_path))?;
    let history: PatientHistory = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse history JSON")?;

    let sex = match sex_override {
        Some(sex) if sex != history.sex => {
            tracing::warn!("History records {:?}; using {:?} from the command line", history.sex, sex);
            sex
        }
        Some(sex) => sex,
        None => history.sex,
    };

    tracing::info!("Building {} trend from {} records", metric.display_name(), history.records.len());

    let points = engine.build_points(sex, metric, &history.records);
    let interpretation = engine.interpretation(&points, metric);

    let report = json!({
        "sex": sex,
        "metric": metric,
        "points": points,
        "interpretation": interpretation,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
