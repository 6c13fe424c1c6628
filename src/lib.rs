//! Pediatric Growth Reference Engine
//!
//! Converts anthropometric measurements into Z-scores, percentiles and risk
//! zones, and assembles them into longitudinal trend series.
//!
//! - `reference/`: embedded LMS tables and range buckets
//! - `utils/`: anchor interpolation and the normal CDF
//! - `indicators/`: LMS and range-bucket assessment, zones, nutrition helpers
//! - `trend/`: chronological trend points
//! - `explanation/`: trend interpretation messages
//! - `engine`: validated entry point over all of the above

pub mod config;
pub mod error;
pub mod reference;
pub mod utils;
pub mod indicators;
pub mod trend;
pub mod explanation;
pub mod engine;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::{GrowthReferenceEngine, PatientHistory};
pub use error::TableError;
pub use explanation::{TrendDirection, TrendInterpretation, TrendInterpretationGenerator};
pub use indicators::{
    Assessment, GrowthMetric, MuacStatus, NutritionalStatus, PercentileProfile, ProfileAccuracy,
    Zone, ZScoreResult,
};
pub use reference::{ReferenceParameterPoint, Sex};
pub use trend::{GrowthTrendPoint, MeasurementRecord};
