//! Engine configuration
//!
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below. Zone thresholds are deliberately not part of the configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Youngest age (months) assessed by the LMS path
    pub min_age_months: f64,
    /// Oldest age (months) assessed by the LMS path
    pub max_age_months: f64,
    /// chrono format string for trend point date labels
    pub date_format: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_age_months: 6.0,
            max_age_months: 60.0,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        if !(config.min_age_months <= config.max_age_months) {
            anyhow::bail!(
                "Invalid age domain: {} > {} months",
                config.min_age_months,
                config.max_age_months
            );
        }

        Ok(config)
    }

    /// Whether the LMS path covers this age
    pub fn contains_age(&self, age_months: f64) -> bool {
        age_months >= self.min_age_months && age_months <= self.max_age_months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.contains_age(6.0));
        assert!(config.contains_age(60.0));
        assert!(!config.contains_age(5.9));
        assert!(!config.contains_age(60.1));
        assert!(!config.contains_age(f64::NAN));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"date_format": "%d/%m/%Y"}"#).unwrap();
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.min_age_months, 6.0);
        assert_eq!(config.max_age_months, 60.0);
    }
}
