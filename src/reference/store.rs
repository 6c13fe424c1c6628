//! Reference Table Store
//!
//! Holds per-sex, per-metric LMS tables and resolves an (L, M, S) triple for
//! any age by linear interpolation between the two bracketing rows.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

use super::lms_tables::embedded_table;
use super::{LmsMetric, ReferenceParameterPoint, Sex};
use crate::error::TableError;

/// Maximum spacing between consecutive tabulated ages
const MAX_AGE_STEP_MONTHS: f64 = 1.0;

/// On-disk layout: `{"male": {"bmi_for_age": [{age_months, l, m, s}, ...]}}`
type TableDocument = FxHashMap<Sex, FxHashMap<LmsMetric, Vec<ReferenceParameterPoint>>>;

/// Read-only LMS tables keyed by (sex, metric)
#[derive(Debug, Clone)]
pub struct ReferenceTableStore {
    tables: FxHashMap<(Sex, LmsMetric), Vec<ReferenceParameterPoint>>,
}

impl ReferenceTableStore {
    /// Store backed by the embedded WHO tables
    pub fn embedded() -> Self {
        let mut tables = FxHashMap::default();
        for sex in Sex::ALL {
            for metric in LmsMetric::ALL {
                tables.insert((sex, metric), embedded_table(sex, metric).to_vec());
            }
        }
        Self { tables }
    }

    /// Load tables from a JSON document
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference tables: {:?}", path))?;

        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let document: TableDocument = serde_json::from_str(contents)
            .with_context(|| "Failed to parse reference table JSON")?;

        let mut tables = FxHashMap::default();
        for (sex, metrics) in document {
            for (metric, points) in metrics {
                tables.insert((sex, metric), points);
            }
        }

        Ok(Self { tables })
    }

    /// Check every (sex, metric) table against the supported age domain.
    ///
    /// Ages must strictly increase, span [min_age, max_age] and never jump more
    /// than one month. M and S must be positive, L finite.
    pub fn validate(&self, min_age: f64, max_age: f64) -> Result<(), TableError> {
        for sex in Sex::ALL {
            for metric in LmsMetric::ALL {
                let table = self
                    .table(sex, metric)
                    .filter(|t| !t.is_empty())
                    .ok_or(TableError::EmptyTable { sex, metric })?;

                for point in table {
                    let valid = point.age_months.is_finite()
                        && point.l.is_finite()
                        && point.m.is_finite()
                        && point.s.is_finite()
                        && point.m > 0.0
                        && point.s > 0.0;
                    if !valid {
                        return Err(TableError::InvalidParameters {
                            sex,
                            metric,
                            age_months: point.age_months,
                        });
                    }
                }

                for pair in table.windows(2) {
                    let (previous, next) = (pair[0].age_months, pair[1].age_months);
                    if next <= previous {
                        return Err(TableError::NonIncreasingAges {
                            sex,
                            metric,
                            previous,
                            age_months: next,
                        });
                    }
                    if next - previous > MAX_AGE_STEP_MONTHS {
                        return Err(TableError::CoverageGap {
                            sex,
                            metric,
                            from: previous,
                            to: next,
                        });
                    }
                }

                let first = table[0].age_months;
                let last = table[table.len() - 1].age_months;
                if first > min_age || last < max_age {
                    return Err(TableError::IncompleteCoverage {
                        sex,
                        metric,
                        first,
                        last,
                        required_min: min_age,
                        required_max: max_age,
                    });
                }
            }
        }

        Ok(())
    }

    /// Raw table rows for a (sex, metric) pair
    pub fn table(&self, sex: Sex, metric: LmsMetric) -> Option<&[ReferenceParameterPoint]> {
        self.tables.get(&(sex, metric)).map(Vec::as_slice)
    }

    /// Resolve (L, M, S) at a possibly fractional age.
    ///
    /// Flat beyond either end of the table. Returns None only for a NaN age or
    /// a pair with no table.
    pub fn resolve(
        &self,
        sex: Sex,
        metric: LmsMetric,
        age_months: f64,
    ) -> Option<ReferenceParameterPoint> {
        if age_months.is_nan() {
            return None;
        }

        let table = self.table(sex, metric)?;
        let first = table.first()?;
        let last = table.last()?;

        if age_months <= first.age_months {
            return Some(*first);
        }
        if age_months >= last.age_months {
            return Some(*last);
        }

        // First row strictly above the requested age; always in 1..len here
        let upper = table.partition_point(|p| p.age_months <= age_months);
        let lo = &table[upper - 1];
        let hi = &table[upper];

        let span = hi.age_months - lo.age_months;
        let fraction = if span > 0.0 {
            (age_months - lo.age_months) / span
        } else {
            0.0
        };

        Some(ReferenceParameterPoint {
            age_months,
            l: lo.l + fraction * (hi.l - lo.l),
            m: lo.m + fraction * (hi.m - lo.m),
            s: lo.s + fraction * (hi.s - lo.s),
        })
    }
}

impl Default for ReferenceTableStore {
    fn default() -> Self {
        Self::embedded()
    }
}
