use crate::explanation::types::{TrendDirection, TrendInterpretation};
use crate::indicators::{GrowthMetric, NutritionalStatus, ProfileAccuracy};
use crate::trend::GrowthTrendPoint;

pub const INSUFFICIENT_DATA_MESSAGE: &str =
    "Insufficient data: no valid measurements to evaluate the growth trend.";

/// Builds short status messages from the latest trend points
pub struct TrendInterpretationGenerator;

impl TrendInterpretationGenerator {
    /// Status message for a series
    ///
    /// - no points: fixed insufficient-data message
    /// - one point: current value, percentile, Z-score and zone
    /// - two or more: also the percentile change since the previous point
    pub fn interpret(points: &[GrowthTrendPoint], metric: GrowthMetric) -> String {
        Self::generate(points, metric).message
    }

    /// Same as `interpret`, keeping the delta and direction alongside the text
    pub fn generate(points: &[GrowthTrendPoint], metric: GrowthMetric) -> TrendInterpretation {
        let Some(latest) = points.last() else {
            return TrendInterpretation {
                message: INSUFFICIENT_DATA_MESSAGE.to_string(),
                percentile_delta: None,
                direction: None,
            };
        };

        let mut message = Self::status(latest, metric);

        if points.len() < 2 {
            return TrendInterpretation {
                message,
                percentile_delta: None,
                direction: None,
            };
        }

        let previous = &points[points.len() - 2];
        let delta = latest.percentile - previous.percentile;
        let direction = TrendDirection::from_delta(delta);

        message.push_str(&format!(
            " Change since previous measurement: {:+.0} percentile points ({}).",
            delta,
            direction.phrase()
        ));

        TrendInterpretation {
            message,
            percentile_delta: Some(delta),
            direction: Some(direction),
        }
    }

    fn status(point: &GrowthTrendPoint, metric: GrowthMetric) -> String {
        let reference = match point.percentiles.accuracy {
            ProfileAccuracy::Exact => "",
            ProfileAccuracy::Approximate => " [approximate reference]",
        };

        let mut status = format!(
            "{} at {}: {:.2} {}, percentile {:.0}, Z-score {:+.2}, {} zone{}.",
            metric.display_name(),
            point.age_label,
            point.actual_value,
            metric.unit(),
            point.percentile,
            point.z_score,
            point.zone.as_str(),
            reference
        );

        if metric == GrowthMetric::BmiForAge {
            let nutrition = NutritionalStatus::from_bmi_z(point.z_score);
            status.push_str(&format!(" Nutritional status: {}.", nutrition.label()));
        }

        status
    }
}
