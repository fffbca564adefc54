use flightrisk_core::errors::EvaluationError;
use flightrisk_core::models::{CorridorPoint, WeatherCondition, WeatherReport};
use serde::{Deserialize, Serialize};

use crate::catalogue::{self, ConditionImpact};
use crate::weights::CorridorWeights;

/// Weather effect on the drive segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    /// Weighted multiplier rounded to two decimals.
    pub multiplier: f64,
    /// Condition at the destination.
    pub primary_condition: WeatherCondition,
    /// Noise level of the primary condition.
    pub volatility: f64,
}

impl WeatherImpact {
    /// Clear weather at every point.
    pub fn clear() -> Self {
        let impact = ConditionImpact::of(WeatherCondition::Clear);
        Self {
            multiplier: impact.multiplier,
            primary_condition: WeatherCondition::Clear,
            volatility: impact.volatility,
        }
    }

    /// Whether noise should widen the traffic distribution.
    pub fn is_noisy(&self, noise_threshold: f64) -> bool {
        self.multiplier > noise_threshold
    }
}

/// Weighted corridor model.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherImpactModel {
    weights: CorridorWeights,
}

impl WeatherImpactModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: CorridorWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &CorridorWeights {
        &self.weights
    }

    /// `M = Σ w(point) × multiplier(condition) / Σ w`.
    ///
    /// Every corridor point must be present; a gap is a missing input, not
    /// clear weather.
    pub fn calculate(&self, report: &WeatherReport) -> Result<WeatherImpact, EvaluationError> {
        let missing = report.missing_points();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
            return Err(EvaluationError::MissingInput {
                input: format!("weather at {}", names.join(", ")),
            });
        }

        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for point in CorridorPoint::ALL {
            let w = self.weights.get(point);
            let condition = report
                .condition_at(point)
                .unwrap_or(WeatherCondition::Clear);
            weighted += w * catalogue::multiplier(condition);
            total_weight += w;
        }
        if total_weight <= 0.0 || !total_weight.is_finite() {
            return Err(EvaluationError::InvalidParameters {
                field: "corridor_weights".to_string(),
                reason: format!("weights must sum to a positive value, got {total_weight}"),
            });
        }

        let primary_condition = report
            .condition_at(CorridorPoint::Destination)
            .unwrap_or(WeatherCondition::Clear);
        let multiplier = round2(weighted / total_weight);
        tracing::trace!(
            multiplier,
            primary_condition = %primary_condition,
            "weather impact computed"
        );
        Ok(WeatherImpact {
            multiplier,
            primary_condition,
            volatility: catalogue::volatility(primary_condition),
        })
    }
}

/// [`WeatherImpactModel::calculate`] with the default destination-biased weights.
pub fn calculate_weather_impact(report: &WeatherReport) -> Result<WeatherImpact, EvaluationError> {
    WeatherImpactModel::new().calculate(report)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
