//! Input checks shared by both evaluators.

use flightrisk_core::errors::EvaluationError;
use flightrisk_core::models::{TrafficEstimate, WeatherReport};
use flightrisk_weather::{WeatherImpact, WeatherImpactModel};

/// Unwrap both collaborator inputs and compute the weather impact.
pub fn resolve<'a>(
    traffic: Option<&'a TrafficEstimate>,
    weather: Option<&WeatherReport>,
    model: &WeatherImpactModel,
) -> Result<(&'a TrafficEstimate, WeatherImpact), EvaluationError> {
    let traffic = traffic.ok_or_else(|| EvaluationError::MissingInput {
        input: "traffic".to_string(),
    })?;
    let weather = weather.ok_or_else(|| EvaluationError::MissingInput {
        input: "weather".to_string(),
    })?;
    Ok((traffic, model.calculate(weather)?))
}

pub fn check_buffer(buffer_minutes: f64) -> Result<(), EvaluationError> {
    if buffer_minutes.is_finite() {
        Ok(())
    } else {
        Err(EvaluationError::InvalidParameters {
            field: "buffer_minutes".to_string(),
            reason: format!("must be finite, got {buffer_minutes}"),
        })
    }
}
