use crate::config::EvaluatorKind;
use crate::errors::FlightRiskResult;
use crate::models::{AirportDistribution, RiskReport, TrafficEstimate, WeatherReport};

/// Turns traffic, weather, and airport inputs into a risk report.
///
/// Inputs are optional so that absent collaborator data surfaces as
/// `EvaluationError::MissingInput` instead of being silently defaulted.
pub trait IRiskEvaluator: Send + Sync {
    fn kind(&self) -> EvaluatorKind;

    /// Evaluate the chance of reaching the gate within `buffer_minutes`.
    fn evaluate(
        &self,
        traffic: Option<&TrafficEstimate>,
        weather: Option<&WeatherReport>,
        airport: &AirportDistribution,
        buffer_minutes: f64,
    ) -> FlightRiskResult<RiskReport>;
}
