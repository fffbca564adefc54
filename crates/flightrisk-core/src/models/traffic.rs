use serde::{Deserialize, Serialize};

use crate::constants::{SECS_PER_MINUTE, TRAFFIC_REPAIR_NUDGE_SECS};
use crate::errors::EvaluationError;

/// Three-point drive-time estimate from the traffic collaborator.
///
/// Construction validates and repairs: every bound must be finite and
/// non-negative, and `optimistic ≤ likely ≤ pessimistic` is restored by
/// nudging an out-of-order bound one minute past `likely` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrafficEstimate")]
pub struct TrafficEstimate {
    optimistic_seconds: f64,
    likely_seconds: f64,
    pessimistic_seconds: f64,
}

#[derive(Deserialize)]
struct RawTrafficEstimate {
    optimistic_seconds: f64,
    likely_seconds: f64,
    pessimistic_seconds: f64,
}

impl TryFrom<RawTrafficEstimate> for TrafficEstimate {
    type Error = EvaluationError;

    fn try_from(raw: RawTrafficEstimate) -> Result<Self, Self::Error> {
        Self::new(
            raw.optimistic_seconds,
            raw.likely_seconds,
            raw.pessimistic_seconds,
        )
    }
}

impl TrafficEstimate {
    /// Build an estimate from durations in seconds.
    pub fn new(
        optimistic_seconds: f64,
        likely_seconds: f64,
        pessimistic_seconds: f64,
    ) -> Result<Self, EvaluationError> {
        for (field, value) in [
            ("optimistic_seconds", optimistic_seconds),
            ("likely_seconds", likely_seconds),
            ("pessimistic_seconds", pessimistic_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EvaluationError::InvalidParameters {
                    field: field.to_string(),
                    reason: format!("must be finite and non-negative, got {value}"),
                });
            }
        }

        let mut optimistic = optimistic_seconds;
        let mut pessimistic = pessimistic_seconds;
        if optimistic > likely_seconds {
            optimistic = (likely_seconds - TRAFFIC_REPAIR_NUDGE_SECS).max(0.0);
            tracing::debug!(
                original = optimistic_seconds,
                repaired = optimistic,
                "optimistic traffic bound above likely; nudged"
            );
        }
        if pessimistic < likely_seconds {
            pessimistic = likely_seconds + TRAFFIC_REPAIR_NUDGE_SECS;
            tracing::debug!(
                original = pessimistic_seconds,
                repaired = pessimistic,
                "pessimistic traffic bound below likely; nudged"
            );
        }

        Ok(Self {
            optimistic_seconds: optimistic,
            likely_seconds,
            pessimistic_seconds: pessimistic,
        })
    }

    /// Build an estimate from durations in minutes.
    pub fn from_minutes(
        optimistic_minutes: f64,
        likely_minutes: f64,
        pessimistic_minutes: f64,
    ) -> Result<Self, EvaluationError> {
        Self::new(
            optimistic_minutes * SECS_PER_MINUTE,
            likely_minutes * SECS_PER_MINUTE,
            pessimistic_minutes * SECS_PER_MINUTE,
        )
    }

    pub fn optimistic_seconds(&self) -> f64 {
        self.optimistic_seconds
    }

    pub fn likely_seconds(&self) -> f64 {
        self.likely_seconds
    }

    pub fn pessimistic_seconds(&self) -> f64 {
        self.pessimistic_seconds
    }

    /// `(optimistic, likely, pessimistic)` in minutes.
    pub fn minutes(&self) -> (f64, f64, f64) {
        (
            self.optimistic_seconds / SECS_PER_MINUTE,
            self.likely_seconds / SECS_PER_MINUTE,
            self.pessimistic_seconds / SECS_PER_MINUTE,
        )
    }
}

/// Traffic collaborator output: the estimate plus an opaque route geometry
/// token, forwarded to the weather collaborator by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub estimate: TrafficEstimate,
    pub route_token: String,
}
