use serde::{Deserialize, Serialize};

use super::{RiskLabel, WeatherCondition};
use crate::config::EvaluatorKind;

/// Mean minutes spent in each leg of the trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentBreakdown {
    pub drive: f64,
    pub checkin: f64,
    pub security: f64,
    pub walk: f64,
}

impl SegmentBreakdown {
    pub fn total(&self) -> f64 {
        self.drive + self.checkin + self.security + self.walk
    }
}

/// Raw evaluator output, before the risk label is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMetrics {
    pub mean_eta: f64,
    pub p95_eta: f64,
    /// Percent, 0–100.
    pub success_probability: f64,
    pub buffer_minutes: f64,
    pub weather_multiplier: f64,
    pub primary_condition: WeatherCondition,
    pub model_confidence: u8,
    pub segment_breakdown: SegmentBreakdown,
    pub sample_set: Vec<f64>,
    pub strategy: EvaluatorKind,
}

/// The engine's sole output.
///
/// Fields are read-only: `risk_label` is always derived from
/// `success_probability` and `safety_margin` from `buffer − p95_eta`.
/// Deserialization rebuilds the report, so a stored label is never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRiskReport")]
pub struct RiskReport {
    mean_eta: f64,
    p95_eta: f64,
    success_probability: f64,
    risk_label: RiskLabel,
    safety_margin: f64,
    weather_multiplier: f64,
    primary_condition: WeatherCondition,
    model_confidence: u8,
    segment_breakdown: SegmentBreakdown,
    sample_set: Vec<f64>,
    strategy: EvaluatorKind,
}

/// Wire form of [`RiskReport`]. Derived fields other than `safety_margin`
/// (which carries the buffer) are ignored.
#[derive(Deserialize)]
struct RawRiskReport {
    mean_eta: f64,
    p95_eta: f64,
    success_probability: f64,
    safety_margin: f64,
    weather_multiplier: f64,
    primary_condition: WeatherCondition,
    model_confidence: u8,
    segment_breakdown: SegmentBreakdown,
    #[serde(default)]
    sample_set: Vec<f64>,
    strategy: EvaluatorKind,
}

impl From<RawRiskReport> for RiskReport {
    fn from(raw: RawRiskReport) -> Self {
        Self::new(RiskMetrics {
            mean_eta: raw.mean_eta,
            p95_eta: raw.p95_eta,
            success_probability: raw.success_probability,
            buffer_minutes: raw.safety_margin + raw.p95_eta,
            weather_multiplier: raw.weather_multiplier,
            primary_condition: raw.primary_condition,
            model_confidence: raw.model_confidence,
            segment_breakdown: raw.segment_breakdown,
            sample_set: raw.sample_set,
            strategy: raw.strategy,
        })
    }
}

impl RiskReport {
    pub fn new(metrics: RiskMetrics) -> Self {
        let success_probability = metrics.success_probability.clamp(0.0, 100.0);
        Self {
            mean_eta: metrics.mean_eta,
            p95_eta: metrics.p95_eta,
            success_probability,
            risk_label: RiskLabel::from_probability(success_probability),
            safety_margin: metrics.buffer_minutes - metrics.p95_eta,
            weather_multiplier: metrics.weather_multiplier,
            primary_condition: metrics.primary_condition,
            model_confidence: metrics.model_confidence,
            segment_breakdown: metrics.segment_breakdown,
            sample_set: metrics.sample_set,
            strategy: metrics.strategy,
        }
    }

    /// Mean total trip time in minutes.
    pub fn mean_eta(&self) -> f64 {
        self.mean_eta
    }

    /// 95th-percentile total trip time in minutes.
    pub fn p95_eta(&self) -> f64 {
        self.p95_eta
    }

    /// Percent chance of reaching the gate inside the buffer.
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    pub fn risk_label(&self) -> RiskLabel {
        self.risk_label
    }

    /// Minutes left over at the 95th percentile; negative when short.
    pub fn safety_margin(&self) -> f64 {
        self.safety_margin
    }

    pub fn weather_multiplier(&self) -> f64 {
        self.weather_multiplier
    }

    pub fn primary_condition(&self) -> WeatherCondition {
        self.primary_condition
    }

    pub fn model_confidence(&self) -> u8 {
        self.model_confidence
    }

    pub fn segment_breakdown(&self) -> &SegmentBreakdown {
        &self.segment_breakdown
    }

    /// Outcome vector kept for downstream visualization.
    pub fn sample_set(&self) -> &[f64] {
        &self.sample_set
    }

    pub fn strategy(&self) -> EvaluatorKind {
        self.strategy
    }
}
