use serde::{Deserialize, Serialize};

use super::defaults;

/// Risk evaluation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Monte Carlo composition of traffic, weather, and airport samples.
    #[default]
    Sampled,
    /// Moment-matched closed form with a gamma queueing term.
    Analytic,
}

impl EvaluatorKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sampled" | "monte_carlo" => Some(Self::Sampled),
            "analytic" => Some(Self::Analytic),
            _ => None,
        }
    }
}

/// Risk evaluator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub strategy: EvaluatorKind,
    /// Weather multiplier above which traffic noise is injected.
    pub noise_threshold: f64,
    /// Size of the representative sample set the analytic path emits. 0 disables it.
    pub representative_samples: usize,
    /// Quadrature resolution for the analytic queueing integral.
    pub integration_steps: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            strategy: EvaluatorKind::default(),
            noise_threshold: defaults::DEFAULT_NOISE_THRESHOLD,
            representative_samples: defaults::DEFAULT_REPRESENTATIVE_SAMPLES,
            integration_steps: defaults::DEFAULT_INTEGRATION_STEPS,
        }
    }
}
