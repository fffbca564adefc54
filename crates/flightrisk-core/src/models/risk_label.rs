use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    LOW_RISK_MIN_PROBABILITY, MODERATE_RISK_MIN_PROBABILITY, VERY_LOW_RISK_MIN_PROBABILITY,
};

/// Four-tier risk label, a pure function of success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLabel {
    VeryLow,
    Low,
    Moderate,
    Critical,
}

impl RiskLabel {
    /// `≥95 → VeryLow`, `≥80 → Low`, `≥60 → Moderate`, else `Critical`.
    /// NaN is `Critical`.
    pub fn from_probability(success_probability: f64) -> Self {
        if success_probability >= VERY_LOW_RISK_MIN_PROBABILITY {
            Self::VeryLow
        } else if success_probability >= LOW_RISK_MIN_PROBABILITY {
            Self::Low
        } else if success_probability >= MODERATE_RISK_MIN_PROBABILITY {
            Self::Moderate
        } else {
            Self::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "VERY_LOW",
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
