use serde::{Deserialize, Serialize};

use super::defaults;

/// Temporal optimizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Spacing between candidate departures, seconds.
    pub stride_secs: i64,
    /// Number of grid slots scanned backward from the anchor.
    pub max_slots: usize,
    /// Boarding cutoff subtracted from the gate deadline to anchor the grid.
    pub boarding_cutoff_mins: i64,
    /// Candidates earlier than `now + min_lead_secs` are unusable.
    pub min_lead_secs: i64,
    /// Success probability (percent) required for the recommended departure.
    pub risk_threshold: f64,
    /// Success probability (percent) defining the drop-dead time.
    pub drop_dead_threshold: f64,
    /// Overall budget for one optimization. `None` means unbounded.
    pub timeout_ms: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            stride_secs: defaults::DEFAULT_STRIDE_SECS,
            max_slots: defaults::DEFAULT_MAX_SLOTS,
            boarding_cutoff_mins: defaults::DEFAULT_BOARDING_CUTOFF_MINS,
            min_lead_secs: defaults::DEFAULT_MIN_LEAD_SECS,
            risk_threshold: defaults::DEFAULT_RISK_THRESHOLD,
            drop_dead_threshold: defaults::DEFAULT_DROP_DEAD_THRESHOLD,
            timeout_ms: None,
        }
    }
}
