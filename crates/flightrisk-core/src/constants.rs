/// FlightRisk engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of Monte Carlo iterations for a sampled evaluation.
pub const MIN_ITERATIONS: usize = 1_000;

/// Seconds per minute, used when converting collaborator durations.
pub const SECS_PER_MINUTE: f64 = 60.0;

/// Amount (seconds) by which an out-of-order traffic bound is nudged past `likely`.
pub const TRAFFIC_REPAIR_NUDGE_SECS: f64 = 60.0;

/// Risk label thresholds on success probability (percent).
pub const VERY_LOW_RISK_MIN_PROBABILITY: f64 = 95.0;
pub const LOW_RISK_MIN_PROBABILITY: f64 = 80.0;
pub const MODERATE_RISK_MIN_PROBABILITY: f64 = 60.0;

/// Percentile reported as the pessimistic ETA.
pub const ETA_PERCENTILE: f64 = 0.95;
