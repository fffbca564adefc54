use serde::{Deserialize, Serialize};

use super::defaults;

/// Where collaborator data comes from. Simulation is an explicit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    Live,
    #[default]
    Simulated,
}

impl DataSourceKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "live" => Some(Self::Live),
            "simulated" | "mock" => Some(Self::Simulated),
            _ => None,
        }
    }
}

/// Orchestration-layer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub data_source: DataSourceKind,
    pub has_bags: bool,
    pub precheck: bool,
    /// Extra minutes the traveler wants at the gate.
    pub time_to_kill_mins: i64,
    /// Offset applied to epochs when deriving airport-local time of day.
    pub utc_offset_minutes: i32,
    /// TTL for cached weather / live-wait fetches. `None` disables the cache.
    pub fetch_cache_ttl_secs: Option<u64>,
    /// Per-fetch budget for each collaborator call.
    pub provider_timeout_ms: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceKind::default(),
            has_bags: defaults::DEFAULT_HAS_BAGS,
            precheck: defaults::DEFAULT_PRECHECK,
            time_to_kill_mins: defaults::DEFAULT_TIME_TO_KILL_MINS,
            utc_offset_minutes: defaults::DEFAULT_UTC_OFFSET_MINUTES,
            fetch_cache_ttl_secs: None,
            provider_timeout_ms: defaults::DEFAULT_PROVIDER_TIMEOUT_MS,
        }
    }
}
