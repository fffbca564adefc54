use flightrisk_core::config::PlannerConfig;
use flightrisk_core::constants::SECS_PER_MINUTE;
use serde::{Deserialize, Serialize};

/// One trip to plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub airport_code: String,
    /// Latest moment the traveler must be at the gate, epoch seconds.
    pub gate_deadline_epoch: i64,
    pub has_bags: bool,
    pub precheck: bool,
    pub time_to_kill_mins: i64,
}

impl TripRequest {
    /// Request with traveler preferences taken from the planner config.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        airport_code: impl Into<String>,
        gate_deadline_epoch: i64,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            airport_code: airport_code.into(),
            gate_deadline_epoch,
            has_bags: config.has_bags,
            precheck: config.precheck,
            time_to_kill_mins: config.time_to_kill_mins,
        }
    }

    pub fn with_bags(mut self, has_bags: bool) -> Self {
        self.has_bags = has_bags;
        self
    }

    pub fn with_precheck(mut self, precheck: bool) -> Self {
        self.precheck = precheck;
        self
    }

    pub fn with_time_to_kill(mut self, minutes: i64) -> Self {
        self.time_to_kill_mins = minutes.max(0);
        self
    }

    /// Minutes of slack when leaving at `departure_epoch`:
    /// `(deadline − cutoff − time_to_kill − departure) / 60`.
    pub fn buffer_minutes(&self, departure_epoch: i64, boarding_cutoff_mins: i64) -> f64 {
        let offset_secs = (boarding_cutoff_mins + self.time_to_kill_mins) as f64 * SECS_PER_MINUTE;
        (self.gate_deadline_epoch as f64 - offset_secs - departure_epoch as f64) / SECS_PER_MINUTE
    }
}
