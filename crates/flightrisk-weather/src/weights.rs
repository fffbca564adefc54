use flightrisk_core::models::CorridorPoint;
use serde::{Deserialize, Serialize};

/// Relative weight of each corridor point. Normalized on use, so only the
/// ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorridorWeights {
    pub start: f64,
    pub midpoint: f64,
    pub destination: f64,
}

impl CorridorWeights {
    pub fn get(&self, point: CorridorPoint) -> f64 {
        match point {
            CorridorPoint::Start => self.start,
            CorridorPoint::Midpoint => self.midpoint,
            CorridorPoint::Destination => self.destination,
        }
    }

    pub fn total(&self) -> f64 {
        CorridorPoint::ALL.iter().map(|p| self.get(*p)).sum()
    }
}

impl Default for CorridorWeights {
    fn default() -> Self {
        Self {
            start: 0.15,
            midpoint: 0.25,
            destination: 0.65,
        }
    }
}
