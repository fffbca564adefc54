use serde::{Deserialize, Serialize};

/// Airport volume class, ordered busiest → quietest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AirportTier {
    /// Top ~30 hub airports.
    Tier1,
    /// Secondary hubs.
    Tier2,
    /// Everything else.
    Tier3,
}

impl AirportTier {
    pub fn number(&self) -> u8 {
        match self {
            Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
        }
    }
}

/// Parametric family of one airport segment, in minutes.
///
/// Gamma segments are parameterized by `(mean, scale)`; the shape is
/// `mean / scale`, so variance (`mean × scale`) grows with the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum SegmentModel {
    Gamma { mean: f64, scale: f64 },
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
}

/// Derived per-airport queueing parameters for check-in, security, and walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportProfile {
    pub airport_code: String,
    pub tier: AirportTier,
    pub checkin: SegmentModel,
    pub security: SegmentModel,
    pub walk: SegmentModel,
    /// True when a live security-wait signal replaced the tier heuristic.
    pub used_live_data: bool,
}

/// Drawn samples for one segment plus their mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentSamples {
    pub samples: Vec<f64>,
    pub mean: f64,
}

impl SegmentSamples {
    pub fn new(samples: Vec<f64>) -> Self {
        let mean = if samples.is_empty() {
            0.0
        } else {
            samples.iter().sum::<f64>() / samples.len() as f64
        };
        Self { samples, mean }
    }
}

/// Airport-time distribution: the profile it was drawn from plus three
/// independent sample sets. An empty sample set is valid for evaluators
/// that work from the profile alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDistribution {
    pub profile: AirportProfile,
    pub checkin: SegmentSamples,
    pub security: SegmentSamples,
    pub walk: SegmentSamples,
}

impl AirportDistribution {
    /// Number of complete (check-in, security, walk) sample triples.
    pub fn sample_count(&self) -> usize {
        self.checkin
            .samples
            .len()
            .min(self.security.samples.len())
            .min(self.walk.samples.len())
    }

    /// Element-wise total airport time for the first `sample_count()` triples.
    pub fn total_samples(&self) -> Vec<f64> {
        self.checkin
            .samples
            .iter()
            .zip(&self.security.samples)
            .zip(&self.walk.samples)
            .map(|((c, s), w)| c + s + w)
            .collect()
    }

    /// Sum of the three segment means.
    pub fn mean_total(&self) -> f64 {
        self.checkin.mean + self.security.mean + self.walk.mean
    }
}
