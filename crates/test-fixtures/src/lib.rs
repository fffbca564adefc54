//! Shared builders and scenario fixtures for FlightRisk tests.
//!
//! Builders produce realistic, fully-validated inputs; scenario files under
//! `scenarios/` describe end-to-end evaluation cases loaded with
//! [`load_scenarios`].

use std::path::PathBuf;

use flightrisk_core::models::{
    AirportDistribution, AirportProfile, AirportTier, CorridorPoint, SegmentModel,
    SegmentSamples, TrafficEstimate, WeatherCondition, WeatherReport, WeatherSample,
};
use flightrisk_core::traits::ISampler;
use flightrisk_sampling::{seeded_rng, StandardSampler};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Seed used by builders unless a test picks its own.
pub const FIXTURE_SEED: u64 = 0x5EED;

/// Traffic estimate from minutes.
///
/// # Panics
/// Panics on invalid bounds; fixtures are expected to be valid.
pub fn traffic(optimistic: f64, likely: f64, pessimistic: f64) -> TrafficEstimate {
    TrafficEstimate::from_minutes(optimistic, likely, pessimistic)
        .unwrap_or_else(|e| panic!("invalid traffic fixture: {e}"))
}

/// Same condition at every corridor point, 60°F.
pub fn weather(condition: WeatherCondition) -> WeatherReport {
    WeatherReport::uniform(condition, 60.0)
}

pub fn clear_weather() -> WeatherReport {
    weather(WeatherCondition::Clear)
}

/// Distinct conditions at start, midpoint, destination.
pub fn corridor(
    start: WeatherCondition,
    midpoint: WeatherCondition,
    destination: WeatherCondition,
) -> WeatherReport {
    WeatherReport::new()
        .with_point(CorridorPoint::Start, WeatherSample::new(start, 60.0))
        .with_point(CorridorPoint::Midpoint, WeatherSample::new(midpoint, 60.0))
        .with_point(CorridorPoint::Destination, WeatherSample::new(destination, 60.0))
}

/// Builder for [`AirportDistribution`] with explicit segment models.
#[derive(Debug, Clone)]
pub struct AirportBuilder {
    profile: AirportProfile,
    samples: usize,
    seed: u64,
}

impl AirportBuilder {
    /// Tier-3 airport with gamma check-in / security and a tight normal walk.
    pub fn new(code: &str) -> Self {
        Self {
            profile: AirportProfile {
                airport_code: code.to_string(),
                tier: AirportTier::Tier3,
                checkin: SegmentModel::Gamma { mean: 3.0, scale: 1.0 },
                security: SegmentModel::Gamma { mean: 3.0, scale: 1.5 },
                walk: SegmentModel::Normal { mean: 3.0, std_dev: 1.0 },
                used_live_data: false,
            },
            samples: 1_000,
            seed: FIXTURE_SEED,
        }
    }

    /// Segment means in minutes with the tier-1 spread conventions.
    pub fn with_means(code: &str, checkin: f64, security: f64, walk: f64) -> Self {
        Self::new(code)
            .tier(AirportTier::Tier1)
            .checkin(SegmentModel::Gamma { mean: checkin, scale: 4.0 })
            .security(SegmentModel::Gamma { mean: security, scale: 4.0 })
            .walk(SegmentModel::Normal { mean: walk, std_dev: 5.0 })
    }

    pub fn tier(mut self, tier: AirportTier) -> Self {
        self.profile.tier = tier;
        self
    }

    pub fn checkin(mut self, model: SegmentModel) -> Self {
        self.profile.checkin = model;
        self
    }

    pub fn security(mut self, model: SegmentModel) -> Self {
        self.profile.security = model;
        self
    }

    pub fn walk(mut self, model: SegmentModel) -> Self {
        self.profile.walk = model;
        self
    }

    pub fn samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Draw the three segment sample sets.
    ///
    /// # Panics
    /// Panics if a segment model has non-finite parameters.
    pub fn build(self) -> AirportDistribution {
        let sampler = StandardSampler::new();
        let mut rng = seeded_rng(Some(self.seed));
        let mut draw = |model: &SegmentModel, clamp: bool| {
            let xs = match *model {
                SegmentModel::Gamma { mean, scale } => {
                    sampler.gamma(&mut rng, mean, scale, self.samples)
                }
                SegmentModel::Uniform { low, high } => {
                    sampler.uniform(&mut rng, low, high, self.samples)
                }
                SegmentModel::Normal { mean, std_dev } => {
                    sampler.normal(&mut rng, mean, std_dev, self.samples)
                }
            }
            .unwrap_or_else(|e| panic!("invalid airport fixture: {e}"));
            let xs = if clamp {
                xs.into_iter().map(|x| x.max(0.0)).collect()
            } else {
                xs
            };
            SegmentSamples::new(xs)
        };
        let checkin = draw(&self.profile.checkin, false);
        let security = draw(&self.profile.security, false);
        let walk = draw(&self.profile.walk, true);
        AirportDistribution {
            profile: self.profile,
            checkin,
            security,
            walk,
        }
    }
}

/// One end-to-end evaluation case from `scenarios/*.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// `[optimistic, likely, pessimistic]` minutes.
    pub traffic_minutes: [f64; 3],
    /// `[start, midpoint, destination]` condition names.
    pub weather: [String; 3],
    pub checkin: SegmentModel,
    pub security: SegmentModel,
    pub walk: SegmentModel,
    pub buffer_minutes: f64,
    /// Labels the evaluators may report, e.g. `["VERY_LOW", "LOW"]`.
    pub expected_labels: Vec<String>,
}

impl Scenario {
    pub fn traffic(&self) -> TrafficEstimate {
        let [o, l, p] = self.traffic_minutes;
        traffic(o, l, p)
    }

    pub fn weather(&self) -> WeatherReport {
        let [s, m, d] = &self.weather;
        corridor(
            WeatherCondition::parse(s),
            WeatherCondition::parse(m),
            WeatherCondition::parse(d),
        )
    }

    pub fn airport(&self, samples: usize) -> AirportDistribution {
        AirportBuilder::new("SCN")
            .checkin(self.checkin)
            .security(self.security)
            .walk(self.walk)
            .samples(samples)
            .build()
    }
}

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

/// Load and deserialize a JSON fixture file under `scenarios/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// All evaluation scenarios.
pub fn load_scenarios() -> Vec<Scenario> {
    load_fixture("evaluation.json")
}
