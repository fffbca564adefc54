//! Seeded stand-ins for the collaborators, used by the `simulated` data source.
//!
//! With a seed, each answer is a pure function of the seed and the request, so
//! repeated fetches for the same slot agree.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use flightrisk_core::errors::FlightRiskResult;
use flightrisk_core::models::{
    CorridorPoint, RouteEstimate, TrafficEstimate, WeatherCondition, WeatherReport, WeatherSample,
};
use flightrisk_core::traits::{ILiveWaitProvider, ITrafficProvider, IWeatherProvider};
use flightrisk_sampling::seeded_rng;
use rand::rngs::StdRng;
use rand::Rng;

/// Likely drive time range, minutes.
pub const BASE_DRIVE_MINS: (u32, u32) = (45, 65);
pub const OPTIMISTIC_DELTA_MINS: f64 = 10.0;
pub const PESSIMISTIC_DELTA_MINS: f64 = 15.0;
/// Temperature range, °F.
pub const TEMPERATURE_RANGE_F: (f64, f64) = (50.0, 70.0);

fn rng_for(seed: Option<u64>, key: impl Hash) -> StdRng {
    seeded_rng(seed.map(|s| {
        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        key.hash(&mut hasher);
        hasher.finish()
    }))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTraffic {
    seed: Option<u64>,
}

impl SimulatedTraffic {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl ITrafficProvider for SimulatedTraffic {
    async fn route_estimate(
        &self,
        origin: &str,
        destination: &str,
        departure_epoch: i64,
    ) -> FlightRiskResult<RouteEstimate> {
        let mut rng = rng_for(self.seed, (origin, destination, departure_epoch));
        let base = f64::from(rng.gen_range(BASE_DRIVE_MINS.0..=BASE_DRIVE_MINS.1));
        let estimate = TrafficEstimate::from_minutes(
            base - OPTIMISTIC_DELTA_MINS,
            base,
            base + PESSIMISTIC_DELTA_MINS,
        )?;
        Ok(RouteEstimate {
            estimate,
            route_token: format!("simulated:{origin}->{destination}"),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedWeather {
    seed: Option<u64>,
}

impl SimulatedWeather {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl IWeatherProvider for SimulatedWeather {
    async fn route_weather(&self, route_token: &str) -> FlightRiskResult<WeatherReport> {
        let mut rng = rng_for(self.seed, route_token);
        let report = CorridorPoint::ALL
            .into_iter()
            .fold(WeatherReport::new(), |report, point| {
                let temperature = rng.gen_range(TEMPERATURE_RANGE_F.0..=TEMPERATURE_RANGE_F.1);
                report.with_point(point, WeatherSample::new(WeatherCondition::Clouds, temperature))
            });
        Ok(report)
    }
}

/// No simulated airport has a live feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLiveWait;

impl ILiveWaitProvider for SimulatedLiveWait {
    async fn security_wait_minutes(&self, _airport_code: &str) -> FlightRiskResult<Option<f64>> {
        Ok(None)
    }
}
