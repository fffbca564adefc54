use std::sync::Arc;

use flightrisk_core::errors::FlightRiskResult;
use flightrisk_core::models::{AirportDistribution, AirportProfile, SegmentModel, SegmentSamples};
use flightrisk_core::traits::ISampler;
use flightrisk_sampling::StandardSampler;
use rand::rngs::StdRng;

use crate::profile::{build_profile, ProfileRequest};

/// Airport queue model: profile derivation plus segment sampling.
pub struct AirportQueueModel {
    sampler: Arc<dyn ISampler>,
}

impl AirportQueueModel {
    pub fn new(sampler: Arc<dyn ISampler>) -> Self {
        Self { sampler }
    }

    /// Three independent sample sets of `n` draws each. Walk time is
    /// clamped at zero.
    pub fn distribution(
        &self,
        request: &ProfileRequest,
        rng: &mut StdRng,
        n: usize,
    ) -> FlightRiskResult<AirportDistribution> {
        let profile = build_profile(request)?;
        self.sample_profile(profile, rng, n)
    }

    /// Sample an already derived profile.
    pub fn sample_profile(
        &self,
        profile: AirportProfile,
        rng: &mut StdRng,
        n: usize,
    ) -> FlightRiskResult<AirportDistribution> {
        let checkin = self.draw(&profile.checkin, rng, n)?;
        let security = self.draw(&profile.security, rng, n)?;
        let walk = self
            .draw(&profile.walk, rng, n)?
            .into_iter()
            .map(|x| x.max(0.0))
            .collect();

        Ok(AirportDistribution {
            profile,
            checkin: SegmentSamples::new(checkin),
            security: SegmentSamples::new(security),
            walk: SegmentSamples::new(walk),
        })
    }

    fn draw(&self, model: &SegmentModel, rng: &mut StdRng, n: usize) -> FlightRiskResult<Vec<f64>> {
        match *model {
            SegmentModel::Gamma { mean, scale } => self.sampler.gamma(rng, mean, scale, n),
            SegmentModel::Uniform { low, high } => self.sampler.uniform(rng, low, high, n),
            SegmentModel::Normal { mean, std_dev } => self.sampler.normal(rng, mean, std_dev, n),
        }
    }
}

impl Default for AirportQueueModel {
    fn default() -> Self {
        Self::new(Arc::new(StandardSampler::new()))
    }
}
