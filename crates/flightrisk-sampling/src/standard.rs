use flightrisk_core::errors::FlightRiskResult;
use flightrisk_core::traits::ISampler;
use rand::rngs::StdRng;

use crate::family::Family;

/// Sequential sampler: every draw comes from the caller's generator in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSampler;

impl StandardSampler {
    pub fn new() -> Self {
        Self
    }

    fn draw(rng: &mut StdRng, family: Family, n: usize) -> Vec<f64> {
        if let Family::Constant(v) = family {
            return vec![v; n];
        }
        (0..n).map(|_| family.draw(rng)).collect()
    }
}

impl ISampler for StandardSampler {
    fn triangular(
        &self,
        rng: &mut StdRng,
        low: f64,
        mode: f64,
        high: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(Self::draw(rng, Family::triangular(low, mode, high)?, n))
    }

    fn gamma(
        &self,
        rng: &mut StdRng,
        mean: f64,
        scale: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(Self::draw(rng, Family::gamma(mean, scale)?, n))
    }

    fn normal(
        &self,
        rng: &mut StdRng,
        mean: f64,
        std_dev: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(Self::draw(rng, Family::normal(mean, std_dev)?, n))
    }

    fn uniform(
        &self,
        rng: &mut StdRng,
        low: f64,
        high: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(Self::draw(rng, Family::uniform(low, high)?, n))
    }

    fn name(&self) -> &str {
        "standard"
    }
}
