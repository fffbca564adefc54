use flightrisk_core::config::defaults::DEFAULT_PARALLEL_CHUNK_SIZE;
use flightrisk_core::errors::FlightRiskResult;
use flightrisk_core::traits::ISampler;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::family::Family;

/// rayon-backed sampler for large sample counts.
///
/// The caller's generator only hands out one seed per chunk; each chunk then
/// draws from its own `StdRng`. Output is deterministic for a given seed and
/// chunk size, and independent of the thread pool size.
#[derive(Debug, Clone, Copy)]
pub struct ParallelSampler {
    chunk_size: usize,
}

impl ParallelSampler {
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_PARALLEL_CHUNK_SIZE)
    }

    /// A chunk size of 0 is treated as 1.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn draw(&self, rng: &mut StdRng, family: Family, n: usize) -> Vec<f64> {
        if let Family::Constant(v) = family {
            return vec![v; n];
        }
        let chunks: Vec<(u64, usize)> = (0..n)
            .step_by(self.chunk_size)
            .map(|start| (rng.gen::<u64>(), self.chunk_size.min(n - start)))
            .collect();

        let parts: Vec<Vec<f64>> = chunks
            .into_par_iter()
            .map(|(seed, len)| {
                let mut chunk_rng = StdRng::seed_from_u64(seed);
                (0..len).map(|_| family.draw(&mut chunk_rng)).collect()
            })
            .collect();
        parts.concat()
    }
}

impl Default for ParallelSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ISampler for ParallelSampler {
    fn triangular(
        &self,
        rng: &mut StdRng,
        low: f64,
        mode: f64,
        high: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(self.draw(rng, Family::triangular(low, mode, high)?, n))
    }

    fn gamma(
        &self,
        rng: &mut StdRng,
        mean: f64,
        scale: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(self.draw(rng, Family::gamma(mean, scale)?, n))
    }

    fn normal(
        &self,
        rng: &mut StdRng,
        mean: f64,
        std_dev: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(self.draw(rng, Family::normal(mean, std_dev)?, n))
    }

    fn uniform(
        &self,
        rng: &mut StdRng,
        low: f64,
        high: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>> {
        Ok(self.draw(rng, Family::uniform(low, high)?, n))
    }

    fn name(&self) -> &str {
        "parallel"
    }
}
