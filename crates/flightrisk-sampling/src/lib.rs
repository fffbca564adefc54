//! # flightrisk-sampling
//!
//! Numeric primitives under the risk evaluator.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `family` | Validated distribution parameters, degenerate inputs collapse to constants |
//! | `standard` | Sequential sampler on one seeded generator |
//! | `parallel` | rayon-chunked sampler, one derived generator per chunk |
//! | `moments` | Closed-form mean / variance per family |
//! | `stats` | Mean, std dev, interpolated percentile, fraction below |

pub mod family;
pub mod moments;
pub mod parallel;
pub mod standard;
pub mod stats;

use flightrisk_core::config::{SamplerBackend, SamplingConfig};
use flightrisk_core::traits::ISampler;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use family::Family;
pub use moments::Moments;
pub use parallel::ParallelSampler;
pub use standard::StandardSampler;

/// Build the sampler backend named by the config.
pub fn sampler_for(config: &SamplingConfig) -> Box<dyn ISampler> {
    match config.backend {
        SamplerBackend::Standard => Box::new(StandardSampler::new()),
        SamplerBackend::Parallel => Box::new(ParallelSampler::with_chunk_size(
            config.parallel_chunk_size,
        )),
    }
}

/// Generator for one evaluation: fixed seed when configured, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
