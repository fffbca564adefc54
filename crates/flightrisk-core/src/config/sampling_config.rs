use serde::{Deserialize, Serialize};

use super::defaults;

/// Which sampler implementation draws the Monte Carlo samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SamplerBackend {
    /// Sequential draws from a single seeded generator.
    #[default]
    Standard,
    /// Chunked draws across the rayon pool, one derived generator per chunk.
    Parallel,
}

impl SamplerBackend {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "parallel" => Some(Self::Parallel),
            _ => None,
        }
    }
}

/// Distribution sampler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub backend: SamplerBackend,
    /// Monte Carlo iterations per evaluation (minimum 1000).
    pub iterations: usize,
    /// Samples per rayon task for the parallel backend.
    pub parallel_chunk_size: usize,
    /// Fixed seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            backend: SamplerBackend::default(),
            iterations: defaults::DEFAULT_ITERATIONS,
            parallel_chunk_size: defaults::DEFAULT_PARALLEL_CHUNK_SIZE,
            seed: None,
        }
    }
}
