use rand::rngs::StdRng;

use crate::errors::FlightRiskResult;

/// Draws sample vectors from the distribution families the engine uses.
///
/// Every method takes the caller's generator so that a fixed seed gives
/// identical output for a given backend. Degenerate parameters (zero
/// spread) yield a constant vector; non-finite parameters are rejected
/// with `SamplingError::InvalidParameters`.
pub trait ISampler: Send + Sync {
    /// Triangular on `[low, high]` with the given mode. Unordered inputs are sorted.
    fn triangular(
        &self,
        rng: &mut StdRng,
        low: f64,
        mode: f64,
        high: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>>;

    /// Gamma parameterized by mean and scale (shape = mean / scale).
    fn gamma(
        &self,
        rng: &mut StdRng,
        mean: f64,
        scale: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>>;

    fn normal(
        &self,
        rng: &mut StdRng,
        mean: f64,
        std_dev: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>>;

    fn uniform(
        &self,
        rng: &mut StdRng,
        low: f64,
        high: f64,
        n: usize,
    ) -> FlightRiskResult<Vec<f64>>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}
