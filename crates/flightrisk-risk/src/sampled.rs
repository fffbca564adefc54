use std::sync::Arc;

use flightrisk_core::config::{defaults, EvaluatorKind, FlightRiskConfig};
use flightrisk_core::constants::{ETA_PERCENTILE, MIN_ITERATIONS};
use flightrisk_core::errors::{EvaluationError, FlightRiskResult};
use flightrisk_core::models::{
    AirportDistribution, RiskMetrics, RiskReport, SegmentBreakdown, TrafficEstimate,
    WeatherReport,
};
use flightrisk_core::traits::{IRiskEvaluator, ISampler};
use flightrisk_core::tracing_setup::{events, spans};
use flightrisk_sampling::{sampler_for, seeded_rng, stats, StandardSampler};
use flightrisk_weather::WeatherImpactModel;

use crate::confidence::model_confidence;
use crate::inputs;

/// Monte Carlo evaluator.
///
/// Each call draws `iterations` triangular drive times, multiplies them by
/// `N(M, volatility)` noise when the weather multiplier `M` exceeds the noise
/// threshold, and adds the first `iterations` airport totals element-wise.
///
/// With a fixed seed every call restarts the same stream, so evaluations of
/// neighbouring departures share random numbers and success probability
/// moves monotonically with the buffer.
pub struct SampledEvaluator {
    sampler: Arc<dyn ISampler>,
    weather: WeatherImpactModel,
    iterations: usize,
    noise_threshold: f64,
    seed: Option<u64>,
}

impl SampledEvaluator {
    pub fn new(sampler: Arc<dyn ISampler>) -> Self {
        Self {
            sampler,
            weather: WeatherImpactModel::new(),
            iterations: defaults::DEFAULT_ITERATIONS,
            noise_threshold: defaults::DEFAULT_NOISE_THRESHOLD,
            seed: None,
        }
    }

    pub fn from_config(config: &FlightRiskConfig) -> Self {
        Self::new(Arc::from(sampler_for(&config.sampling)))
            .with_iterations(config.sampling.iterations)
            .with_noise_threshold(config.evaluation.noise_threshold)
            .with_seed(config.sampling.seed)
    }

    /// Iteration counts below the minimum are raised to it.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(MIN_ITERATIONS);
        self
    }

    pub fn with_noise_threshold(mut self, noise_threshold: f64) -> Self {
        self.noise_threshold = noise_threshold;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_weather_model(mut self, weather: WeatherImpactModel) -> Self {
        self.weather = weather;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl Default for SampledEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(StandardSampler::new()))
    }
}

impl IRiskEvaluator for SampledEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::Sampled
    }

    fn evaluate(
        &self,
        traffic: Option<&TrafficEstimate>,
        weather: Option<&WeatherReport>,
        airport: &AirportDistribution,
        buffer_minutes: f64,
    ) -> FlightRiskResult<RiskReport> {
        let _span = tracing::debug_span!(spans::EVALUATE, strategy = "sampled").entered();

        let (traffic, impact) = inputs::resolve(traffic, weather, &self.weather)?;
        inputs::check_buffer(buffer_minutes)?;

        let n = self.iterations;
        let available = airport.sample_count();
        if available < n {
            return Err(EvaluationError::InsufficientSamples {
                needed: n,
                available,
            }
            .into());
        }

        let mut rng = seeded_rng(self.seed);
        let (optimistic, likely, pessimistic) = traffic.minutes();
        let mut drive = self
            .sampler
            .triangular(&mut rng, optimistic, likely, pessimistic, n)?;
        // Mild weather scales the drive; only noisy weather adds N(M, σ) noise.
        if impact.is_noisy(self.noise_threshold) {
            let noise = self
                .sampler
                .normal(&mut rng, impact.multiplier, impact.volatility, n)?;
            for (d, w) in drive.iter_mut().zip(&noise) {
                *d *= w;
            }
        } else if impact.multiplier > 1.0 {
            for d in drive.iter_mut() {
                *d *= impact.multiplier;
            }
        }

        let airport_totals = airport.total_samples();
        let totals: Vec<f64> = drive
            .iter()
            .zip(&airport_totals)
            .map(|(d, a)| d + a)
            .collect();

        let mut sorted = totals.clone();
        sorted.sort_by(f64::total_cmp);
        let mean_eta = stats::mean(&totals);
        let p95_eta = stats::percentile_sorted(&sorted, ETA_PERCENTILE);
        let success_probability = stats::fraction_below(&totals, buffer_minutes) * 100.0;

        events::evaluation_completed("sampled", success_probability, p95_eta);

        Ok(RiskReport::new(RiskMetrics {
            mean_eta,
            p95_eta,
            success_probability,
            buffer_minutes,
            weather_multiplier: impact.multiplier,
            primary_condition: impact.primary_condition,
            model_confidence: model_confidence(traffic),
            segment_breakdown: SegmentBreakdown {
                drive: stats::mean(&drive),
                checkin: airport.checkin.mean,
                security: airport.security.mean,
                walk: airport.walk.mean,
            },
            sample_set: totals,
            strategy: EvaluatorKind::Sampled,
        }))
    }
}
