//! Closed-form surrogate for the sampled evaluator.
//!
//! Trip time is split into a smooth term `N = drive + walk`, matched to a
//! normal, and a queueing term `Q = check-in + security`, matched to a gamma
//! by its first two moments. Then
//!
//! ```text
//! P(N + Q < t) = ∫ φ_N(x) · F_Q(t − x) dx
//! ```
//!
//! is evaluated with Simpson's rule over `μ_N ± 8σ_N`. Integrating against
//! the normal density keeps the integrand bounded even when the gamma shape
//! is below one.

use flightrisk_core::config::{defaults, EvaluatorKind, FlightRiskConfig};
use flightrisk_core::constants::ETA_PERCENTILE;
use flightrisk_core::errors::{EvaluationError, FlightRiskResult};
use flightrisk_core::models::{
    AirportDistribution, RiskMetrics, RiskReport, SegmentBreakdown, TrafficEstimate,
    WeatherReport,
};
use flightrisk_core::traits::IRiskEvaluator;
use flightrisk_core::tracing_setup::{events, spans};
use flightrisk_sampling::{seeded_rng, Family, Moments};
use flightrisk_weather::WeatherImpactModel;
use statrs::distribution::{Continuous, ContinuousCDF, Gamma, Normal};

use crate::confidence::model_confidence;
use crate::inputs;

const INTEGRATION_HALF_WIDTH_SIGMAS: f64 = 8.0;
const QUANTILE_TOLERANCE_MINS: f64 = 1e-3;
const MAX_BISECTION_STEPS: usize = 80;
const MIN_STD: f64 = 1e-9;

/// Moment-matched evaluator.
pub struct AnalyticEvaluator {
    weather: WeatherImpactModel,
    noise_threshold: f64,
    integration_steps: usize,
    representative_samples: usize,
    seed: Option<u64>,
}

impl AnalyticEvaluator {
    pub fn new() -> Self {
        Self {
            weather: WeatherImpactModel::new(),
            noise_threshold: defaults::DEFAULT_NOISE_THRESHOLD,
            integration_steps: defaults::DEFAULT_INTEGRATION_STEPS,
            representative_samples: defaults::DEFAULT_REPRESENTATIVE_SAMPLES,
            seed: None,
        }
    }

    pub fn from_config(config: &FlightRiskConfig) -> Self {
        Self::new()
            .with_noise_threshold(config.evaluation.noise_threshold)
            .with_integration_steps(config.evaluation.integration_steps)
            .with_representative_samples(config.evaluation.representative_samples)
            .with_seed(config.sampling.seed)
    }

    pub fn with_noise_threshold(mut self, noise_threshold: f64) -> Self {
        self.noise_threshold = noise_threshold;
        self
    }

    /// Rounded up to an even count of at least 2.
    pub fn with_integration_steps(mut self, steps: usize) -> Self {
        self.integration_steps = steps.max(2).div_ceil(2) * 2;
        self
    }

    /// Size of the emitted sample set. 0 disables it.
    pub fn with_representative_samples(mut self, n: usize) -> Self {
        self.representative_samples = n;
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

    fn representative_set(&self, model: &TripModel) -> FlightRiskResult<Vec<f64>> {
        if self.representative_samples == 0 {
            return Ok(Vec::new());
        }
        let smooth = Family::normal(model.normal_mean, model.normal_std)?;
        let queue = match model.queue {
            QueueTerm::Constant(c) => Family::gamma(c, 0.0)?,
            QueueTerm::Gamma { mean, scale, .. } => Family::gamma(mean, scale)?,
        };
        let mut rng = seeded_rng(self.seed);
        Ok((0..self.representative_samples)
            .map(|_| smooth.draw(&mut rng) + queue.draw(&mut rng))
            .collect())
    }
}

impl Default for AnalyticEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Queueing term `Q`.
enum QueueTerm {
    Constant(f64),
    Gamma {
        dist: Gamma,
        mean: f64,
        scale: f64,
    },
}

impl QueueTerm {
    fn from_moments(m: Moments) -> Result<Self, EvaluationError> {
        if m.mean <= 0.0 || m.variance <= MIN_STD * MIN_STD {
            return Ok(Self::Constant(m.mean.max(0.0)));
        }
        let shape = m.mean * m.mean / m.variance;
        let scale = m.variance / m.mean;
        let dist = Gamma::new(shape, 1.0 / scale).map_err(|e| {
            EvaluationError::InvalidParameters {
                field: "queue_term".to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::Gamma {
            dist,
            mean: m.mean,
            scale,
        })
    }

    /// `P(Q < y)`.
    fn cdf(&self, y: f64) -> f64 {
        match self {
            Self::Constant(c) => {
                if *c < y {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Gamma { dist, .. } => {
                if y <= 0.0 {
                    0.0
                } else {
                    dist.cdf(y)
                }
            }
        }
    }

    fn moments(&self) -> Moments {
        match self {
            Self::Constant(c) => Moments::constant(*c),
            Self::Gamma { mean, scale, .. } => Moments::gamma(*mean, *scale),
        }
    }
}

/// `T = N + Q` with `N` normal and `Q` gamma (or constant).
struct TripModel {
    normal_mean: f64,
    normal_std: f64,
    normal: Option<Normal>,
    queue: QueueTerm,
    steps: usize,
}

impl TripModel {
    fn new(smooth: Moments, queue: Moments, steps: usize) -> Result<Self, EvaluationError> {
        let normal_std = smooth.std_dev();
        let normal = if normal_std > MIN_STD {
            Some(Normal::new(smooth.mean, normal_std).map_err(|e| {
                EvaluationError::InvalidParameters {
                    field: "normal_term".to_string(),
                    reason: e.to_string(),
                }
            })?)
        } else {
            None
        };
        Ok(Self {
            normal_mean: smooth.mean,
            normal_std,
            normal,
            queue: QueueTerm::from_moments(queue)?,
            steps,
        })
    }

    fn mean(&self) -> f64 {
        self.normal_mean + self.queue.moments().mean
    }

    fn std_dev(&self) -> f64 {
        (self.normal_std.powi(2) + self.queue.moments().variance).sqrt()
    }

    /// `P(T < t)`.
    fn cdf(&self, t: f64) -> f64 {
        let Some(normal) = &self.normal else {
            return self.queue.cdf(t - self.normal_mean);
        };
        if let QueueTerm::Constant(c) = self.queue {
            return normal.cdf(t - c);
        }

        let a = self.normal_mean - INTEGRATION_HALF_WIDTH_SIGMAS * self.normal_std;
        let b = self.normal_mean + INTEGRATION_HALF_WIDTH_SIGMAS * self.normal_std;
        let h = (b - a) / self.steps as f64;
        let f = |x: f64| normal.pdf(x) * self.queue.cdf(t - x);

        let mut sum = f(a) + f(b);
        for i in 1..self.steps {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * f(a + i as f64 * h);
        }
        (sum * h / 3.0).clamp(0.0, 1.0)
    }

    /// Smallest `t` with `P(T < t) ≥ q`, by bisection.
    fn quantile(&self, q: f64) -> f64 {
        let spread = self.std_dev().max(1.0);
        let mut lo = self.mean() - 12.0 * spread;
        let mut hi = self.mean() + 12.0 * spread;
        for _ in 0..MAX_BISECTION_STEPS {
            if self.cdf(hi) >= q {
                break;
            }
            hi += 12.0 * spread;
        }
        for _ in 0..MAX_BISECTION_STEPS {
            if hi - lo <= QUANTILE_TOLERANCE_MINS {
                break;
            }
            let mid = 0.5 * (lo + hi);
            if self.cdf(mid) >= q {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        hi
    }
}

impl IRiskEvaluator for AnalyticEvaluator {
    fn kind(&self) -> EvaluatorKind {
        EvaluatorKind::Analytic
    }

    fn evaluate(
        &self,
        traffic: Option<&TrafficEstimate>,
        weather: Option<&WeatherReport>,
        airport: &AirportDistribution,
        buffer_minutes: f64,
    ) -> FlightRiskResult<RiskReport> {
        let _span = tracing::debug_span!(spans::EVALUATE, strategy = "analytic").entered();

        let (traffic, impact) = inputs::resolve(traffic, weather, &self.weather)?;
        inputs::check_buffer(buffer_minutes)?;

        let (optimistic, likely, pessimistic) = traffic.minutes();
        let mut drive = Moments::triangular(optimistic, likely, pessimistic);
        if impact.is_noisy(self.noise_threshold) {
            drive = drive.times_independent_normal(impact.multiplier, impact.volatility);
        } else if impact.multiplier > 1.0 {
            drive = drive.scaled(impact.multiplier);
        }
        let checkin = Moments::of_segment(&airport.profile.checkin);
        let security = Moments::of_segment(&airport.profile.security);
        let walk = Moments::of_segment(&airport.profile.walk);

        let model = TripModel::new(drive + walk, checkin + security, self.integration_steps)?;
        let success_probability = model.cdf(buffer_minutes) * 100.0;
        let p95_eta = model.quantile(ETA_PERCENTILE);

        events::evaluation_completed("analytic", success_probability, p95_eta);

        Ok(RiskReport::new(RiskMetrics {
            mean_eta: model.mean(),
            p95_eta,
            success_probability,
            buffer_minutes,
            weather_multiplier: impact.multiplier,
            primary_condition: impact.primary_condition,
            model_confidence: model_confidence(traffic),
            segment_breakdown: SegmentBreakdown {
                drive: drive.mean,
                checkin: checkin.mean,
                security: security.mean,
                walk: walk.mean,
            },
            sample_set: self.representative_set(&model)?,
            strategy: EvaluatorKind::Analytic,
        }))
    }
}
