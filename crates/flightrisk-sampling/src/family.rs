//! Parameter validation shared by both sampler backends.
//!
//! Non-finite parameters are rejected. Zero-spread parameters collapse to
//! [`Family::Constant`] so that callers always get `n` usable samples.

use flightrisk_core::errors::SamplingError;
use rand::Rng;
use rand_distr::{Distribution, Gamma, Normal, Triangular, Uniform};

/// A ready-to-draw distribution.
#[derive(Debug, Clone)]
pub enum Family {
    Constant(f64),
    Triangular(Triangular<f64>),
    Gamma(Gamma<f64>),
    Normal(Normal<f64>),
    Uniform(Uniform<f64>),
}

impl Family {
    /// Triangular on `[low, high]`. The three points are sorted first.
    pub fn triangular(low: f64, mode: f64, high: f64) -> Result<Self, SamplingError> {
        check_finite("triangular", &[("low", low), ("mode", mode), ("high", high)])?;
        let mut points = [low, mode, high];
        points.sort_by(f64::total_cmp);
        let [low, mode, high] = points;
        if high - low <= 0.0 {
            return Ok(collapsed("triangular", low));
        }
        Triangular::new(low, high, mode)
            .map(Self::Triangular)
            .map_err(|e| invalid("triangular", e.to_string()))
    }

    /// Gamma with the given mean and scale. Shape is `mean / scale`.
    pub fn gamma(mean: f64, scale: f64) -> Result<Self, SamplingError> {
        check_finite("gamma", &[("mean", mean), ("scale", scale)])?;
        if mean <= 0.0 || scale <= 0.0 {
            return Ok(collapsed("gamma", mean.max(0.0)));
        }
        Gamma::new(mean / scale, scale)
            .map(Self::Gamma)
            .map_err(|e| invalid("gamma", e.to_string()))
    }

    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, SamplingError> {
        check_finite("normal", &[("mean", mean), ("std_dev", std_dev)])?;
        if std_dev <= 0.0 {
            return Ok(collapsed("normal", mean));
        }
        Normal::new(mean, std_dev)
            .map(Self::Normal)
            .map_err(|e| invalid("normal", e.to_string()))
    }

    /// Uniform on `[low, high)`. Reversed bounds are swapped.
    pub fn uniform(low: f64, high: f64) -> Result<Self, SamplingError> {
        check_finite("uniform", &[("low", low), ("high", high)])?;
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        if high - low <= 0.0 {
            return Ok(collapsed("uniform", low));
        }
        Ok(Self::Uniform(Uniform::new(low, high)))
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Triangular(d) => d.sample(rng),
            Self::Gamma(d) => d.sample(rng),
            Self::Normal(d) => d.sample(rng),
            Self::Uniform(d) => d.sample(rng),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

fn collapsed(distribution: &'static str, value: f64) -> Family {
    tracing::trace!(distribution, value, "zero-spread parameters, sampling a constant");
    Family::Constant(value)
}

fn check_finite(distribution: &'static str, params: &[(&str, f64)]) -> Result<(), SamplingError> {
    for (name, value) in params {
        if !value.is_finite() {
            return Err(invalid(distribution, format!("{name} must be finite, got {value}")));
        }
    }
    Ok(())
}

fn invalid(distribution: &'static str, reason: String) -> SamplingError {
    SamplingError::InvalidParameters {
        distribution,
        reason,
    }
}
