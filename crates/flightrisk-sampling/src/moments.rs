//! Closed-form moments for the sampler families.
//!
//! Degenerate parameters follow the same collapse rule as [`crate::Family`],
//! so the moments always describe what the sampler would actually draw.

use std::ops::Add;

use flightrisk_core::models::SegmentModel;

/// Mean and variance of a distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
}

impl Moments {
    pub fn new(mean: f64, variance: f64) -> Self {
        Self {
            mean,
            variance: variance.max(0.0),
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// `mean = (a+b+c)/3`, `variance = (a²+b²+c²−ab−ac−bc)/18`.
    pub fn triangular(low: f64, mode: f64, high: f64) -> Self {
        let (a, b, c) = (low, mode, high);
        Self::new(
            (a + b + c) / 3.0,
            (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0,
        )
    }

    /// Gamma with shape `mean / scale`: variance is `mean × scale`.
    pub fn gamma(mean: f64, scale: f64) -> Self {
        if mean <= 0.0 || scale <= 0.0 {
            return Self::constant(mean.max(0.0));
        }
        Self::new(mean, mean * scale)
    }

    pub fn normal(mean: f64, std_dev: f64) -> Self {
        Self::new(mean, std_dev.max(0.0).powi(2))
    }

    pub fn uniform(low: f64, high: f64) -> Self {
        Self::new((low + high) / 2.0, (high - low).powi(2) / 12.0)
    }

    pub fn of_segment(model: &SegmentModel) -> Self {
        match *model {
            SegmentModel::Gamma { mean, scale } => Self::gamma(mean, scale),
            SegmentModel::Uniform { low, high } => Self::uniform(low, high),
            SegmentModel::Normal { mean, std_dev } => Self::normal(mean, std_dev),
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Moments of `X × W` for independent `W ~ N(w_mean, w_std²)`.
    pub fn times_independent_normal(&self, w_mean: f64, w_std: f64) -> Self {
        let w_var = w_std * w_std;
        Self::new(
            self.mean * w_mean,
            self.variance * (w_mean * w_mean + w_var) + self.mean * self.mean * w_var,
        )
    }

    /// Moments of `k × X`.
    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.mean * k, self.variance * k * k)
    }
}

/// Sum of independent variables.
impl Add for Moments {
    type Output = Moments;

    fn add(self, rhs: Moments) -> Moments {
        Moments::new(self.mean + rhs.mean, self.variance + rhs.variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangular_moments_match_textbook() {
        let m = Moments::triangular(40.0, 50.0, 80.0);
        assert!((m.mean - 170.0 / 3.0).abs() < 1e-12);
        // (1600+2500+6400-2000-3200-4000)/18
        assert!((m.variance - 1300.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn product_with_unit_normal_is_identity() {
        let m = Moments::new(50.0, 25.0).times_independent_normal(1.0, 0.0);
        assert_eq!(m, Moments::new(50.0, 25.0));
    }
}
