//! Sample statistics and closed-form moments.

use flightrisk_core::models::SegmentModel;
use flightrisk_sampling::{seeded_rng, stats, Moments, StandardSampler};
use flightrisk_core::traits::ISampler;

#[test]
fn percentile_interpolates_linearly() {
    let xs = [4.0, 1.0, 3.0, 2.0];
    assert_eq!(stats::percentile(&xs, 0.0), 1.0);
    assert_eq!(stats::percentile(&xs, 1.0), 4.0);
    assert!((stats::percentile(&xs, 0.5) - 2.5).abs() < 1e-12);
    // rank 0.95 × 3 = 2.85 → 3 + 0.85
    assert!((stats::percentile(&xs, 0.95) - 3.85).abs() < 1e-12);
}

#[test]
fn empty_inputs_are_zero() {
    assert_eq!(stats::mean(&[]), 0.0);
    assert_eq!(stats::std_dev(&[1.0]), 0.0);
    assert_eq!(stats::percentile(&[], 0.95), 0.0);
    assert_eq!(stats::fraction_below(&[], 10.0), 0.0);
}

#[test]
fn fraction_below_is_strict() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(stats::fraction_below(&xs, 3.0), 0.5);
    assert_eq!(stats::fraction_below(&xs, 10.0), 1.0);
}

#[test]
fn segment_moments_match_families() {
    let g = Moments::of_segment(&SegmentModel::Gamma { mean: 15.0, scale: 4.0 });
    assert_eq!(g, Moments::new(15.0, 60.0));
    let u = Moments::of_segment(&SegmentModel::Uniform { low: 0.0, high: 3.0 });
    assert!((u.mean - 1.5).abs() < 1e-12);
    assert!((u.variance - 0.75).abs() < 1e-12);
    let n = Moments::of_segment(&SegmentModel::Normal { mean: 7.0, std_dev: 2.0 });
    assert_eq!(n, Moments::new(7.0, 4.0));
    assert_eq!(Moments::gamma(0.0, 4.0), Moments::constant(0.0));
}

#[test]
fn weather_product_moments_match_simulation() {
    let sampler = StandardSampler::new();
    let mut rng = seeded_rng(Some(21));
    let traffic = sampler.triangular(&mut rng, 40.0, 50.0, 80.0, 40_000).unwrap();
    let noise = sampler.normal(&mut rng, 1.2, 0.12, 40_000).unwrap();
    let product: Vec<f64> = traffic.iter().zip(&noise).map(|(t, w)| t * w).collect();

    let m = Moments::triangular(40.0, 50.0, 80.0).times_independent_normal(1.2, 0.12);
    assert!((stats::mean(&product) - m.mean).abs() < 0.3);
    assert!((stats::std_dev(&product) - m.std_dev()).abs() < 0.3);
}

#[test]
fn independent_sums_add_moments() {
    let total = Moments::new(10.0, 4.0) + Moments::new(5.0, 9.0);
    assert_eq!(total, Moments::new(15.0, 13.0));
    assert!((total.std_dev() - 13f64.sqrt()).abs() < 1e-12);
}
