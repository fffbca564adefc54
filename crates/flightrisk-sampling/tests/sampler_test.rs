//! Sampler backends: bounds, convergence, degenerate inputs, determinism.

use flightrisk_core::config::{SamplerBackend, SamplingConfig};
use flightrisk_core::errors::{FlightRiskError, SamplingError};
use flightrisk_core::traits::ISampler;
use flightrisk_sampling::{sampler_for, seeded_rng, stats, ParallelSampler, StandardSampler};
use proptest::prelude::*;

const N: usize = 20_000;

fn backends() -> Vec<Box<dyn ISampler>> {
    vec![
        Box::new(StandardSampler::new()),
        Box::new(ParallelSampler::with_chunk_size(1_024)),
    ]
}

// ── Convergence ──

#[test]
fn triangular_mean_converges() {
    for sampler in backends() {
        let mut rng = seeded_rng(Some(7));
        let xs = sampler.triangular(&mut rng, 40.0, 50.0, 80.0, N).unwrap();
        assert_eq!(xs.len(), N);
        let m = stats::mean(&xs);
        assert!((m - 170.0 / 3.0).abs() < 0.5, "{}: mean {m}", sampler.name());
    }
}

#[test]
fn gamma_mean_and_variance_follow_mean_scale() {
    for sampler in backends() {
        let mut rng = seeded_rng(Some(11));
        let xs = sampler.gamma(&mut rng, 15.0, 4.0, N).unwrap();
        let m = stats::mean(&xs);
        let sd = stats::std_dev(&xs);
        assert!((m - 15.0).abs() < 0.5, "{}: mean {m}", sampler.name());
        assert!((sd - 60f64.sqrt()).abs() < 0.5, "{}: sd {sd}", sampler.name());
        assert!(xs.iter().all(|&x| x >= 0.0));
    }
}

#[test]
fn normal_and_uniform_moments() {
    for sampler in backends() {
        let mut rng = seeded_rng(Some(3));
        let xs = sampler.normal(&mut rng, 12.0, 5.0, N).unwrap();
        assert!((stats::mean(&xs) - 12.0).abs() < 0.3);
        assert!((stats::std_dev(&xs) - 5.0).abs() < 0.3);

        let us = sampler.uniform(&mut rng, 0.0, 3.0, N).unwrap();
        assert!(us.iter().all(|&x| (0.0..3.0).contains(&x)));
        assert!((stats::mean(&us) - 1.5).abs() < 0.1);
    }
}

#[test]
fn backends_are_statistically_indistinguishable() {
    let standard = StandardSampler::new();
    let parallel = ParallelSampler::new();
    let a = standard
        .gamma(&mut seeded_rng(Some(1)), 9.0, 2.0, 50_000)
        .unwrap();
    let b = parallel
        .gamma(&mut seeded_rng(Some(2)), 9.0, 2.0, 50_000)
        .unwrap();
    assert!((stats::mean(&a) - stats::mean(&b)).abs() < 0.15);
    assert!((stats::std_dev(&a) - stats::std_dev(&b)).abs() < 0.15);
    assert!((stats::percentile(&a, 0.95) - stats::percentile(&b, 0.95)).abs() < 0.5);
}

// ── Degenerate inputs ──

#[test]
fn degenerate_inputs_return_constants() {
    for sampler in backends() {
        let mut rng = seeded_rng(Some(5));
        assert_eq!(
            sampler.triangular(&mut rng, 30.0, 30.0, 30.0, 10).unwrap(),
            vec![30.0; 10]
        );
        assert_eq!(sampler.gamma(&mut rng, 8.0, 0.0, 4).unwrap(), vec![8.0; 4]);
        assert_eq!(sampler.gamma(&mut rng, 8.0, -1.0, 4).unwrap(), vec![8.0; 4]);
        assert_eq!(sampler.normal(&mut rng, 2.5, 0.0, 3).unwrap(), vec![2.5; 3]);
        assert_eq!(sampler.uniform(&mut rng, 1.0, 1.0, 2).unwrap(), vec![1.0; 2]);
    }
}

#[test]
fn zero_samples_is_empty() {
    for sampler in backends() {
        let mut rng = seeded_rng(Some(5));
        assert!(sampler.triangular(&mut rng, 1.0, 2.0, 3.0, 0).unwrap().is_empty());
    }
}

#[test]
fn unordered_triangular_bounds_are_sorted() {
    let mut rng = seeded_rng(Some(9));
    let xs = StandardSampler::new()
        .triangular(&mut rng, 80.0, 40.0, 50.0, 5_000)
        .unwrap();
    assert!(xs.iter().all(|&x| (40.0..=80.0).contains(&x)));
}

#[test]
fn non_finite_parameters_are_rejected() {
    for sampler in backends() {
        let mut rng = seeded_rng(Some(5));
        let err = sampler.gamma(&mut rng, f64::NAN, 2.0, 10).unwrap_err();
        assert!(matches!(
            err,
            FlightRiskError::Sampling(SamplingError::InvalidParameters { distribution: "gamma", .. })
        ));
        assert!(sampler.triangular(&mut rng, 0.0, 1.0, f64::INFINITY, 10).is_err());
    }
}

// ── Determinism and selection ──

#[test]
fn fixed_seed_is_reproducible() {
    for sampler in backends() {
        let a = sampler
            .triangular(&mut seeded_rng(Some(42)), 10.0, 20.0, 40.0, 3_000)
            .unwrap();
        let b = sampler
            .triangular(&mut seeded_rng(Some(42)), 10.0, 20.0, 40.0, 3_000)
            .unwrap();
        assert_eq!(a, b, "{}", sampler.name());
    }
}

#[test]
fn config_selects_backend() {
    let mut config = SamplingConfig::default();
    assert_eq!(sampler_for(&config).name(), "standard");
    config.backend = SamplerBackend::Parallel;
    assert_eq!(sampler_for(&config).name(), "parallel");
}

proptest! {
    #[test]
    fn triangular_samples_stay_in_bounds(
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
        c in 0.0f64..100.0,
        seed in any::<u64>(),
    ) {
        let mut pts = [a, b, c];
        pts.sort_by(f64::total_cmp);
        let mut rng = seeded_rng(Some(seed));
        let xs = StandardSampler::new()
            .triangular(&mut rng, pts[0], pts[1], pts[2], 256)
            .unwrap();
        prop_assert!(xs.iter().all(|&x| x >= pts[0] && x <= pts[2]));
    }

    #[test]
    fn gamma_samples_are_non_negative(mean in 0.0f64..60.0, scale in 0.01f64..10.0, seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let xs = ParallelSampler::with_chunk_size(64)
            .gamma(&mut rng, mean, scale, 256)
            .unwrap();
        prop_assert_eq!(xs.len(), 256);
        prop_assert!(xs.iter().all(|&x| x >= 0.0));
    }
}
