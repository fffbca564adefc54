//! Airport queue model: classification, multipliers, profiles, sampling.

use chrono::{NaiveDate, NaiveDateTime};
use flightrisk_airport::multipliers;
use flightrisk_airport::{build_profile, classify, local_time, normalize_code, AirportQueueModel, ProfileRequest};
use flightrisk_core::errors::{EvaluationError, FlightRiskError};
use flightrisk_core::models::{AirportTier, SegmentModel};
use flightrisk_sampling::{seeded_rng, stats, Moments};
use proptest::prelude::*;

fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn make_request(code: &str, local_time: NaiveDateTime) -> ProfileRequest {
    ProfileRequest {
        airport_code: code.to_string(),
        local_time,
        has_bags: true,
        precheck: false,
        live_security_wait: None,
    }
}

fn gamma_params(model: &SegmentModel) -> (f64, f64) {
    match *model {
        SegmentModel::Gamma { mean, scale } => (mean, scale),
        other => panic!("expected gamma, got {other:?}"),
    }
}

// ── Classification ──

#[test]
fn codes_are_normalized() {
    assert_eq!(normalize_code("jfk International"), "JFK");
    assert_eq!(normalize_code("  bos  "), "BOS");
    assert_eq!(normalize_code("LAXX"), "LAX");
    assert_eq!(normalize_code(""), "");
}

#[test]
fn tiers_by_membership() {
    assert_eq!(classify("JFK"), AirportTier::Tier1);
    assert_eq!(classify("mdw airport"), AirportTier::Tier1);
    assert_eq!(classify("PDX"), AirportTier::Tier2);
    assert_eq!(classify("ISP"), AirportTier::Tier3);
    assert_eq!(classify(""), AirportTier::Tier3);
}

// ── Multipliers ──

#[test]
fn time_of_day_windows() {
    // 2024-03-07 is a Thursday in March: neutral day factor.
    let thursday = |h| at(2024, 3, 7, h);
    assert_eq!(multipliers::time_of_day(&thursday(4)), 1.0);
    assert_eq!(multipliers::time_of_day(&thursday(5)), 1.3);
    assert_eq!(multipliers::time_of_day(&thursday(8)), 1.3);
    assert_eq!(multipliers::time_of_day(&thursday(9)), 1.0);
    assert_eq!(multipliers::time_of_day(&thursday(10)), 0.7);
    assert_eq!(multipliers::time_of_day(&thursday(14)), 1.0);
    assert_eq!(multipliers::time_of_day(&thursday(15)), 1.2);
    assert_eq!(multipliers::time_of_day(&thursday(19)), 1.0);
    assert_eq!(multipliers::time_of_day(&thursday(21)), 0.7);
    assert_eq!(multipliers::time_of_day(&thursday(23)), 0.7);
    assert_eq!(multipliers::day_and_season(&thursday(12)), 1.0);
}

#[test]
fn day_and_season_compose() {
    // Friday in March.
    assert!((multipliers::day_and_season(&at(2024, 3, 8, 12)) - 1.15).abs() < 1e-12);
    // Tuesday in July.
    assert!((multipliers::day_and_season(&at(2024, 7, 2, 12)) - 0.85 * 1.1).abs() < 1e-12);
    // Sunday in December.
    assert!((multipliers::day_and_season(&at(2024, 12, 22, 12)) - 1.15 * 1.1).abs() < 1e-12);
    // Monday in March.
    assert_eq!(multipliers::day_and_season(&at(2024, 3, 4, 12)), 1.0);
    let c = multipliers::congestion(&at(2024, 7, 2, 16));
    assert!((c - 1.2 * 0.85 * 1.1).abs() < 1e-12);
}

// ── Profiles ──

#[test]
fn tier_one_with_bags_off_peak() {
    let profile = build_profile(&make_request("JFK", at(2024, 3, 4, 12))).unwrap();
    assert_eq!(profile.tier, AirportTier::Tier1);
    let (mean, scale) = gamma_params(&profile.checkin);
    assert!((mean - 13.0 * 0.7).abs() < 1e-12);
    assert!((scale - 4.0 * 0.7).abs() < 1e-12);
    let (mean, scale) = gamma_params(&profile.security);
    assert!((mean - 15.0 * 0.7).abs() < 1e-12);
    assert!((scale - 4.0 * 0.7).abs() < 1e-12);
    assert_eq!(profile.walk, SegmentModel::Normal { mean: 12.0, std_dev: 5.0 });
    assert!(!profile.used_live_data);
}

#[test]
fn no_bags_is_short_uniform() {
    let mut request = make_request("PDX", at(2024, 3, 4, 7));
    request.has_bags = false;
    let profile = build_profile(&request).unwrap();
    assert_eq!(profile.checkin, SegmentModel::Uniform { low: 0.0, high: 3.0 });
    assert_eq!(profile.walk, SegmentModel::Normal { mean: 7.0, std_dev: 2.0 });
}

#[test]
fn live_wait_replaces_heuristic_and_skips_multipliers() {
    let mut rush = make_request("ISP", at(2024, 3, 8, 7));
    rush.live_security_wait = Some(30.0);
    let mut quiet = make_request("ISP", at(2024, 3, 5, 12));
    quiet.live_security_wait = Some(30.0);

    let a = build_profile(&rush).unwrap();
    let b = build_profile(&quiet).unwrap();
    assert_eq!(gamma_params(&a.security), (30.0, 7.5));
    assert_eq!(a.security, b.security);
    assert!(a.used_live_data);
}

#[test]
fn precheck_applies_on_top_of_live_wait() {
    let mut request = make_request("BOS", at(2024, 3, 4, 7));
    request.live_security_wait = Some(30.0);
    request.precheck = true;
    let (mean, scale) = gamma_params(&build_profile(&request).unwrap().security);
    assert!((mean - 10.5).abs() < 1e-12);
    assert!((scale - 3.0).abs() < 1e-12);
}

#[test]
fn invalid_live_wait_is_rejected() {
    let mut request = make_request("BOS", at(2024, 3, 4, 7));
    request.live_security_wait = Some(-5.0);
    assert!(matches!(
        build_profile(&request),
        Err(EvaluationError::InvalidParameters { .. })
    ));
}

proptest! {
    #[test]
    fn precheck_reduces_security_mean_and_variance(
        tier_code in prop::sample::select(vec!["ATL", "SNA", "ISP"]),
        hour in 0u32..24,
        day in 1u32..29,
        month in 1u32..13,
        live in prop::option::of(1.0f64..90.0),
    ) {
        let mut standard = make_request(tier_code, at(2024, month, day, hour));
        standard.live_security_wait = live;
        let mut fast = standard.clone();
        fast.precheck = true;

        let s = Moments::of_segment(&build_profile(&standard).unwrap().security);
        let f = Moments::of_segment(&build_profile(&fast).unwrap().security);
        prop_assert!(f.mean < s.mean);
        prop_assert!(f.variance < s.variance);
    }
}

// ── Sampling ──

#[test]
fn distribution_draws_three_segments() {
    let model = AirportQueueModel::default();
    let mut rng = seeded_rng(Some(17));
    let dist = model
        .distribution(&make_request("JFK", at(2024, 3, 7, 7)), &mut rng, 5_000)
        .unwrap();
    assert_eq!(dist.sample_count(), 5_000);
    assert!(dist.walk.samples.iter().all(|&w| w >= 0.0));
    // Rush hour: 15 × 1.3 = 19.5 minute security mean.
    assert!((dist.security.mean - 19.5).abs() < 0.6);
    assert!((dist.checkin.mean - 16.9).abs() < 0.6);
    assert!((stats::mean(&dist.total_samples()) - dist.mean_total()).abs() < 1e-9);
}

#[test]
fn precheck_samples_have_lower_mean() {
    let model = AirportQueueModel::default();
    let standard = make_request("ATL", at(2024, 3, 7, 16));
    let mut fast = standard.clone();
    fast.precheck = true;
    let a = model.distribution(&standard, &mut seeded_rng(Some(1)), 4_000).unwrap();
    let b = model.distribution(&fast, &mut seeded_rng(Some(1)), 4_000).unwrap();
    assert!(b.security.mean < a.security.mean);
    assert!(stats::std_dev(&b.security.samples) < stats::std_dev(&a.security.samples));
}

#[test]
fn invalid_live_wait_surfaces_as_evaluation_error() {
    let mut request = make_request("BOS", at(2024, 3, 4, 7));
    request.live_security_wait = Some(f64::NAN);
    let err = AirportQueueModel::default()
        .distribution(&request, &mut seeded_rng(Some(1)), 10)
        .unwrap_err();
    assert!(matches!(err, FlightRiskError::Evaluation(_)));
}

#[test]
fn local_time_applies_offset() {
    let t = local_time(0, -300).unwrap();
    assert_eq!(t, at(1969, 12, 31, 19));
    assert!(local_time(i64::MAX, 0).is_err());
}
