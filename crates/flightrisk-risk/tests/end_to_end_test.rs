//! Traffic + weather + airport model + evaluator, wired together.

use chrono::NaiveDate;
use flightrisk_airport::{AirportQueueModel, ProfileRequest};
use flightrisk_core::models::RiskLabel;
use flightrisk_core::traits::IRiskEvaluator;
use flightrisk_risk::{AnalyticEvaluator, SampledEvaluator};
use flightrisk_sampling::seeded_rng;
use test_fixtures::{clear_weather, traffic, AirportBuilder};

// ── Reference trip: 40/50/80 drive, clear skies, 15 + 35 + 15 at the airport ──

#[test]
fn reference_trip_with_tight_buffer_is_critical() {
    let airport = AirportBuilder::with_means("JFK", 15.0, 35.0, 15.0).build();
    let t = traffic(40.0, 50.0, 80.0);
    let evaluators: [Box<dyn IRiskEvaluator>; 2] = [
        Box::new(SampledEvaluator::default().with_seed(Some(1))),
        Box::new(AnalyticEvaluator::new()),
    ];
    for evaluator in evaluators {
        let report = evaluator
            .evaluate(Some(&t), Some(&clear_weather()), &airport, 80.0)
            .unwrap();
        assert!(report.success_probability() < 60.0);
        assert_eq!(report.risk_label(), RiskLabel::Critical);
    }
}

#[test]
fn reference_trip_with_generous_buffer_is_low_risk() {
    // The full trip averages ~122 minutes, so "comfortable" needs ~150.
    let airport = AirportBuilder::with_means("JFK", 15.0, 35.0, 15.0).build();
    let t = traffic(40.0, 50.0, 80.0);
    let evaluators: [Box<dyn IRiskEvaluator>; 2] = [
        Box::new(SampledEvaluator::default().with_seed(Some(1))),
        Box::new(AnalyticEvaluator::new()),
    ];
    for evaluator in evaluators {
        let report = evaluator
            .evaluate(Some(&t), Some(&clear_weather()), &airport, 150.0)
            .unwrap();
        assert!(report.success_probability() > 80.0);
        assert!(matches!(
            report.risk_label(),
            RiskLabel::VeryLow | RiskLabel::Low
        ));
        assert!(report.safety_margin() > -10.0);
    }
}

#[test]
fn precheck_improves_the_odds() {
    let local_time = NaiveDate::from_ymd_opt(2024, 7, 5)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap();
    let standard = ProfileRequest {
        airport_code: "ATL".to_string(),
        local_time,
        has_bags: true,
        precheck: false,
        live_security_wait: None,
    };
    let fast = ProfileRequest {
        precheck: true,
        ..standard.clone()
    };

    let model = AirportQueueModel::default();
    let a = model.distribution(&standard, &mut seeded_rng(Some(3)), 2_000).unwrap();
    let b = model.distribution(&fast, &mut seeded_rng(Some(3)), 2_000).unwrap();

    let evaluator = SampledEvaluator::default().with_seed(Some(4));
    let t = traffic(30.0, 35.0, 50.0);
    let without = evaluator.evaluate(Some(&t), Some(&clear_weather()), &a, 90.0).unwrap();
    let with = evaluator.evaluate(Some(&t), Some(&clear_weather()), &b, 90.0).unwrap();

    assert!(b.security.mean < a.security.mean);
    assert!(with.success_probability() > without.success_probability());
    assert!(with.p95_eta() < without.p95_eta());
}
