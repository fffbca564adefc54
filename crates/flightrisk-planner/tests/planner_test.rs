//! Planner: collaborator orchestration, data-source tagging, caching, planning.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use flightrisk_core::config::DataSourceKind;
use flightrisk_core::errors::{ErrorCode, FlightRiskError, FlightRiskResult, ProviderError};
use flightrisk_core::models::{CorridorPoint, RouteEstimate, WeatherCondition, WeatherReport};
use flightrisk_core::traits::{ILiveWaitProvider, ITrafficProvider, IWeatherProvider};
use flightrisk_core::FlightRiskConfig;
use flightrisk_planner::{Collaborators, Planner, SimulatedTraffic, SimulatedWeather, TripRequest};
use test_fixtures::{clear_weather, traffic};

const DEADLINE: i64 = 1_720_000_000;
const NOW: i64 = DEADLINE - 12 * 3600;

// ── Test collaborators ──

struct FixedTraffic;

impl ITrafficProvider for FixedTraffic {
    async fn route_estimate(&self, _: &str, _: &str, _: i64) -> FlightRiskResult<RouteEstimate> {
        Ok(RouteEstimate {
            estimate: traffic(40.0, 50.0, 80.0),
            route_token: "route-1".to_string(),
        })
    }
}

struct SlowTraffic;

impl ITrafficProvider for SlowTraffic {
    async fn route_estimate(&self, _: &str, _: &str, _: i64) -> FlightRiskResult<RouteEstimate> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        FixedTraffic.route_estimate("", "", 0).await
    }
}

#[derive(Default, Clone)]
struct CountingWeather {
    calls: Arc<AtomicUsize>,
}

impl IWeatherProvider for CountingWeather {
    async fn route_weather(&self, _: &str) -> FlightRiskResult<WeatherReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(clear_weather())
    }
}

struct DownWeather;

impl IWeatherProvider for DownWeather {
    async fn route_weather(&self, _: &str) -> FlightRiskResult<WeatherReport> {
        Err(ProviderError::Unavailable {
            provider: "weather".into(),
            reason: "503".into(),
        }
        .into())
    }
}

struct LiveWait(Option<f64>);

impl ILiveWaitProvider for LiveWait {
    async fn security_wait_minutes(&self, _: &str) -> FlightRiskResult<Option<f64>> {
        Ok(self.0)
    }
}

struct DownLiveWait;

impl ILiveWaitProvider for DownLiveWait {
    async fn security_wait_minutes(&self, _: &str) -> FlightRiskResult<Option<f64>> {
        Err(ProviderError::Malformed {
            provider: "tsa".into(),
            reason: "not json".into(),
        }
        .into())
    }
}

fn config(source: DataSourceKind) -> FlightRiskConfig {
    let mut config = FlightRiskConfig::default();
    config.sampling.seed = Some(42);
    config.planner.data_source = source;
    config
}

fn request(config: &FlightRiskConfig) -> TripRequest {
    TripRequest::new("Home", "JFK Airport", "jfk International", DEADLINE, &config.planner)
}

fn live_planner<W: IWeatherProvider, L: ILiveWaitProvider>(
    weather: W,
    live_wait: L,
    config: FlightRiskConfig,
) -> Planner<FixedTraffic, W, L> {
    Planner::new(config, Collaborators::live(FixedTraffic, weather, live_wait)).unwrap()
}

// ── Request ──

#[test]
fn buffer_subtracts_cutoff_and_time_to_kill() {
    let config = config(DataSourceKind::Simulated);
    let req = request(&config).with_time_to_kill(10);
    let departure = DEADLINE - (15 + 10 + 120) * 60;
    assert!((req.buffer_minutes(departure, 15) - 120.0).abs() < 1e-9);
}

// ── Data source ──

#[test]
fn mismatched_data_source_is_rejected() {
    let result = Planner::new(
        config(DataSourceKind::Simulated),
        Collaborators::live(FixedTraffic, CountingWeather::default(), LiveWait(None)),
    );
    let err = result.unwrap_err();
    assert!(matches!(err, FlightRiskError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    assert!(Planner::simulated(config(DataSourceKind::Live)).is_err());
}

#[tokio::test]
async fn simulated_assessments_are_tagged() {
    let config = config(DataSourceKind::Simulated);
    let req = request(&config);
    let planner = Planner::simulated(config).unwrap();
    assert_eq!(planner.data_source(), DataSourceKind::Simulated);

    let assessment = planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap();
    assert_eq!(assessment.data_source, DataSourceKind::Simulated);
    assert!(!assessment.used_live_data);
}

#[tokio::test]
async fn simulated_traffic_stays_in_range() {
    let provider = SimulatedTraffic::new(Some(9));
    for departure in (0..20).map(|i| DEADLINE - i * 300) {
        let route = provider.route_estimate("a", "b", departure).await.unwrap();
        let (optimistic, likely, pessimistic) = route.estimate.minutes();
        assert!((45.0..=65.0).contains(&likely));
        assert!((optimistic - (likely - 10.0)).abs() < 1e-9);
        assert!((pessimistic - (likely + 15.0)).abs() < 1e-9);
    }
}

#[tokio::test]
async fn simulated_weather_is_cloudy_and_mild() {
    let report = SimulatedWeather::new(Some(9)).route_weather("tok").await.unwrap();
    assert!(report.is_complete());
    for point in CorridorPoint::ALL {
        let sample = report.get(point).unwrap();
        assert_eq!(sample.condition, WeatherCondition::Clouds);
        assert!((50.0..=70.0).contains(&sample.temperature));
    }
}

#[tokio::test]
async fn seeded_simulation_is_reproducible() {
    let config = config(DataSourceKind::Simulated);
    let req = request(&config);
    let a = Planner::simulated(config.clone()).unwrap();
    let b = Planner::simulated(config).unwrap();
    let departure = DEADLINE - 150 * 60;
    let pa = a.assess(&req, departure).await.unwrap().report.success_probability();
    let pb = b.assess(&req, departure).await.unwrap().report.success_probability();
    assert_eq!(pa, pb);
}

// ── Collaborator failures ──

#[tokio::test]
async fn weather_outage_surfaces_as_provider_error() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(DownWeather, LiveWait(None), config);
    let err = planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap_err();
    assert_eq!(err.error_code(), "PROVIDER_UNAVAILABLE");
}

#[tokio::test(start_paused = true)]
async fn slow_traffic_times_out() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = Planner::new(
        config,
        Collaborators::live(SlowTraffic, CountingWeather::default(), LiveWait(None)),
    )
    .unwrap();
    let err = planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap_err();
    assert!(matches!(
        err,
        FlightRiskError::Provider(ProviderError::Timeout { timeout_ms: 2500, .. })
    ));
}

#[tokio::test]
async fn failed_live_wait_degrades_to_history() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), DownLiveWait, config);
    let assessment = planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap();
    assert!(assessment.live_wait_degraded);
    assert!(!assessment.used_live_data);
}

#[tokio::test]
async fn live_wait_is_used_when_present() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), LiveWait(Some(12.0)), config);
    let assessment = planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap();
    assert!(assessment.used_live_data);
    assert!(!assessment.live_wait_degraded);
}

// ── Assessment ──

#[tokio::test]
async fn arrival_is_departure_plus_likely_drive() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), LiveWait(None), config);
    let departure = DEADLINE - 3 * 3600;
    let assessment = planner.assess(&req, departure).await.unwrap();
    assert_eq!(assessment.arrival_epoch, departure + 50 * 60);
    assert!((assessment.buffer_minutes - 165.0).abs() < 1e-9);
}

#[tokio::test]
async fn arrival_past_the_epoch_range_is_rejected() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), LiveWait(None), config);
    let err = planner.assess(&req, i64::MAX - 60).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PARAMETERS");
}

#[tokio::test]
async fn more_slack_raises_the_odds() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), LiveWait(None), config);
    let tight = planner.assess(&req, DEADLINE - 100 * 60).await.unwrap();
    let loose = planner.assess(&req, DEADLINE - 200 * 60).await.unwrap();
    assert!(loose.report.success_probability() > tight.report.success_probability());
}

// ── Cache ──

#[tokio::test]
async fn cache_reuses_weather_across_slots() {
    let mut config = config(DataSourceKind::Live);
    config.planner.fetch_cache_ttl_secs = Some(600);
    let req = request(&config);
    let weather = CountingWeather::default();
    let calls = Arc::clone(&weather.calls);
    let planner = live_planner(weather, LiveWait(None), config);

    planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap();
    planner.assess(&req, DEADLINE - 2 * 3600).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(planner.cache().unwrap().hits() >= 2);
}

#[tokio::test]
async fn without_cache_every_slot_fetches() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let weather = CountingWeather::default();
    let calls = Arc::clone(&weather.calls);
    let planner = live_planner(weather, LiveWait(None), config);

    planner.assess(&req, DEADLINE - 3 * 3600).await.unwrap();
    planner.assess(&req, DEADLINE - 2 * 3600).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(planner.cache().is_none());
}

// ── Planning ──

#[tokio::test]
async fn plan_finds_an_ordered_window() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), LiveWait(None), config);

    let window = planner.plan(&req, NOW).await;
    let recommended = window.recommended.expect("recommended departure");
    let drop_dead = window.drop_dead.expect("drop-dead time");
    assert!(recommended <= drop_dead);
    assert!(!window.timed_out);

    let at_recommended = planner.assess(&req, recommended).await.unwrap();
    assert!(at_recommended.report.success_probability() >= 90.0);
}

#[tokio::test]
async fn plan_too_close_to_the_deadline_is_unreachable() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(CountingWeather::default(), LiveWait(None), config);

    let window = planner.plan(&req, DEADLINE - 15 * 60).await;
    assert_eq!(window.as_pair(), (None, None));
    assert_eq!(window.evaluations, 0);
}

#[tokio::test]
async fn plan_scores_failing_slots_as_zero() {
    let config = config(DataSourceKind::Live);
    let req = request(&config);
    let planner = live_planner(DownWeather, LiveWait(None), config);

    let window = planner.plan(&req, NOW).await;
    assert!(window.is_unreachable());
    assert!(window.probes.iter().all(|p| p.failed));
}
