use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use flightrisk_airport::{local_time, normalize_code, AirportQueueModel, ProfileRequest};
use flightrisk_core::config::DataSourceKind;
use flightrisk_core::constants::MIN_ITERATIONS;
use flightrisk_core::errors::{ConfigError, EvaluationError, FlightRiskResult, ProviderError};
use flightrisk_core::models::{RiskReport, WeatherReport};
use flightrisk_core::traits::{
    ILiveWaitProvider, IRiskEvaluator, ITrafficProvider, IWeatherProvider,
};
use flightrisk_core::tracing_setup::{events, spans};
use flightrisk_core::FlightRiskConfig;
use flightrisk_optimizer::{DepartureQuery, DepartureWindow, TemporalOptimizer};
use flightrisk_risk::evaluator_for;
use flightrisk_sampling::{sampler_for, seeded_rng};
use serde::Serialize;
use tracing::Instrument;

use crate::cache::FetchCache;
use crate::request::TripRequest;
use crate::simulated::{SimulatedLiveWait, SimulatedTraffic, SimulatedWeather};
use crate::source::Collaborators;

/// Risk of one candidate departure, with the context it was computed in.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub departure_epoch: i64,
    /// Estimated airport arrival (departure + likely drive).
    pub arrival_epoch: i64,
    pub buffer_minutes: f64,
    pub data_source: DataSourceKind,
    /// Security time came from a live measurement.
    pub used_live_data: bool,
    /// The live-wait fetch failed and historical estimates were used.
    pub live_wait_degraded: bool,
    pub report: RiskReport,
}

/// Orchestrates collaborator fetches, risk evaluation, and departure search.
pub struct Planner<T, W, L> {
    config: FlightRiskConfig,
    sources: Collaborators<T, W, L>,
    evaluator: Box<dyn IRiskEvaluator>,
    queue: AirportQueueModel,
    optimizer: TemporalOptimizer,
    cache: Option<FetchCache>,
}

impl<T, W, L> Planner<T, W, L>
where
    T: ITrafficProvider,
    W: IWeatherProvider,
    L: ILiveWaitProvider,
{
    /// Fails when the config is invalid or names a different data source than
    /// the collaborators provide.
    pub fn new(
        config: FlightRiskConfig,
        sources: Collaborators<T, W, L>,
    ) -> FlightRiskResult<Self> {
        config.validate()?;
        if sources.kind() != config.planner.data_source {
            return Err(ConfigError::ValidationFailed {
                field: "planner.data_source".to_string(),
                message: format!(
                    "configured {:?} but collaborators are {:?}",
                    config.planner.data_source,
                    sources.kind()
                ),
            }
            .into());
        }

        let cache = config
            .planner
            .fetch_cache_ttl_secs
            .map(|ttl| FetchCache::new(Duration::from_secs(ttl)));

        Ok(Self {
            evaluator: evaluator_for(&config),
            queue: AirportQueueModel::new(Arc::from(sampler_for(&config.sampling))),
            optimizer: TemporalOptimizer::from_config(&config),
            cache,
            sources,
            config,
        })
    }

    /// Replace the configured evaluation strategy.
    pub fn with_evaluator(mut self, evaluator: Box<dyn IRiskEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn data_source(&self) -> DataSourceKind {
        self.sources.kind()
    }

    pub fn config(&self) -> &FlightRiskConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&FetchCache> {
        self.cache.as_ref()
    }

    /// Assess one departure.
    ///
    /// Traffic comes first because its route token feeds the weather fetch;
    /// weather and the live wait are then fetched concurrently. Traffic and
    /// weather failures propagate. A failed live-wait fetch falls back to the
    /// historical profile and is flagged on the result.
    pub async fn assess(
        &self,
        request: &TripRequest,
        departure_epoch: i64,
    ) -> FlightRiskResult<Assessment> {
        let span = tracing::debug_span!(spans::ASSESS, departure = departure_epoch);
        self.assess_inner(request, departure_epoch)
            .instrument(span)
            .await
    }

    async fn assess_inner(
        &self,
        request: &TripRequest,
        departure_epoch: i64,
    ) -> FlightRiskResult<Assessment> {
        let route = self
            .bounded(
                "traffic",
                self.sources.traffic.route_estimate(
                    &request.origin,
                    &request.destination,
                    departure_epoch,
                ),
            )
            .await?;

        let airport_code = normalize_code(&request.airport_code);
        let (weather, live_wait) = tokio::join!(
            self.fetch_weather(&route.route_token),
            self.fetch_live_wait(&airport_code),
        );
        let weather = weather?;
        let (live_security_wait, live_wait_degraded) = match live_wait {
            Ok(minutes) => (minutes, false),
            Err(e) => {
                events::provider_degraded("live_wait", &e.to_string());
                (None, true)
            }
        };

        let drive_secs = route.estimate.likely_seconds().round() as i64;
        let arrival_epoch = departure_epoch.checked_add(drive_secs).ok_or_else(|| {
            EvaluationError::InvalidParameters {
                field: "arrival_epoch".into(),
                reason: format!("departure {departure_epoch} plus {drive_secs}s overflows"),
            }
        })?;
        let profile_request = ProfileRequest {
            airport_code,
            local_time: local_time(arrival_epoch, self.config.planner.utc_offset_minutes)?,
            has_bags: request.has_bags,
            precheck: request.precheck,
            live_security_wait,
        };
        let mut rng = seeded_rng(self.config.sampling.seed);
        let samples = self.config.sampling.iterations.max(MIN_ITERATIONS);
        let airport = self.queue.distribution(&profile_request, &mut rng, samples)?;

        let buffer_minutes =
            request.buffer_minutes(departure_epoch, self.config.optimizer.boarding_cutoff_mins);
        let report = self.evaluator.evaluate(
            Some(&route.estimate),
            Some(&weather),
            &airport,
            buffer_minutes,
        )?;

        Ok(Assessment {
            departure_epoch,
            arrival_epoch,
            buffer_minutes,
            data_source: self.sources.kind(),
            used_live_data: airport.profile.used_live_data,
            live_wait_degraded,
            report,
        })
    }

    /// Search the departure window for `request`, assessing each probed slot.
    pub async fn plan(&self, request: &TripRequest, now_epoch: i64) -> DepartureWindow {
        let query = DepartureQuery::new(request.gate_deadline_epoch, now_epoch)
            .with_time_to_kill(request.time_to_kill_mins);
        let this = self;
        self.optimizer
            .find_optimal_departure_async(&query, move |epoch| async move {
                this.assess(request, epoch)
                    .await
                    .map(|a| a.report.success_probability())
            })
            .await
    }

    async fn fetch_weather(&self, route_token: &str) -> FlightRiskResult<WeatherReport> {
        if let Some(report) = self.cache.as_ref().and_then(|c| c.weather(route_token)) {
            return Ok(report);
        }
        let report = self
            .bounded("weather", self.sources.weather.route_weather(route_token))
            .await?;
        if let Some(cache) = &self.cache {
            cache.insert_weather(route_token, report.clone());
        }
        Ok(report)
    }

    async fn fetch_live_wait(&self, airport_code: &str) -> FlightRiskResult<Option<f64>> {
        if let Some(minutes) = self.cache.as_ref().and_then(|c| c.live_wait(airport_code)) {
            return Ok(minutes);
        }
        let minutes = self
            .bounded(
                "live_wait",
                self.sources.live_wait.security_wait_minutes(airport_code),
            )
            .await?;
        if let Some(cache) = &self.cache {
            cache.insert_live_wait(airport_code, minutes);
        }
        Ok(minutes)
    }

    async fn bounded<V>(
        &self,
        provider: &str,
        fetch: impl Future<Output = FlightRiskResult<V>>,
    ) -> FlightRiskResult<V> {
        let timeout_ms = self.config.planner.provider_timeout_ms;
        let span = tracing::trace_span!(spans::FETCH, provider = %provider);
        match tokio::time::timeout(Duration::from_millis(timeout_ms), fetch)
            .instrument(span)
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                events::provider_degraded(provider, "timed out");
                Err(ProviderError::Timeout {
                    provider: provider.to_string(),
                    timeout_ms,
                }
                .into())
            }
        }
    }
}

impl Planner<SimulatedTraffic, SimulatedWeather, SimulatedLiveWait> {
    /// Planner over seeded simulated collaborators. The config must select
    /// the `simulated` data source.
    pub fn simulated(config: FlightRiskConfig) -> FlightRiskResult<Self> {
        let sources = Collaborators::simulated(config.sampling.seed);
        Self::new(config, sources)
    }
}

impl<T, W, L> std::fmt::Debug for Planner<T, W, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("data_source", &self.sources.kind())
            .field("strategy", &self.evaluator.kind())
            .field("cache", &self.cache)
            .finish()
    }
}
