use std::future::Future;
use std::time::{Duration, Instant};

use flightrisk_core::config::OptimizerConfig;
use flightrisk_core::errors::FlightRiskResult;
use flightrisk_core::tracing_setup::{events, spans};
use flightrisk_core::FlightRiskConfig;

use crate::grid::TimeGrid;
use crate::search::WindowSearch;
use crate::window::DepartureWindow;

/// Inputs for one optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureQuery {
    /// Latest moment the traveler must be at the gate, epoch seconds.
    pub gate_deadline_epoch: i64,
    /// Current time, epoch seconds.
    pub now_epoch: i64,
    /// Extra slack the traveler wants before boarding, minutes.
    pub time_to_kill_mins: i64,
}

impl DepartureQuery {
    pub fn new(gate_deadline_epoch: i64, now_epoch: i64) -> Self {
        Self {
            gate_deadline_epoch,
            now_epoch,
            time_to_kill_mins: 0,
        }
    }

    pub fn with_time_to_kill(mut self, minutes: i64) -> Self {
        self.time_to_kill_mins = minutes.max(0);
        self
    }
}

/// Temporal optimizer.
///
/// The evaluator is any function of a departure epoch returning a success
/// probability in percent. Evaluation errors score the slot as 0 and the
/// search continues.
#[derive(Debug, Clone)]
pub struct TemporalOptimizer {
    config: OptimizerConfig,
}

impl TemporalOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &FlightRiskConfig) -> Self {
        Self::new(config.optimizer.clone())
    }

    /// Override both thresholds (percent).
    pub fn with_thresholds(mut self, risk_threshold: f64, drop_dead_threshold: f64) -> Self {
        self.config.risk_threshold = risk_threshold;
        self.config.drop_dead_threshold = drop_dead_threshold;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Grid scanned for `query`.
    pub fn grid(&self, query: &DepartureQuery) -> TimeGrid {
        TimeGrid::for_deadline(query.gate_deadline_epoch, query.time_to_kill_mins, &self.config)
    }

    fn start(&self, query: &DepartureQuery) -> WindowSearch {
        let grid = self.grid(query);
        let usable = grid.usable_slots(query.now_epoch + self.config.min_lead_secs);
        tracing::debug!(
            anchor = grid.anchor_epoch(),
            slots = grid.len(),
            usable,
            "departure grid built"
        );
        WindowSearch::new(
            grid,
            usable,
            self.config.risk_threshold,
            self.config.drop_dead_threshold,
        )
    }

    fn budget(&self) -> Option<Duration> {
        self.config.timeout_ms.map(Duration::from_millis)
    }

    /// Blocking search.
    pub fn find_optimal_departure<F>(
        &self,
        query: &DepartureQuery,
        mut evaluate: F,
    ) -> DepartureWindow
    where
        F: FnMut(i64) -> FlightRiskResult<f64>,
    {
        let _span =
            tracing::info_span!(spans::OPTIMIZE, deadline = query.gate_deadline_epoch).entered();

        let deadline = self.budget().map(|b| Instant::now() + b);
        let mut search = self.start(query);
        let mut timed_out = false;

        while let Some((slot, epoch)) = search.next_probe() {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }
            let (p, failed) = score(epoch, evaluate(epoch));
            tracing::trace!(slot, epoch, success_probability = p, "slot probed");
            search.record(slot, p, failed);
        }

        conclude(search, timed_out)
    }

    /// Non-blocking search. Each evaluation is bounded by what remains of the
    /// time budget; an evaluation cut short ends the search.
    pub async fn find_optimal_departure_async<F, Fut>(
        &self,
        query: &DepartureQuery,
        mut evaluate: F,
    ) -> DepartureWindow
    where
        F: FnMut(i64) -> Fut,
        Fut: Future<Output = FlightRiskResult<f64>>,
    {
        let span = tracing::info_span!(spans::OPTIMIZE, deadline = query.gate_deadline_epoch);
        let deadline = self.budget().map(|b| tokio::time::Instant::now() + b);
        let mut search = span.in_scope(|| self.start(query));
        let mut timed_out = false;

        while let Some((slot, epoch)) = search.next_probe() {
            let outcome = match deadline {
                Some(d) => match tokio::time::timeout_at(d, evaluate(epoch)).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        timed_out = true;
                        break;
                    }
                },
                None => evaluate(epoch).await,
            };
            span.in_scope(|| {
                let (p, failed) = score(epoch, outcome);
                tracing::trace!(slot, epoch, success_probability = p, "slot probed");
                search.record(slot, p, failed);
            });
        }

        span.in_scope(|| conclude(search, timed_out))
    }
}

impl Default for TemporalOptimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

fn score(epoch: i64, outcome: FlightRiskResult<f64>) -> (f64, bool) {
    match outcome {
        Ok(p) => (p, false),
        Err(e) => {
            events::slot_failed(epoch, &e.to_string());
            (0.0, true)
        }
    }
}

fn conclude(search: WindowSearch, timed_out: bool) -> DepartureWindow {
    if timed_out {
        tracing::warn!("optimizer time budget exhausted, returning partial window");
    }
    let window = search.finish(timed_out);
    events::window_found(
        window.recommended,
        window.drop_dead,
        window.evaluations,
        window.timed_out,
    );
    window
}
