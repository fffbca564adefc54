//! TTL cache for slowly varying collaborator data.
//!
//! Weather is keyed by route token, live waits by airport code. Traffic is
//! never cached: it is the input that varies per candidate departure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use flightrisk_core::models::WeatherReport;
use moka::sync::Cache;

const MAX_ENTRIES: u64 = 1_024;

pub struct FetchCache {
    weather: Cache<String, WeatherReport>,
    live_wait: Cache<String, Option<f64>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl FetchCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            weather: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
            live_wait: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn weather(&self, route_token: &str) -> Option<WeatherReport> {
        self.track(self.weather.get(route_token))
    }

    pub fn insert_weather(&self, route_token: &str, report: WeatherReport) {
        self.weather.insert(route_token.to_string(), report);
    }

    /// Outer `None` is a miss; inner `None` is a cached "no live feed".
    pub fn live_wait(&self, airport_code: &str) -> Option<Option<f64>> {
        self.track(self.live_wait.get(airport_code))
    }

    pub fn insert_live_wait(&self, airport_code: &str, minutes: Option<f64>) {
        self.live_wait.insert(airport_code.to_string(), minutes);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn invalidate_all(&self) {
        self.weather.invalidate_all();
        self.live_wait.invalidate_all();
    }

    fn track<V>(&self, value: Option<V>) -> Option<V> {
        let counter = if value.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        value
    }
}

impl std::fmt::Debug for FetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCache")
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
