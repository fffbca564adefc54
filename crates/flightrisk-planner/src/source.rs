use flightrisk_core::config::DataSourceKind;
use flightrisk_core::traits::{ILiveWaitProvider, ITrafficProvider, IWeatherProvider};

use crate::simulated::{SimulatedLiveWait, SimulatedTraffic, SimulatedWeather};

/// The three collaborators a planner fetches from, tagged with where their
/// data comes from so callers can always tell simulated answers apart.
#[derive(Debug, Clone)]
pub struct Collaborators<T, W, L> {
    pub traffic: T,
    pub weather: W,
    pub live_wait: L,
    kind: DataSourceKind,
}

impl<T, W, L> Collaborators<T, W, L>
where
    T: ITrafficProvider,
    W: IWeatherProvider,
    L: ILiveWaitProvider,
{
    /// Real collaborators.
    pub fn live(traffic: T, weather: W, live_wait: L) -> Self {
        Self {
            traffic,
            weather,
            live_wait,
            kind: DataSourceKind::Live,
        }
    }
}

impl<T, W, L> Collaborators<T, W, L> {
    pub fn kind(&self) -> DataSourceKind {
        self.kind
    }
}

impl Collaborators<SimulatedTraffic, SimulatedWeather, SimulatedLiveWait> {
    /// Seeded generators standing in for every collaborator.
    pub fn simulated(seed: Option<u64>) -> Self {
        Self {
            traffic: SimulatedTraffic::new(seed),
            weather: SimulatedWeather::new(seed),
            live_wait: SimulatedLiveWait,
            kind: DataSourceKind::Simulated,
        }
    }
}
