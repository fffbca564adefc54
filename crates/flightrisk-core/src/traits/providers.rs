//! Collaborator seams. Implementations live outside the engine; the planner
//! ships simulated ones for the `simulated` data source.

use crate::errors::FlightRiskResult;
use crate::models::{RouteEstimate, WeatherReport};

/// Drive-time estimates for a departure.
#[allow(async_fn_in_trait)]
pub trait ITrafficProvider: Send + Sync {
    /// Optimistic / likely / pessimistic drive time plus an opaque route token.
    async fn route_estimate(
        &self,
        origin: &str,
        destination: &str,
        departure_epoch: i64,
    ) -> FlightRiskResult<RouteEstimate>;
}

/// Weather along a route.
#[allow(async_fn_in_trait)]
pub trait IWeatherProvider: Send + Sync {
    /// Conditions at the start, midpoint, and destination of the route.
    async fn route_weather(&self, route_token: &str) -> FlightRiskResult<WeatherReport>;
}

/// Live security-queue wait times.
#[allow(async_fn_in_trait)]
pub trait ILiveWaitProvider: Send + Sync {
    /// Current wait in minutes, or `None` when the airport has no live feed.
    async fn security_wait_minutes(&self, airport_code: &str) -> FlightRiskResult<Option<f64>>;
}
