//! # flightrisk-core
//!
//! Foundation crate for the FlightRisk engine.
//! Defines the data model, traits, errors, config, and constants shared by
//! the sampler, weather, airport, risk, optimizer, and planner crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::FlightRiskConfig;
pub use errors::{FlightRiskError, FlightRiskResult};
pub use models::{
    AirportDistribution, AirportProfile, AirportTier, CorridorPoint, RiskLabel, RiskReport,
    TrafficEstimate, WeatherCondition, WeatherReport, WeatherSample,
};
