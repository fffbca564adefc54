//! # flightrisk-weather
//!
//! Converts a 3-point corridor weather report into a drive-time multiplier
//! and the volatility used for traffic noise injection.
//! The destination dominates: delay there cannot be absorbed later.

pub mod catalogue;
pub mod impact;
pub mod weights;

pub use catalogue::ConditionImpact;
pub use impact::{calculate_weather_impact, WeatherImpact, WeatherImpactModel};
pub use weights::CorridorWeights;
