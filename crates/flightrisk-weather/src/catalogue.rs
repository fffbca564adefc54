use flightrisk_core::models::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Fixed per-condition drive-time effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionImpact {
    /// Expected drive-time multiplier.
    pub multiplier: f64,
    /// Standard deviation of the multiplicative noise around `multiplier`.
    pub volatility: f64,
}

impl ConditionImpact {
    pub fn of(condition: WeatherCondition) -> Self {
        Self {
            multiplier: multiplier(condition),
            volatility: volatility(condition),
        }
    }
}

pub fn multiplier(condition: WeatherCondition) -> f64 {
    match condition {
        WeatherCondition::Clear | WeatherCondition::Clouds => 1.0,
        WeatherCondition::Mist | WeatherCondition::Haze => 1.05,
        WeatherCondition::Drizzle => 1.08,
        WeatherCondition::Fog => 1.15,
        WeatherCondition::Rain => 1.2,
        WeatherCondition::Thunderstorm | WeatherCondition::Squall => 1.35,
        WeatherCondition::Snow => 1.45,
    }
}

pub fn volatility(condition: WeatherCondition) -> f64 {
    match condition {
        WeatherCondition::Clear => 0.02,
        WeatherCondition::Clouds => 0.03,
        WeatherCondition::Drizzle => 0.05,
        WeatherCondition::Mist => 0.08,
        WeatherCondition::Fog | WeatherCondition::Haze => 0.10,
        WeatherCondition::Rain => 0.12,
        WeatherCondition::Thunderstorm => 0.20,
        WeatherCondition::Snow => 0.25,
        WeatherCondition::Squall => 0.40,
    }
}
