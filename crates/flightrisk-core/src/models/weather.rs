use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reported weather condition at a corridor point.
///
/// Parsing never fails: unrecognized strings map to `Clear`. Deserialization
/// goes through the same parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Mist,
    Drizzle,
    Haze,
    Fog,
    Rain,
    Thunderstorm,
    Snow,
    Squall,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 10] = [
        Self::Clear,
        Self::Clouds,
        Self::Mist,
        Self::Drizzle,
        Self::Haze,
        Self::Fog,
        Self::Rain,
        Self::Thunderstorm,
        Self::Snow,
        Self::Squall,
    ];

    /// Case-insensitive parse; unknown conditions fall back to `Clear`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "clouds" | "cloudy" => Self::Clouds,
            "mist" => Self::Mist,
            "drizzle" => Self::Drizzle,
            "haze" | "smoke" | "dust" => Self::Haze,
            "fog" => Self::Fog,
            "rain" => Self::Rain,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "squall" => Self::Squall,
            _ => Self::Clear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Mist => "Mist",
            Self::Drizzle => "Drizzle",
            Self::Haze => "Haze",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Squall => "Squall",
        }
    }
}

impl From<&str> for WeatherCondition {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for WeatherCondition {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling point along the driving route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CorridorPoint {
    Start,
    Midpoint,
    Destination,
}

impl CorridorPoint {
    pub const ALL: [CorridorPoint; 3] = [Self::Start, Self::Midpoint, Self::Destination];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Midpoint => "Midpoint",
            Self::Destination => "Destination",
        }
    }
}

impl fmt::Display for CorridorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed weather at one corridor point. Only `condition` drives the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub condition: WeatherCondition,
    /// Temperature in °F, carried for display only.
    pub temperature: f64,
}

impl WeatherSample {
    pub fn new(condition: WeatherCondition, temperature: f64) -> Self {
        Self {
            condition,
            temperature,
        }
    }
}

/// Corridor weather report keyed by corridor point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    points: BTreeMap<CorridorPoint, WeatherSample>,
}

impl WeatherReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same condition at every corridor point.
    pub fn uniform(condition: WeatherCondition, temperature: f64) -> Self {
        let mut report = Self::new();
        for point in CorridorPoint::ALL {
            report.insert(point, WeatherSample::new(condition, temperature));
        }
        report
    }

    /// Builder-style insert.
    pub fn with_point(mut self, point: CorridorPoint, sample: WeatherSample) -> Self {
        self.insert(point, sample);
        self
    }

    pub fn insert(&mut self, point: CorridorPoint, sample: WeatherSample) {
        self.points.insert(point, sample);
    }

    pub fn get(&self, point: CorridorPoint) -> Option<&WeatherSample> {
        self.points.get(&point)
    }

    pub fn condition_at(&self, point: CorridorPoint) -> Option<WeatherCondition> {
        self.get(point).map(|s| s.condition)
    }

    /// Corridor points with no observation, in route order.
    pub fn missing_points(&self) -> Vec<CorridorPoint> {
        CorridorPoint::ALL
            .into_iter()
            .filter(|p| !self.points.contains_key(p))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_points().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CorridorPoint, &WeatherSample)> {
        self.points.iter()
    }
}
