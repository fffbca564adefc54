pub mod airport;
pub mod risk_label;
pub mod risk_report;
pub mod traffic;
pub mod weather;

pub use airport::{
    AirportDistribution, AirportProfile, AirportTier, SegmentModel, SegmentSamples,
};
pub use risk_label::RiskLabel;
pub use risk_report::{RiskMetrics, RiskReport, SegmentBreakdown};
pub use traffic::{RouteEstimate, TrafficEstimate};
pub use weather::{CorridorPoint, WeatherCondition, WeatherReport, WeatherSample};
