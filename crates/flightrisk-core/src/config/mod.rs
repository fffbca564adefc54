//! Configuration system for FlightRisk.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod defaults;
pub mod evaluation_config;
pub mod flightrisk_config;
pub mod observability_config;
pub mod optimizer_config;
pub mod planner_config;
pub mod sampling_config;

pub use evaluation_config::{EvaluationConfig, EvaluatorKind};
pub use flightrisk_config::FlightRiskConfig;
pub use observability_config::ObservabilityConfig;
pub use optimizer_config::OptimizerConfig;
pub use planner_config::{DataSourceKind, PlannerConfig};
pub use sampling_config::{SamplerBackend, SamplingConfig};
