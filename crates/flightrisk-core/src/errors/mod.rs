//! Error handling for FlightRisk.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod flightrisk_error;
pub mod provider_error;
pub mod sampling_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use evaluation_error::EvaluationError;
pub use flightrisk_error::{FlightRiskError, FlightRiskResult};
pub use provider_error::ProviderError;
pub use sampling_error::SamplingError;
