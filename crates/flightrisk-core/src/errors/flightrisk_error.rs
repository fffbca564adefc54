use super::{ConfigError, ErrorCode, EvaluationError, ProviderError, SamplingError};

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlightRiskError {
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for FlightRiskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sampling(e) => e.error_code(),
            Self::Evaluation(e) => e.error_code(),
            Self::Provider(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type FlightRiskResult<T> = Result<T, FlightRiskError>;
