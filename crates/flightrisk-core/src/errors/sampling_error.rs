use super::error_code::{self, ErrorCode};

/// Distribution sampler errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    #[error("invalid {distribution} parameters: {reason}")]
    InvalidParameters {
        distribution: &'static str,
        reason: String,
    },
}

impl ErrorCode for SamplingError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_PARAMETERS
    }
}
