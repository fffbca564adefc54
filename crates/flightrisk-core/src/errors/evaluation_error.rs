use super::error_code::{self, ErrorCode};

/// Risk evaluation errors.
///
/// Missing inputs are reported, never defaulted: the caller decides whether
/// to substitute simulated data upstream.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("missing input: {input}")]
    MissingInput { input: String },

    #[error("invalid parameter {field}: {reason}")]
    InvalidParameters { field: String, reason: String },

    #[error("insufficient airport samples: needed {needed}, got {available}")]
    InsufficientSamples { needed: usize, available: usize },
}

impl ErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => error_code::MISSING_INPUT,
            Self::InvalidParameters { .. } => error_code::INVALID_PARAMETERS,
            Self::InsufficientSamples { .. } => error_code::INSUFFICIENT_SAMPLES,
        }
    }
}
