use super::error_code::{self, ErrorCode};

/// Errors raised by external data collaborators (traffic, weather, live wait).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unavailable: {provider}: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("provider {provider} timed out after {timeout_ms}ms")]
    Timeout { provider: String, timeout_ms: u64 },

    #[error("malformed response from {provider}: {reason}")]
    Malformed { provider: String, reason: String },
}

impl ErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::PROVIDER_UNAVAILABLE,
            Self::Timeout { .. } => error_code::PROVIDER_TIMEOUT,
            Self::Malformed { .. } => error_code::PROVIDER_MALFORMED,
        }
    }
}
