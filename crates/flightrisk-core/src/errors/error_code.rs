//! ErrorCode trait for surfacing errors across a caller boundary.

/// Every error enum implements this to provide a stable, structured
/// error code string alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "MISSING_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PARAMETERS: &str = "INVALID_PARAMETERS";
pub const MISSING_INPUT: &str = "MISSING_INPUT";
pub const INSUFFICIENT_SAMPLES: &str = "INSUFFICIENT_SAMPLES";
pub const PROVIDER_UNAVAILABLE: &str = "PROVIDER_UNAVAILABLE";
pub const PROVIDER_TIMEOUT: &str = "PROVIDER_TIMEOUT";
pub const PROVIDER_MALFORMED: &str = "PROVIDER_MALFORMED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
