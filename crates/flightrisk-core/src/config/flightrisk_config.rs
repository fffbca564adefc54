//! Top-level FlightRisk configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    DataSourceKind, EvaluationConfig, EvaluatorKind, ObservabilityConfig, OptimizerConfig,
    PlannerConfig, SamplerBackend, SamplingConfig,
};
use crate::constants::MIN_ITERATIONS;
use crate::errors::ConfigError;

/// Name of the project config file looked up by [`FlightRiskConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "flightrisk.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FLIGHTRISK_*`)
/// 2. Project config (`flightrisk.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FlightRiskConfig {
    pub sampling: SamplingConfig,
    pub evaluation: EvaluationConfig,
    pub optimizer: OptimizerConfig,
    pub planner: PlannerConfig,
    pub observability: ObservabilityConfig,
}

impl FlightRiskConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Read one TOML file. Missing sections and keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.iterations < MIN_ITERATIONS {
            return Err(invalid(
                "sampling.iterations",
                format!("must be at least {MIN_ITERATIONS}"),
            ));
        }
        if self.sampling.parallel_chunk_size == 0 {
            return Err(invalid("sampling.parallel_chunk_size", "must be greater than 0"));
        }
        if !self.evaluation.noise_threshold.is_finite() || self.evaluation.noise_threshold < 0.0 {
            return Err(invalid(
                "evaluation.noise_threshold",
                "must be a finite, non-negative multiplier",
            ));
        }
        if self.evaluation.integration_steps == 0 {
            return Err(invalid("evaluation.integration_steps", "must be greater than 0"));
        }
        let opt = &self.optimizer;
        if opt.stride_secs <= 0 {
            return Err(invalid("optimizer.stride_secs", "must be greater than 0"));
        }
        if opt.max_slots == 0 {
            return Err(invalid("optimizer.max_slots", "must be greater than 0"));
        }
        if opt.boarding_cutoff_mins < 0 || opt.min_lead_secs < 0 {
            return Err(invalid(
                "optimizer.boarding_cutoff_mins",
                "cutoff and lead time must not be negative",
            ));
        }
        if !(0.0..=100.0).contains(&opt.risk_threshold) {
            return Err(invalid("optimizer.risk_threshold", "must be between 0 and 100"));
        }
        if !(0.0..=100.0).contains(&opt.drop_dead_threshold) {
            return Err(invalid("optimizer.drop_dead_threshold", "must be between 0 and 100"));
        }
        if opt.drop_dead_threshold > opt.risk_threshold {
            return Err(invalid(
                "optimizer.drop_dead_threshold",
                "must not exceed optimizer.risk_threshold",
            ));
        }
        if self.planner.time_to_kill_mins < 0 {
            return Err(invalid("planner.time_to_kill_mins", "must not be negative"));
        }
        Ok(())
    }

    /// Apply `FLIGHTRISK_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut FlightRiskConfig) {
        if let Ok(val) = std::env::var("FLIGHTRISK_SAMPLING_ITERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.sampling.iterations = v;
            }
        }
        if let Ok(val) = std::env::var("FLIGHTRISK_SAMPLING_BACKEND") {
            if let Some(v) = SamplerBackend::parse(&val) {
                config.sampling.backend = v;
            }
        }
        if let Ok(val) = std::env::var("FLIGHTRISK_SAMPLING_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.sampling.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FLIGHTRISK_EVALUATION_STRATEGY") {
            if let Some(v) = EvaluatorKind::parse(&val) {
                config.evaluation.strategy = v;
            }
        }
        if let Ok(val) = std::env::var("FLIGHTRISK_OPTIMIZER_RISK_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.optimizer.risk_threshold = v;
            }
        }
        if let Ok(val) = std::env::var("FLIGHTRISK_OPTIMIZER_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.optimizer.timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FLIGHTRISK_PLANNER_DATA_SOURCE") {
            if let Some(v) = DataSourceKind::parse(&val) {
                config.planner.data_source = v;
            }
        }
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}
