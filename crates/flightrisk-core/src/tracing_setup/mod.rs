//! Tracing setup: subscriber initialization, span names, and structured events.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-crate log directives.
pub const LOG_ENV_VAR: &str = "FLIGHTRISK_LOG";

/// Initialize tracing with default observability settings.
///
/// Reads `FLIGHTRISK_LOG` for per-crate log levels, e.g.
/// `FLIGHTRISK_LOG=flightrisk_risk=debug,flightrisk_optimizer=info`.
/// Falls back to `flightrisk=info` if unset or invalid. Idempotent.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from an [`ObservabilityConfig`]. Idempotent: only the
/// first call in a process installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // A host application may already own the global subscriber.
        if result.is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}

/// Filter directive covering every `flightrisk_*` crate at `level`.
pub fn default_directive(level: &str) -> String {
    let level = match level.trim().to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => l.to_string(),
        _ => "info".to_string(),
    };
    format!("flightrisk={level}")
}
