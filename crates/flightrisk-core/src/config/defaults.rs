// Single source of truth for all default values.

// --- Sampling ---
pub const DEFAULT_ITERATIONS: usize = 1_000;
pub const DEFAULT_PARALLEL_CHUNK_SIZE: usize = 4_096;

// --- Evaluation ---
pub const DEFAULT_NOISE_THRESHOLD: f64 = 1.02;
pub const DEFAULT_REPRESENTATIVE_SAMPLES: usize = 1_000;
pub const DEFAULT_INTEGRATION_STEPS: usize = 512;

// --- Optimizer ---
pub const DEFAULT_STRIDE_SECS: i64 = 300; // 5 minutes
pub const DEFAULT_MAX_SLOTS: usize = 48; // 4 hours of lookback
pub const DEFAULT_BOARDING_CUTOFF_MINS: i64 = 15;
pub const DEFAULT_MIN_LEAD_SECS: i64 = 300;
pub const DEFAULT_RISK_THRESHOLD: f64 = 90.0;
pub const DEFAULT_DROP_DEAD_THRESHOLD: f64 = 10.0;

// --- Planner ---
pub const DEFAULT_HAS_BAGS: bool = false;
pub const DEFAULT_PRECHECK: bool = false;
pub const DEFAULT_TIME_TO_KILL_MINS: i64 = 0;
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 0;
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 2_500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
