//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed risk evaluation.
pub fn evaluation_completed(strategy: &str, success_probability: f64, p95_eta: f64) {
    tracing::debug!(
        event = "evaluation_completed",
        strategy = %strategy,
        success_probability = success_probability,
        p95_eta = p95_eta,
        "risk evaluated"
    );
}

/// Log a slot whose evaluation failed and was scored as zero.
pub fn slot_failed(epoch: i64, error: &str) {
    tracing::warn!(
        event = "slot_failed",
        epoch = epoch,
        error = %error,
        "slot evaluation failed, treating as unreachable"
    );
}

/// Log a finished departure-window search.
pub fn window_found(
    recommended: Option<i64>,
    drop_dead: Option<i64>,
    evaluations: usize,
    timed_out: bool,
) {
    tracing::info!(
        event = "window_found",
        recommended = ?recommended,
        drop_dead = ?drop_dead,
        evaluations = evaluations,
        timed_out = timed_out,
        "departure window computed"
    );
}

/// Log a collaborator fetch that failed or timed out.
pub fn provider_degraded(provider: &str, reason: &str) {
    tracing::warn!(
        event = "provider_degraded",
        provider = %provider,
        reason = %reason,
        "collaborator fetch degraded"
    );
}
