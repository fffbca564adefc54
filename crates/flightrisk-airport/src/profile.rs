use chrono::{DateTime, Duration, NaiveDateTime};
use flightrisk_core::errors::EvaluationError;
use flightrisk_core::models::{AirportProfile, AirportTier, SegmentModel};
use serde::{Deserialize, Serialize};

use crate::multipliers;
use crate::tiers::{classify, normalize_code};

/// PreCheck: shorter and more predictable security lines.
pub const PRECHECK_MEAN_FACTOR: f64 = 0.35;
pub const PRECHECK_SCALE_FACTOR: f64 = 0.4;

/// Live waits carry a scale proportional to the measured mean.
pub const LIVE_SCALE_FRACTION: f64 = 0.25;

/// No-bag check-in is a short uniform delay.
pub const NO_BAG_CHECKIN_MAX_MINS: f64 = 3.0;

/// Inputs for one airport profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub airport_code: String,
    /// Airport-local arrival time.
    pub local_time: NaiveDateTime,
    pub has_bags: bool,
    pub precheck: bool,
    /// Measured security wait in minutes, when a live feed exists.
    pub live_security_wait: Option<f64>,
}

/// Convert an epoch to airport-local wall-clock time.
pub fn local_time(
    epoch_secs: i64,
    utc_offset_minutes: i32,
) -> Result<NaiveDateTime, EvaluationError> {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|utc| utc.naive_utc() + Duration::minutes(i64::from(utc_offset_minutes)))
        .ok_or_else(|| EvaluationError::InvalidParameters {
            field: "epoch".to_string(),
            reason: format!("{epoch_secs} is out of range"),
        })
}

fn security_base(tier: AirportTier) -> (f64, f64) {
    match tier {
        AirportTier::Tier1 => (15.0, 4.0),
        AirportTier::Tier2 => (9.0, 2.0),
        AirportTier::Tier3 => (3.0, 1.5),
    }
}

fn checkin_base(tier: AirportTier) -> (f64, f64) {
    match tier {
        AirportTier::Tier1 => (13.0, 4.0),
        AirportTier::Tier2 => (9.0, 2.0),
        AirportTier::Tier3 => (3.0, 1.0),
    }
}

fn walk_params(tier: AirportTier) -> (f64, f64) {
    match tier {
        AirportTier::Tier1 => (12.0, 5.0),
        AirportTier::Tier2 => (7.0, 2.0),
        AirportTier::Tier3 => (3.0, 1.0),
    }
}

/// Derive segment parameters for one airport visit.
///
/// A live security wait replaces the tier mean and skips the congestion
/// multipliers; PreCheck applies either way.
pub fn build_profile(request: &ProfileRequest) -> Result<AirportProfile, EvaluationError> {
    let airport_code = normalize_code(&request.airport_code);
    let tier = classify(&airport_code);
    let congestion = multipliers::congestion(&request.local_time);

    let checkin = if request.has_bags {
        let (mean, scale) = checkin_base(tier);
        SegmentModel::Gamma {
            mean: mean * congestion,
            scale: scale * congestion,
        }
    } else {
        SegmentModel::Uniform {
            low: 0.0,
            high: NO_BAG_CHECKIN_MAX_MINS,
        }
    };

    let (mut mean, mut scale) = match request.live_security_wait {
        Some(live) => {
            if !live.is_finite() || live < 0.0 {
                return Err(EvaluationError::InvalidParameters {
                    field: "live_security_wait".to_string(),
                    reason: format!("must be finite and non-negative, got {live}"),
                });
            }
            (live, live * LIVE_SCALE_FRACTION)
        }
        None => {
            let (mean, scale) = security_base(tier);
            (mean * congestion, scale * congestion)
        }
    };
    if request.precheck {
        mean *= PRECHECK_MEAN_FACTOR;
        scale *= PRECHECK_SCALE_FACTOR;
    }

    let (walk_mean, walk_std) = walk_params(tier);
    tracing::trace!(
        airport = %airport_code,
        tier = tier.number(),
        congestion,
        live = request.live_security_wait.is_some(),
        "airport profile built"
    );

    Ok(AirportProfile {
        airport_code,
        tier,
        checkin,
        security: SegmentModel::Gamma { mean, scale },
        walk: SegmentModel::Normal {
            mean: walk_mean,
            std_dev: walk_std,
        },
        used_live_data: request.live_security_wait.is_some(),
    })
}
