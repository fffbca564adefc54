//! # flightrisk-risk
//!
//! Composes traffic, weather, and airport time into a total trip-time
//! distribution and derives the decision statistics of a [`RiskReport`].
//!
//! Two interchangeable strategies implement [`IRiskEvaluator`]:
//! - [`SampledEvaluator`]: Monte Carlo over triangular traffic, normal
//!   weather noise, and the airport's own sample sets.
//! - [`AnalyticEvaluator`]: moment-matched normal drive + walk term convolved
//!   with a gamma queueing term by quadrature.
//!
//! [`RiskReport`]: flightrisk_core::models::RiskReport
//! [`IRiskEvaluator`]: flightrisk_core::traits::IRiskEvaluator

pub mod analytic;
pub mod confidence;
pub mod inputs;
pub mod sampled;
pub mod strategy;

pub use analytic::AnalyticEvaluator;
pub use confidence::model_confidence;
pub use sampled::SampledEvaluator;
pub use strategy::evaluator_for;
