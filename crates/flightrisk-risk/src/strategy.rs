use flightrisk_core::config::{EvaluatorKind, FlightRiskConfig};
use flightrisk_core::traits::IRiskEvaluator;

use crate::{AnalyticEvaluator, SampledEvaluator};

/// Build the evaluator named by `evaluation.strategy`.
pub fn evaluator_for(config: &FlightRiskConfig) -> Box<dyn IRiskEvaluator> {
    match config.evaluation.strategy {
        EvaluatorKind::Sampled => Box::new(SampledEvaluator::from_config(config)),
        EvaluatorKind::Analytic => Box::new(AnalyticEvaluator::from_config(config)),
    }
}
