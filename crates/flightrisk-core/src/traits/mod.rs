pub mod evaluator;
pub mod providers;
pub mod sampler;

pub use evaluator::IRiskEvaluator;
pub use providers::{ILiveWaitProvider, ITrafficProvider, IWeatherProvider};
pub use sampler::ISampler;
