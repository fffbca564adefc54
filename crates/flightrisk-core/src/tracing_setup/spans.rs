//! Span names used across the engine.

pub const EVALUATE: &str = "flightrisk.evaluate";
pub const OPTIMIZE: &str = "flightrisk.optimize";
pub const ASSESS: &str = "flightrisk.assess";
pub const FETCH: &str = "flightrisk.fetch";
