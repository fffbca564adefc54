//! # flightrisk-optimizer
//!
//! Finds the latest departure meeting a success threshold ("recommended")
//! and the latest departure with a still-meaningful chance ("drop-dead").
//!
//! Slot `i` of the grid is `anchor − i × stride`, where the anchor is the gate
//! deadline minus boarding cutoff and time-to-kill. Success probability is
//! assumed non-decreasing in `i`; both searches are binary searches sharing
//! one memo table per call. Local violations of that assumption can make the
//! search miss a better slot, but it always terminates.

pub mod grid;
pub mod optimizer;
pub mod search;
pub mod window;

pub use grid::TimeGrid;
pub use optimizer::{DepartureQuery, TemporalOptimizer};
pub use window::{DepartureWindow, SlotProbe};
