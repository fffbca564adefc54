//! # flightrisk-airport
//!
//! Check-in, security, and terminal-walk time distributions.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `tiers` | Code normalization and the static tier lists |
//! | `multipliers` | Time-of-day and day/season congestion factors |
//! | `profile` | Segment parameters per tier, PreCheck, live-wait override |
//! | `engine` | Draws the three segment sample sets |

pub mod engine;
pub mod multipliers;
pub mod profile;
pub mod tiers;

pub use engine::AirportQueueModel;
pub use profile::{build_profile, local_time, ProfileRequest};
pub use tiers::{classify, normalize_code};
