//! # flightrisk-planner
//!
//! The orchestration layer around the engine: fetches collaborator data for a
//! candidate departure, builds the airport distribution at the estimated
//! arrival time, evaluates risk, and drives the temporal optimizer.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `request` | `TripRequest` and the buffer formula |
//! | `source` | `Collaborators` bundle tagged with its `DataSourceKind` |
//! | `simulated` | Seeded stand-ins for the three collaborators |
//! | `cache` | Optional TTL cache for weather and live-wait fetches |
//! | `planner` | `assess` one departure, `plan` a departure window |

pub mod cache;
pub mod planner;
pub mod request;
pub mod simulated;
pub mod source;

pub use cache::FetchCache;
pub use planner::{Assessment, Planner};
pub use request::TripRequest;
pub use simulated::{SimulatedLiveWait, SimulatedTraffic, SimulatedWeather};
pub use source::Collaborators;
