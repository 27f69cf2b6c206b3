//! `cab-core`: foundational types for the `cabsim` taxi dispatch simulator.
//!
//! This crate is a dependency of every other `cab-*` crate.  It intentionally
//! has no `cab-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VertexId`, `EdgeId`, `TaxiId`, `PassengerId`         |
//! | [`geo`]         | `Point`, `Bounds`, segment projection                 |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`rng`]         | `SimRng` (seeded, simulation-wide)                    |
//! | [`error`]       | `CabError`, `CabResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CabError, CabResult};
pub use geo::{Bounds, Point};
pub use ids::{EdgeId, PassengerId, TaxiId, VertexId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
