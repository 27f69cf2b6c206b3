//! `cab-mobility`: how taxis and pedestrians move between two steps.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`engine`] | `advance_taxi`, `at_junction`, `turn_at_junction`, `random_turn` |
//! | [`walk`]   | `walk_toward`, `walk_passenger`                                 |
//!
//! # Movement model
//!
//! Taxis are continuous: each step moves a taxi `dt × speed / cost` along
//! its edge, where `cost = length × congestion`.  A taxi that crosses its
//! destination on the current edge reports a [`TaxiEvent`]; a taxi that
//! reaches an edge endpoint turns onto a new edge (randomly when free,
//! routed when on a job).  Whatever distance was left over at the endpoint
//! is discarded, so a taxi never covers more than one edge per step.
//!
//! Pedestrians walk in straight lines through open space at a fixed speed.

pub mod engine;
pub mod walk;

#[cfg(test)]
mod tests;

pub use engine::{TaxiEvent, advance_taxi, at_junction, random_turn, turn_at_junction};
pub use walk::{PassengerEvent, walk_passenger, walk_toward};
