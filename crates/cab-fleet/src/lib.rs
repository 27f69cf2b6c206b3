//! `cab-fleet`: the moving entities of the simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`taxi`]      | `Taxi`, `TaxiStatus`                                       |
//! | [`passenger`] | `Passenger`, `PassengerStatus`                             |
//! | [`store`]     | `EntityStore<I, T>` arena, `StoreKey`                      |
//!
//! Taxis and passengers refer to each other only through `TaxiId` /
//! `PassengerId`.  Both live in an [`EntityStore`], which hands out ids that
//! are never reused, so a stale id simply looks up nothing.

pub mod passenger;
pub mod store;
pub mod taxi;


use cab_core::{PassengerId, TaxiId};

pub use passenger::{Passenger, PassengerStatus};
pub use store::{EntityStore, StoreKey};
pub use taxi::{Taxi, TaxiStatus};

/// All taxis ever spawned that have not yet left the fleet.
pub type TaxiStore = EntityStore<TaxiId, Taxi>;

/// All passengers, including finished ones (kept for statistics).
pub type PassengerStore = EntityStore<PassengerId, Passenger>;
