//! `cab-sim`: the simulation stepper.
//!
//! # One step
//!
//! ```text
//! step(Δt):
//!   clock += Δt
//!   ① Taxis      : unfrozen taxis advance; pickup/drop-off arrivals are
//!                   handled; taxis at a junction turn (randomly when free,
//!                   routed when on a job).
//!   ② Passengers : assigned passengers walk to the pickup point, dropped-off
//!                   passengers walk to their destination.
//!   ③ Rendezvous : every taxi stopped at a pickup whose passenger is ready
//!                   starts the ride.
//!   ④ Congestion : each edge may ease or worsen; the shortest-path index
//!                   is rebuilt if anything changed.
//!   ⑤ Churn      : a passenger may appear, a taxi may join, each taxi may
//!                   be told to leave.
//!   ⑥ Dispatch   : every waiting passenger is offered to the dispatcher.
//!   → Snapshot
//! ```
//!
//! The order is part of the contract: a taxi that drops off in ① can be
//! dispatched again in ⑥ of the same step.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cab_core::SimConfig;
//! use cab_dispatch::NearestTaxi;
//! use cab_network::NextHopRouter;
//! use cab_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), network, NearestTaxi, NextHopRouter)
//!     .build()?;
//! sim.run_for(120.0, 0.1, &mut NoopObserver)?;
//! println!("{}", sim.counts().passengers_finished);
//! ```

pub mod builder;
pub mod error;
pub mod evolve;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{EdgeView, FleetCounts, PassengerView, Snapshot, TaxiView};
