//! `cab-dispatch`: matching waiting passengers to free taxis.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`model`]    | `Dispatcher` trait, `Offer`, `NearestTaxi` policy          |
//! | [`allocate`] | `allocate` pass and the `Assignment` record it returns     |
//!
//! # Design notes
//!
//! A [`Dispatcher`] only *chooses*: given one pickup point and the free
//! taxis, it names a taxi or declines.  [`allocate`] owns the mutation, so
//! every policy gets the same exclusivity guarantee: the candidate list is
//! rebuilt from currently available taxis before each passenger, and a taxi
//! leaves the available set the moment it is assigned.

pub mod allocate;
pub mod model;


pub use allocate::{Assignment, allocate};
pub use model::{Dispatcher, NearestTaxi, Offer};
