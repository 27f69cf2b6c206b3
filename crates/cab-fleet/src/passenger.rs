//! The passenger entity.
//!
//! ```text
//!          assign            board          alight             finish
//! Waiting ───────▶ Preride ───────▶ Ride ───────▶ Postride ───────▶ Finished
//! ```
//!
//! Finished passengers stay in the store; their timestamps feed the wait
//! statistics.

use cab_core::{PassengerId, Point, TaxiId};
use cab_network::TripPoint;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PassengerStatus {
    /// Standing at the origin, waiting for dispatch.
    Waiting,
    /// Taxi assigned; walking to the pickup point, then waiting there.
    Preride,
    /// In the taxi.
    Ride,
    /// Walking from the drop-off point to the destination.
    Postride,
    /// Arrived.
    Finished,
}

impl PassengerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PassengerStatus::Waiting => "waiting",
            PassengerStatus::Preride => "preride",
            PassengerStatus::Ride => "ride",
            PassengerStatus::Postride => "postride",
            PassengerStatus::Finished => "finished",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: TripPoint,
    pub destination: TripPoint,
    /// Current world coordinate.  Not maintained while riding; the taxi's
    /// position stands in for it.
    pub position: Point,
    pub status: PassengerStatus,
    /// Reached the pickup point.
    pub ready: bool,
    pub taxi: Option<TaxiId>,
    pub requested_at: f64,
    pub picked_up_at: Option<f64>,
    pub finished_at: Option<f64>,
}

impl Passenger {
    pub fn new(id: PassengerId, origin: TripPoint, destination: TripPoint, now: f64) -> Self {
        Self {
            id,
            origin,
            destination,
            position: origin.coord,
            status: PassengerStatus::Waiting,
            ready: false,
            taxi: None,
            requested_at: now,
            picked_up_at: None,
            finished_at: None,
        }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == PassengerStatus::Waiting
    }

    /// `Waiting → Preride`.
    pub fn assign(&mut self, taxi: TaxiId) {
        debug_assert!(self.is_waiting(), "{} assigned while {:?}", self.id, self.status);
        self.status = PassengerStatus::Preride;
        self.taxi = Some(taxi);
    }

    /// Standing at the pickup point.
    pub fn mark_ready(&mut self) {
        self.position = self.origin.near;
        self.ready = true;
    }

    /// `Preride → Ride`.
    pub fn board(&mut self, now: f64) {
        self.status = PassengerStatus::Ride;
        self.picked_up_at = Some(now);
    }

    /// `Ride → Postride`, set down at `at`.
    pub fn alight(&mut self, at: Point) {
        self.status = PassengerStatus::Postride;
        self.position = at;
        self.ready = false;
        self.taxi = None;
    }

    /// `Postride → Finished`.
    pub fn finish(&mut self, now: f64) {
        self.status = PassengerStatus::Finished;
        self.position = self.destination.coord;
        self.finished_at = Some(now);
    }

    /// Minutes from request to pickup, once picked up.
    pub fn wait_time(&self) -> Option<f64> {
        self.picked_up_at.map(|t| t - self.requested_at)
    }
}
