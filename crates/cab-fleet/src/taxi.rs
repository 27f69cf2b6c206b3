//! The taxi entity and its lifecycle transitions.
//!
//! ```text
//!            assign              start_ride            finish_ride
//! Available ───────▶ Preride ─────────────▶ Ride ──────────────▶ Available
//! ```
//!
//! Motion (advancing `at`, junction turns) lives in `cab-mobility`; this
//! module only owns the fields and the bookkeeping of each transition.

use cab_core::{PassengerId, TaxiId};
use cab_network::{Direction, EdgePos, Heading};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TaxiStatus {
    /// Cruising with no job.
    Available,
    /// Driving to a passenger's pickup point.
    Preride,
    /// Carrying a passenger to the drop-off point.
    Ride,
}

impl TaxiStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaxiStatus::Available => "available",
            TaxiStatus::Preride => "preride",
            TaxiStatus::Ride => "ride",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Taxi {
    pub id: TaxiId,
    pub at: EdgePos,
    pub dir: Direction,
    pub status: TaxiStatus,
    pub passenger: Option<PassengerId>,
    /// Pickup anchor while `Preride`, drop-off anchor while `Ride`.
    pub dest: Option<EdgePos>,
    /// Simulated minute before which the taxi does not move.
    pub frozen_until: f64,
    /// Leave the fleet at the end of the current ride.
    pub pending_removal: bool,
}

impl Taxi {
    /// A new available taxi, free to move immediately.
    pub fn new(id: TaxiId, at: EdgePos, dir: Direction) -> Self {
        Self {
            id,
            at,
            dir,
            status: TaxiStatus::Available,
            passenger: None,
            dest: None,
            frozen_until: f64::NEG_INFINITY,
            pending_removal: false,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == TaxiStatus::Available
    }

    #[inline]
    pub fn is_frozen(&self, now: f64) -> bool {
        self.frozen_until > now
    }

    pub fn freeze_until(&mut self, until: f64) {
        self.frozen_until = until;
    }

    /// `true` when the taxi sits on the endpoint it is driving towards.
    pub fn at_junction(&self) -> bool {
        (self.dir == Direction::Backward && self.at.pos <= 0.0)
            || (self.dir == Direction::Forward && self.at.pos >= 1.0)
    }

    /// Follow a routing answer.  Switching edges puts the taxi at the entry
    /// end of the new edge for the new direction.
    pub fn apply_heading(&mut self, heading: Heading) {
        if heading.edge != self.at.edge {
            self.at = EdgePos::new(heading.edge, heading.dir.entry_pos());
        }
        self.dir = heading.dir;
    }

    /// Halt at `pos` on the current edge.
    pub fn stop_at(&mut self, pos: f64) {
        self.at = EdgePos::new(self.at.edge, pos);
        self.dir = Direction::Stopped;
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// `Available → Preride`: head for `pickup` to collect `passenger`.
    pub fn assign(&mut self, passenger: PassengerId, pickup: EdgePos, heading: Heading) {
        debug_assert!(self.is_available(), "{} assigned while {:?}", self.id, self.status);
        self.status = TaxiStatus::Preride;
        self.passenger = Some(passenger);
        self.dest = Some(pickup);
        self.apply_heading(heading);
    }

    /// `Preride → Ride`: passenger aboard, head for `dropoff`.
    pub fn start_ride(&mut self, dropoff: EdgePos, heading: Heading) {
        debug_assert_eq!(self.status, TaxiStatus::Preride);
        self.status = TaxiStatus::Ride;
        self.dest = Some(dropoff);
        self.apply_heading(heading);
    }

    /// `Ride → Available`.  Returns the passenger that got out.
    pub fn finish_ride(&mut self, free_at: f64) -> Option<PassengerId> {
        self.status = TaxiStatus::Available;
        self.dest = None;
        self.frozen_until = free_at;
        self.passenger.take()
    }
}
