//! Read-only view of the world after a step.
//!
//! A [`Snapshot`] owns plain copies of everything a renderer or writer
//! needs, so it can outlive the borrow of the simulation and never exposes
//! routing internals.

use cab_core::{EdgeId, PassengerId, Point, SimClock, TaxiId};
use cab_fleet::{PassengerStatus, PassengerStore, TaxiStatus, TaxiStore};
use cab_network::{Congestion, Direction, EdgePos, RoadNetwork};

#[derive(Clone, Debug, PartialEq)]
pub struct TaxiView {
    pub id: TaxiId,
    pub at: EdgePos,
    pub position: Point,
    pub dir: Direction,
    pub status: TaxiStatus,
    pub passenger: Option<PassengerId>,
    pub frozen: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PassengerView {
    pub id: PassengerId,
    /// World coordinate; while riding, the taxi's.
    pub position: Point,
    pub status: PassengerStatus,
    pub ready: bool,
    pub taxi: Option<TaxiId>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeView {
    pub id: EdgeId,
    pub congestion: Congestion,
}

/// Head counts by state plus the running mean wait.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetCounts {
    pub taxis_available: usize,
    pub taxis_preride: usize,
    pub taxis_ride: usize,
    pub passengers_waiting: usize,
    pub passengers_preride: usize,
    pub passengers_ride: usize,
    pub passengers_postride: usize,
    pub passengers_finished: usize,
    /// Mean minutes from request to pickup over every passenger picked up
    /// so far; `None` before the first pickup.
    pub mean_wait_mins: Option<f64>,
}

impl FleetCounts {
    pub fn tally(taxis: &TaxiStore, passengers: &PassengerStore) -> Self {
        let mut c = FleetCounts::default();
        for taxi in taxis.values() {
            match taxi.status {
                TaxiStatus::Available => c.taxis_available += 1,
                TaxiStatus::Preride => c.taxis_preride += 1,
                TaxiStatus::Ride => c.taxis_ride += 1,
            }
        }

        let mut waited = 0.0;
        let mut picked_up = 0usize;
        for p in passengers.values() {
            match p.status {
                PassengerStatus::Waiting => c.passengers_waiting += 1,
                PassengerStatus::Preride => c.passengers_preride += 1,
                PassengerStatus::Ride => c.passengers_ride += 1,
                PassengerStatus::Postride => c.passengers_postride += 1,
                PassengerStatus::Finished => c.passengers_finished += 1,
            }
            if let Some(w) = p.wait_time() {
                waited += w;
                picked_up += 1;
            }
        }
        c.mean_wait_mins = (picked_up > 0).then(|| waited / picked_up as f64);
        c
    }

    pub fn taxis(&self) -> usize {
        self.taxis_available + self.taxis_preride + self.taxis_ride
    }

    pub fn passengers(&self) -> usize {
        self.passengers_waiting
            + self.passengers_preride
            + self.passengers_ride
            + self.passengers_postride
            + self.passengers_finished
    }
}

#[derive(Clone, Debug)]
pub struct Snapshot {
    pub clock: SimClock,
    pub taxis: Vec<TaxiView>,
    pub passengers: Vec<PassengerView>,
    pub edges: Vec<EdgeView>,
    pub counts: FleetCounts,
}

impl Snapshot {
    pub fn capture(
        clock:      SimClock,
        network:    &RoadNetwork,
        taxis:      &TaxiStore,
        passengers: &PassengerStore,
    ) -> Self {
        let now = clock.now();
        let taxi_views: Vec<TaxiView> = taxis
            .iter()
            .map(|(id, t)| TaxiView {
                id,
                at: t.at,
                position: network.point_at(t.at),
                dir: t.dir,
                status: t.status,
                passenger: t.passenger,
                frozen: t.is_frozen(now),
            })
            .collect();

        let passenger_views = passengers
            .iter()
            .map(|(id, p)| {
                let riding_in = match p.status {
                    PassengerStatus::Ride => p.taxi.and_then(|t| taxis.get(t)),
                    _ => None,
                };
                PassengerView {
                    id,
                    position: riding_in.map_or(p.position, |t| network.point_at(t.at)),
                    status: p.status,
                    ready: p.ready,
                    taxi: p.taxi,
                }
            })
            .collect();

        let edges = network
            .edges()
            .iter()
            .map(|e| EdgeView { id: e.id, congestion: e.congestion })
            .collect();

        Self {
            clock,
            taxis: taxi_views,
            passengers: passenger_views,
            edges,
            counts: FleetCounts::tally(taxis, passengers),
        }
    }

    pub fn taxi(&self, id: TaxiId) -> Option<&TaxiView> {
        self.taxis.iter().find(|t| t.id == id)
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&PassengerView> {
        self.passengers.iter().find(|p| p.id == id)
    }
}
