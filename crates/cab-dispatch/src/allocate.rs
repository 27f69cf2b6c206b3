//! The per-step assignment pass.

use log::debug;

use cab_core::{PassengerId, TaxiId};
use cab_fleet::{PassengerStore, TaxiStore};
use cab_network::{EdgePos, RoadNetwork, Router};

use crate::Dispatcher;

/// One taxi ↔ passenger pairing made by [`allocate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Assignment {
    pub passenger: PassengerId,
    pub taxi: TaxiId,
    /// Route cost from the taxi to the pickup point at assignment time.
    pub cost: f64,
}

/// Offer every waiting passenger, in id order, to `dispatcher`.
///
/// Each accepted offer moves the taxi to `Preride` (destination = the
/// passenger's pickup anchor, heading applied immediately) and the
/// passenger to `Preride`.  A taxi is assigned at most once per call, and
/// only taxis that were `Available` are ever offered.
pub fn allocate<D: Dispatcher, R: Router>(
    network:          &RoadNetwork,
    router:           &R,
    dispatcher:       &D,
    taxis:            &mut TaxiStore,
    passengers:       &mut PassengerStore,
    max_pickup_range: f64,
) -> Vec<Assignment> {
    let mut made = Vec::new();

    let waiting: Vec<(PassengerId, EdgePos)> = passengers
        .iter()
        .filter(|(_, p)| p.is_waiting())
        .map(|(id, p)| (id, p.origin.anchor))
        .collect();

    for (pid, pickup) in waiting {
        let candidates: Vec<(TaxiId, EdgePos)> = taxis
            .iter()
            .filter(|(_, t)| t.is_available())
            .map(|(id, t)| (id, t.at))
            .collect();
        if candidates.is_empty() {
            break;
        }

        let Some(offer) = dispatcher.choose(network, router, pickup, &candidates, max_pickup_range) else {
            continue;
        };
        let (Some(taxi), Some(passenger)) = (taxis.get_mut(offer.taxi), passengers.get_mut(pid)) else {
            continue;
        };
        if !taxi.is_available() {
            continue;
        }

        taxi.assign(pid, pickup, offer.heading);
        passenger.assign(offer.taxi);
        debug!("dispatch: {} → {pid} (cost {:.1})", offer.taxi, offer.heading.cost);
        made.push(Assignment { passenger: pid, taxi: offer.taxi, cost: offer.heading.cost });
    }

    made
}
