//! Taxi motion integration and junction decisions.

use log::trace;

use cab_core::{EdgeId, SimRng, VertexId};
use cab_fleet::{Taxi, TaxiStatus};
use cab_network::{Direction, EdgePos, RoadNetwork, Router};

/// Something a taxi reached during [`advance_taxi`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaxiEvent {
    /// Crossed the pickup anchor while `Preride`.
    ReachedPickup,
    /// Crossed the drop-off anchor while `Ride`.
    ReachedDropoff,
}

/// Move `taxi` along its edge for `dt` minutes at `speed` distance units per
/// minute (scaled down by the edge's congestion).
///
/// Arrival is detected on the unclamped position: the destination counts as
/// reached once the signed distance to it flips sign.  The stored position
/// is then clamped to `[0, 1]`.  Frozen handling is the caller's job.
pub fn advance_taxi(taxi: &mut Taxi, network: &RoadNetwork, dt: f64, speed: f64) -> Option<TaxiEvent> {
    if !taxi.dir.is_moving() {
        return None;
    }

    let edge = network.edge(taxi.at.edge);
    let sign = taxi.dir.sign();
    let raw = taxi.at.pos + sign * dt * speed / edge.cost();

    let event = match (taxi.status, taxi.dest) {
        (TaxiStatus::Available, _) | (_, None) => None,
        (status, Some(dest)) => {
            if dest.edge == taxi.at.edge && (dest.pos - raw) * sign < 0.0 {
                Some(if status == TaxiStatus::Preride {
                    TaxiEvent::ReachedPickup
                } else {
                    TaxiEvent::ReachedDropoff
                })
            } else {
                None
            }
        }
    };

    taxi.at = EdgePos::new(taxi.at.edge, raw);
    event
}

/// The vertex `taxi` is standing on and driving into, if any.
pub fn at_junction(taxi: &Taxi, network: &RoadNetwork) -> Option<VertexId> {
    if !taxi.at_junction() {
        return None;
    }
    let edge = network.edge(taxi.at.edge);
    Some(if taxi.dir == Direction::Backward { edge.start } else { edge.end })
}

/// Pick the next edge for a taxi at a junction.
///
/// A free taxi turns at random (see [`random_turn`]).  A taxi on a job asks
/// `router` for the next hop towards its destination.  No-op when the taxi
/// is not at a junction.
pub fn turn_at_junction<R: Router>(
    taxi:    &mut Taxi,
    network: &RoadNetwork,
    router:  &R,
    rng:     &mut SimRng,
) {
    let Some(vertex) = at_junction(taxi, network) else {
        return;
    };

    match (taxi.status, taxi.dest) {
        (TaxiStatus::Available, _) | (_, None) => {
            let next = random_turn(network, vertex, taxi.at.edge, rng);
            let dir = if network.edge(next).start == vertex {
                Direction::Forward
            } else {
                Direction::Backward
            };
            trace!("{} cruising through {vertex} onto {next}", taxi.id);
            taxi.at = EdgePos::new(next, dir.entry_pos());
            taxi.dir = dir;
        }
        (_, Some(dest)) => {
            let heading = router.direction(network, taxi.at, dest);
            trace!("{} routed through {vertex} onto {} ({:.1} to go)", taxi.id, heading.edge, heading.cost);
            taxi.apply_heading(heading);
        }
    }
}

/// The edge a free taxi takes out of `vertex` after arriving on `from_edge`.
///
/// U-turns only happen at dead ends.  Among the other incident edges, only
/// the least congested are considered, and one of those is chosen uniformly.
pub fn random_turn(network: &RoadNetwork, vertex: VertexId, from_edge: EdgeId, rng: &mut SimRng) -> EdgeId {
    let onward: Vec<EdgeId> = network
        .incident_edges(vertex)
        .iter()
        .copied()
        .filter(|&e| e != from_edge)
        .collect();

    let Some(least) = onward.iter().map(|&e| network.edge(e).congestion).min() else {
        return from_edge;
    };
    let calmest: Vec<EdgeId> = onward
        .into_iter()
        .filter(|&e| network.edge(e).congestion == least)
        .collect();

    rng.choose(&calmest).copied().unwrap_or(from_edge)
}
