//! Stochastic evolution of the world: congestion, arrivals and churn.
//!
//! Every function draws from the simulation's single [`SimRng`] and is
//! called from the stepper in a fixed order.  Probabilities for a step of
//! `dt` minutes are `rate × dt`, clamped to `[0, 1]`.

use log::debug;

use cab_core::{EdgeId, PassengerId, SimConfig, SimRng, TaxiId};
use cab_fleet::{Passenger, PassengerStore, Taxi, TaxiStore};
use cab_network::{Congestion, Direction, EdgePos, NetworkResult, RoadNetwork, sample_near_edge};

// ── Congestion ────────────────────────────────────────────────────────────────

/// Draw every edge's start-up level from `weights` (levels 1, 2, 3) and
/// rebuild the index.
pub fn randomize_congestion(network: &mut RoadNetwork, rng: &mut SimRng, weights: &[u32; 3]) {
    for e in 0..network.edge_count() {
        let level = rng
            .weighted_index(weights)
            .map_or(Congestion::Low, |i| Congestion::ALL[i]);
        network.set_congestion(EdgeId(e as u32), level);
    }
    network.refresh_index();
}

/// Let each edge ease (at `rate`) and then worsen (at half `rate`), each by
/// at most one level.  Returns how many edges ended at a new level; the
/// index is already rebuilt when this returns.
pub fn evolve_congestion(network: &mut RoadNetwork, rng: &mut SimRng, rate: f64, dt: f64) -> usize {
    let mut changed = 0;
    for e in 0..network.edge_count() {
        let id = EdgeId(e as u32);
        let mut level = network.edge(id).congestion;
        if let Some(eased) = level.eased() {
            if rng.gen_bool(rate * dt) {
                level = eased;
            }
        }
        if let Some(worse) = level.worsened() {
            if rng.gen_bool(rate * 0.5 * dt) {
                level = worse;
            }
        }
        if network.set_congestion(id, level) {
            changed += 1;
        }
    }
    network.refresh_index();
    changed
}

// ── Arrivals ──────────────────────────────────────────────────────────────────

/// Add a waiting passenger with random origin and destination near roads.
pub fn spawn_passenger(
    passengers: &mut PassengerStore,
    network:    &RoadNetwork,
    rng:        &mut SimRng,
    config:     &SimConfig,
    now:        f64,
) -> NetworkResult<PassengerId> {
    let max_d = config.max_passenger_edge_distance;
    let tries = config.max_spawn_attempts;
    let origin = sample_near_edge(network, rng, config.spawn_bounds, max_d, tries)?;
    let destination = sample_near_edge(network, rng, config.spawn_bounds, max_d, tries)?;
    let id = passengers.insert_with(|id| Passenger::new(id, origin, destination, now));
    debug!("{id} requests a ride at {} → {}", origin.coord, destination.coord);
    Ok(id)
}

/// Add an available taxi at a uniformly random position and direction.
/// `None` only for a network without edges.
pub fn spawn_taxi(taxis: &mut TaxiStore, network: &RoadNetwork, rng: &mut SimRng) -> Option<TaxiId> {
    if network.edge_count() == 0 {
        return None;
    }
    let edge = EdgeId(rng.gen_range(0..network.edge_count()) as u32);
    let pos: f64 = rng.random();
    let dir = if rng.gen_bool(0.5) { Direction::Forward } else { Direction::Backward };
    let id = taxis.insert_with(|id| Taxi::new(id, EdgePos::new(edge, pos), dir));
    debug!("{id} joined the fleet on {edge}");
    Some(id)
}

// ── Churn ─────────────────────────────────────────────────────────────────────

/// Probability that a new taxi joins during a step: the churn rate, scaled
/// up by how far the fleet is below its initial size.
pub fn join_probability(config: &SimConfig, fleet_size: usize, dt: f64) -> f64 {
    let shortfall = config.initial_taxis.saturating_sub(fleet_size).max(1);
    config.taxi_churn_rate * dt * shortfall as f64
}

/// Probability that any one taxi is told to leave during a step.
pub fn leave_probability(config: &SimConfig, dt: f64) -> f64 {
    config.taxi_churn_rate * dt / config.initial_taxis.max(1) as f64
}

/// Ask each taxi to leave with probability `p`.  Free taxis go at once;
/// busy ones finish their current job first.  Returns `(removed, flagged)`.
pub fn churn_taxis(taxis: &mut TaxiStore, rng: &mut SimRng, p: f64) -> (usize, usize) {
    let mut removed = 0;
    let mut flagged = 0;
    for id in taxis.ids() {
        if !rng.gen_bool(p) {
            continue;
        }
        let Some(taxi) = taxis.get_mut(id) else {
            continue;
        };
        if taxi.is_available() {
            taxis.remove(id);
            removed += 1;
            debug!("{id} left the fleet");
        } else if !taxi.pending_removal {
            taxi.pending_removal = true;
            flagged += 1;
            debug!("{id} will leave after its current job");
        }
    }
    (removed, flagged)
}
