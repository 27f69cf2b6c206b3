//! Next-hop routing between arbitrary positions on edges.
//!
//! # Pluggability
//!
//! The mobility and dispatch code call routing through the [`Router`]
//! trait, so a different policy (e.g. one that ignores congestion) can be
//! swapped in without touching them.  The default [`NextHopRouter`] reads
//! the network's [`ShortestPathIndex`](crate::ShortestPathIndex).
//!
//! # Greedy next hop
//!
//! A query never returns a full path.  It answers "which edge, which way,
//! and how far in total" for the position the vehicle is at *now*; moving
//! vehicles ask again at every junction.
//!
//! # Cost units
//!
//! Cost is `length × congestion`, summed over whole edges from the index
//! plus the fractional parts of the first and last edge.

use cab_core::{EdgeId, VertexId};

use crate::network::{Edge, RoadNetwork};
use crate::{Direction, EdgePos};

// ── Heading ───────────────────────────────────────────────────────────────────

/// Result of a routing query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heading {
    /// The edge to be moving along right now.
    pub edge: EdgeId,
    /// `Forward` or `Backward` along `edge`; never `Stopped`.
    pub dir: Direction,
    /// Estimated total remaining cost to the target.
    pub cost: f64,
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing policy.
pub trait Router {
    /// Where should an entity at `from` head to reach `to`?
    fn direction(&self, network: &RoadNetwork, from: EdgePos, to: EdgePos) -> Heading;
}

/// The default router: [`direction`] over the network's shortest-path
/// index.
#[derive(Copy, Clone, Debug, Default)]
pub struct NextHopRouter;

impl Router for NextHopRouter {
    fn direction(&self, network: &RoadNetwork, from: EdgePos, to: EdgePos) -> Heading {
        direction(network, from, to)
    }
}

// ── Oracle ────────────────────────────────────────────────────────────────────

/// Next edge, direction and remaining cost from `from` towards `to`.
///
/// On the same edge the answer follows from the relative positions alone.
/// Otherwise four routes are compared (leave `from` via its start or end
/// vertex, arrive at `to` via its start or end vertex) and the cheaper exit
/// wins (ties go to the end vertex).  If the vehicle is already standing on
/// the winning exit vertex, the first edge of the indexed shortest path out
/// of it is returned instead of the current edge.
pub fn direction(network: &RoadNetwork, from: EdgePos, to: EdgePos) -> Heading {
    let from_edge = network.edge(from.edge);

    if from.edge == to.edge {
        return Heading {
            edge: from.edge,
            dir: if to.pos > from.pos { Direction::Forward } else { Direction::Backward },
            cost: (to.pos - from.pos).abs() * from_edge.cost(),
        };
    }

    let to_edge = network.edge(to.edge);
    let index = network.index();

    // Cost already behind / still ahead on each partial edge.
    let from_cost = from_edge.cost();
    let to_cost = to_edge.cost();
    let back_sunk = from_cost * from.pos;
    let fwd_sunk = from_cost * (1.0 - from.pos);
    let via_to_start = to_cost * to.pos;
    let via_to_end = to_cost * (1.0 - to.pos);

    let exit = |vertex: VertexId, sunk: f64| -> (f64, VertexId) {
        let to_start = index.dist(vertex, to_edge.start) + sunk + via_to_start;
        let to_end = index.dist(vertex, to_edge.end) + sunk + via_to_end;
        if to_start < to_end {
            (to_start, to_edge.start)
        } else {
            (to_end, to_edge.end)
        }
    };

    let (cost_from_start, target_from_start) = exit(from_edge.start, back_sunk);
    let (cost_from_end, target_from_end) = exit(from_edge.end, fwd_sunk);

    if cost_from_start < cost_from_end {
        if from.pos > 0.0 {
            return Heading { edge: from.edge, dir: Direction::Backward, cost: cost_from_start };
        }
        leave_vertex(network, from_edge.start, target_from_start, to_edge, cost_from_start)
    } else {
        if from.pos < 1.0 {
            return Heading { edge: from.edge, dir: Direction::Forward, cost: cost_from_end };
        }
        leave_vertex(network, from_edge.end, target_from_end, to_edge, cost_from_end)
    }
}

/// Heading for an entity standing on `junction`, bound for `target` (an
/// endpoint of `to_edge`).  When the two coincide the index has no next hop
/// and the entity turns straight onto `to_edge`.
fn leave_vertex(
    network:  &RoadNetwork,
    junction: VertexId,
    target:   VertexId,
    to_edge:  &Edge,
    cost:     f64,
) -> Heading {
    let edge_id = network
        .index()
        .next_edge(junction, target)
        .unwrap_or(to_edge.id);
    let edge = network.edge(edge_id);
    let dir = if edge.start == junction { Direction::Forward } else { Direction::Backward };
    Heading { edge: edge_id, dir, cost }
}
