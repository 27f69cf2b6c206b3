//! Passenger trip endpoints and how they are sampled.

use cab_core::{Bounds, Point, SimRng};

use crate::{EdgePos, NetworkError, NetworkResult, RoadNetwork};

/// A location off the road plus the road position that serves it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripPoint {
    /// Where the person actually is (or wants to go).
    pub coord: Point,
    /// The nearest position on the nearest edge; taxis route to this.
    pub anchor: EdgePos,
    /// World coordinate of `anchor`; pedestrians walk to/from this.
    pub near: Point,
}

impl TripPoint {
    /// A point lying exactly on the road at `anchor`.
    pub fn on_edge(network: &RoadNetwork, anchor: EdgePos) -> Self {
        let near = network.point_at(anchor);
        Self { coord: near, anchor, near }
    }

    /// Snap `coord` to the nearest road.  Returns the trip point and the
    /// lateral distance, or `None` for a network without edges.
    pub fn snap(network: &RoadNetwork, coord: Point) -> Option<(Self, f64)> {
        let (edge_id, distance) = network.nearest_edge(coord)?;
        let edge = network.edge(edge_id);
        let pos = coord.project_onto_segment(
            network.vertex(edge.start).pos,
            network.vertex(edge.end).pos,
        );
        let anchor = EdgePos::new(edge_id, pos);
        Some((Self { coord, anchor, near: network.point_at(anchor) }, distance))
    }
}

/// Draw uniform points in `bounds` until one lies within `max_distance` of
/// some edge.
///
/// # Errors
///
/// [`NetworkError::PlacementExhausted`] after `max_attempts` rejections, so
/// a configuration whose acceptance region is empty fails instead of
/// spinning forever.
pub fn sample_near_edge(
    network:      &RoadNetwork,
    rng:          &mut SimRng,
    bounds:       Bounds,
    max_distance: f64,
    max_attempts: u32,
) -> NetworkResult<TripPoint> {
    if bounds.is_degenerate() {
        return Err(NetworkError::PlacementExhausted { attempts: 0, max_distance });
    }
    for _ in 0..max_attempts {
        let coord = Point::new(
            rng.gen_range(bounds.min.x..bounds.max.x),
            rng.gen_range(bounds.min.y..bounds.max.y),
        );
        if let Some((point, distance)) = TripPoint::snap(network, coord) {
            if distance <= max_distance {
                return Ok(point);
            }
        }
    }
    Err(NetworkError::PlacementExhausted { attempts: max_attempts, max_distance })
}
