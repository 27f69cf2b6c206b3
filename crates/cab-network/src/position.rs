//! Positions expressed relative to an edge.

use cab_core::EdgeId;

/// Travel direction along an edge.
///
/// `Forward` runs start → end (+1), `Backward` runs end → start (−1).
/// `Stopped` (0) is only ever held by a vehicle waiting at a pick-up point;
/// the router never returns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
    Stopped,
}

impl Direction {
    /// `+1.0`, `-1.0` or `0.0`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward  => 1.0,
            Direction::Backward => -1.0,
            Direction::Stopped  => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward  => "forward",
            Direction::Backward => "backward",
            Direction::Stopped  => "stopped",
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        self != Direction::Stopped
    }

    /// Position on a freshly entered edge: a vehicle heading forward enters
    /// at the start (0), one heading backward enters at the end (1).
    #[inline]
    pub fn entry_pos(self) -> f64 {
        match self {
            Direction::Backward => 1.0,
            _ => 0.0,
        }
    }
}

/// A point on the network: an edge plus a fraction `pos ∈ [0, 1]` along it,
/// `0` at the edge's start vertex and `1` at its end vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgePos {
    pub edge: EdgeId,
    pub pos: f64,
}

impl EdgePos {
    /// Construct, clamping `pos` into `[0, 1]`.
    #[inline]
    pub fn new(edge: EdgeId, pos: f64) -> Self {
        Self { edge, pos: pos.clamp(0.0, 1.0) }
    }

    #[inline]
    pub fn at_start(edge: EdgeId) -> Self {
        Self { edge, pos: 0.0 }
    }

    #[inline]
    pub fn at_end(edge: EdgeId) -> Self {
        Self { edge, pos: 1.0 }
    }
}
