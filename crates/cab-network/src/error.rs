//! Network-subsystem error type.

use thiserror::Error;

use cab_core::{EdgeId, VertexId};

/// Errors produced by `cab-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network has no vertices")]
    Empty,

    #[error("edge {edge} references unknown vertex {vertex}")]
    InvalidVertex { edge: EdgeId, vertex: VertexId },

    #[error("edge {edge} has zero length ({start} → {end})")]
    DegenerateEdge { edge: EdgeId, start: VertexId, end: VertexId },

    #[error("no path from {from} to {to}; the network must be connected")]
    Disconnected { from: VertexId, to: VertexId },

    #[error("no point within {max_distance} of a road after {attempts} attempts")]
    PlacementExhausted { attempts: u32, max_distance: f64 },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
