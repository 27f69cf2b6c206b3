//! `cab-network`: road network, shortest-path index, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`network`]   | `RoadNetwork`, `RoadNetworkBuilder`, `Vertex`, `Edge`, `Congestion` |
//! | [`index`]     | `ShortestPathIndex`: all-pairs costs and next-hop edges    |
//! | [`position`]  | `EdgePos`, `Direction`                                      |
//! | [`router`]    | `Router` trait, `Heading`, `NextHopRouter`                  |
//! | [`placement`] | `TripPoint`, rejection sampling of points near roads       |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod index;
pub mod network;
pub mod placement;
pub mod position;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use index::ShortestPathIndex;
pub use network::{Congestion, Edge, NetworkDefinition, RoadNetwork, RoadNetworkBuilder, Vertex};
pub use placement::{TripPoint, sample_near_edge};
pub use position::{Direction, EdgePos};
pub use router::{Heading, NextHopRouter, Router, direction};
