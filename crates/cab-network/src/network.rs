//! Road network representation and builder.
//!
//! # Data layout
//!
//! Vertices and edges live in two `Vec`s indexed by `VertexId` / `EdgeId`.
//! Edges are **undirected** but ordered: `start → end` defines direction
//! `+1`.  Each vertex keeps the ids of its incident edges in edge-insertion
//! order, which is also the order the random-turn logic sees candidates in.
//!
//! Topology is frozen once built.  The only mutable state is the per-edge
//! [`Congestion`] level, changed exclusively through
//! [`RoadNetwork::set_congestion`], which marks the [`ShortestPathIndex`]
//! stale until [`RoadNetwork::refresh_index`] runs.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) of edge segments answers "which road is nearest
//! to this point?" for passenger placement.

use log::{debug, info, warn};
use rstar::RTree;
use rstar::primitives::{GeomWithData, Line};

use cab_core::{EdgeId, Point, VertexId};

use crate::{EdgePos, NetworkError, NetworkResult, ShortestPathIndex};

// ── Congestion ────────────────────────────────────────────────────────────────

/// Traffic level of one edge.  Multiplies both routing cost and travel time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Congestion {
    Low,
    Medium,
    Severe,
}

impl Congestion {
    pub const ALL: [Congestion; 3] = [Congestion::Low, Congestion::Medium, Congestion::Severe];

    /// Numeric level 1–3.
    #[inline]
    pub fn level(self) -> u8 {
        match self {
            Congestion::Low    => 1,
            Congestion::Medium => 2,
            Congestion::Severe => 3,
        }
    }

    /// Cost multiplier (equal to the level).
    #[inline]
    pub fn factor(self) -> f64 {
        self.level() as f64
    }

    pub fn from_level(level: u8) -> Option<Congestion> {
        match level {
            1 => Some(Congestion::Low),
            2 => Some(Congestion::Medium),
            3 => Some(Congestion::Severe),
            _ => None,
        }
    }

    /// One level lighter, or `None` at `Low`.
    pub fn eased(self) -> Option<Congestion> {
        Congestion::from_level(self.level() - 1)
    }

    /// One level heavier, or `None` at `Severe`.
    pub fn worsened(self) -> Option<Congestion> {
        Congestion::from_level(self.level() + 1)
    }
}

// ── Vertex / Edge ─────────────────────────────────────────────────────────────

/// A junction.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: Point,
    pub label: String,
    /// Incident edges, in edge-insertion order.
    pub edges: Vec<EdgeId>,
}

/// A road segment between two vertices.
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: EdgeId,
    pub start: VertexId,
    pub end: VertexId,
    /// Euclidean length between the endpoints.  Constant.
    pub length: f64,
    /// Unit vector start → end.  Constant.
    pub unit: Point,
    pub congestion: Congestion,
}

impl Edge {
    /// Cost of traversing the whole edge: `length × congestion`.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.length * self.congestion.factor()
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

type EdgeSegment = GeomWithData<Line<[f64; 2]>, EdgeId>;

/// Undirected road graph with per-edge congestion, its all-pairs
/// shortest-path index, and a spatial index of edge segments.
///
/// Do not construct directly; use [`RoadNetworkBuilder`].
#[derive(Debug)]
pub struct RoadNetwork {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    index: ShortestPathIndex,
    index_stale: bool,
    spatial_idx: RTree<EdgeSegment>,
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Topology ──────────────────────────────────────────────────────────

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Edges incident to `v`, in edge-insertion order.
    #[inline]
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.vertices[v.index()].edges
    }

    /// World coordinate of a position on an edge.
    pub fn point_at(&self, at: EdgePos) -> Point {
        let edge = self.edge(at.edge);
        self.vertex(edge.start).pos.lerp(self.vertex(edge.end).pos, at.pos)
    }

    // ── Congestion ────────────────────────────────────────────────────────

    /// Set the congestion of `edge`.  Returns `true` if the level changed,
    /// in which case the shortest-path index is stale until
    /// [`refresh_index`](Self::refresh_index) is called.
    pub fn set_congestion(&mut self, edge: EdgeId, level: Congestion) -> bool {
        let e = &mut self.edges[edge.index()];
        if e.congestion == level {
            return false;
        }
        debug!("{edge}: congestion {} → {}", e.congestion.level(), level.level());
        e.congestion = level;
        self.index_stale = true;
        true
    }

    /// Rebuild the shortest-path index if any congestion changed since the
    /// last rebuild.  Returns `true` if a rebuild happened.
    pub fn refresh_index(&mut self) -> bool {
        if !self.index_stale {
            return false;
        }
        self.index.rebuild(self.vertices.len(), &self.edges);
        self.index_stale = false;
        debug!("shortest-path index rebuilt in {} passes", self.index.passes());
        true
    }

    /// `true` between a congestion change and the next `refresh_index`.
    pub fn index_is_stale(&self) -> bool {
        self.index_stale
    }

    /// The shortest-path index.  Must not be read while stale.
    pub fn index(&self) -> &ShortestPathIndex {
        debug_assert!(!self.index_stale, "shortest-path index read while stale");
        if self.index_stale {
            warn!("shortest-path index read while stale; routing may be sub-optimal");
        }
        &self.index
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The edge whose segment passes closest to `p`, and that distance.
    ///
    /// Returns `None` only if the network has no edges.
    pub fn nearest_edge(&self, p: Point) -> Option<(EdgeId, f64)> {
        let hit = self.spatial_idx.nearest_neighbor(&[p.x, p.y])?;
        let edge = self.edge(hit.data);
        let d = p.distance_to_segment(self.vertex(edge.start).pos, self.vertex(edge.end).pos);
        Some((hit.data, d))
    }
}

// ── NetworkDefinition ─────────────────────────────────────────────────────────

/// Static network description: vertices `{coordinate, label}` and edges as
/// `(start_index, end_index)` pairs.  Congestion is assigned later.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkDefinition {
    pub vertices: Vec<(Point, String)>,
    pub edges: Vec<(u32, u32)>,
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use cab_core::Point;
/// use cab_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_vertex(Point::new(0.0, 0.0), "A");
/// let c = b.add_vertex(Point::new(100.0, 0.0), "C");
/// b.add_edge(a, c);
/// let net = b.build().unwrap();
/// assert_eq!(net.vertex_count(), 2);
/// assert_eq!(net.edge_count(), 1);
/// ```
pub struct RoadNetworkBuilder {
    vertices:  Vec<(Point, String)>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    start:      VertexId,
    end:        VertexId,
    congestion: Congestion,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { vertices: Vec::new(), raw_edges: Vec::new() }
    }

    /// Start from a static definition.
    pub fn from_definition(def: &NetworkDefinition) -> Self {
        let mut b = Self::new();
        for (pos, label) in &def.vertices {
            b.add_vertex(*pos, label.clone());
        }
        for &(s, e) in &def.edges {
            b.add_edge(VertexId(s), VertexId(e));
        }
        b
    }

    /// Add a vertex and return its `VertexId` (sequential from 0).
    pub fn add_vertex(&mut self, pos: Point, label: impl Into<String>) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push((pos, label.into()));
        id
    }

    /// Add an edge `start → end` at [`Congestion::Low`].
    pub fn add_edge(&mut self, start: VertexId, end: VertexId) -> EdgeId {
        self.add_edge_with(start, end, Congestion::Low)
    }

    /// Add an edge with an explicit starting congestion.
    pub fn add_edge_with(&mut self, start: VertexId, end: VertexId, congestion: Congestion) -> EdgeId {
        let id = EdgeId(self.raw_edges.len() as u32);
        self.raw_edges.push(RawEdge { start, end, congestion });
        id
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Validate, derive edge geometry, link incident edges, build the
    /// spatial index and the first shortest-path index.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::Empty`]: no vertices.
    /// - [`NetworkError::InvalidVertex`]: an edge names a missing vertex.
    /// - [`NetworkError::DegenerateEdge`]: an edge has zero length.
    /// - [`NetworkError::Disconnected`]: some vertex pair has no path.
    pub fn build(self) -> NetworkResult<RoadNetwork> {
        if self.vertices.is_empty() {
            return Err(NetworkError::Empty);
        }

        let mut vertices: Vec<Vertex> = self
            .vertices
            .into_iter()
            .enumerate()
            .map(|(i, (pos, label))| Vertex {
                id: VertexId(i as u32),
                pos,
                label,
                edges: Vec::new(),
            })
            .collect();

        let mut edges = Vec::with_capacity(self.raw_edges.len());
        for (i, raw) in self.raw_edges.into_iter().enumerate() {
            let id = EdgeId(i as u32);
            for v in [raw.start, raw.end] {
                if v.index() >= vertices.len() {
                    return Err(NetworkError::InvalidVertex { edge: id, vertex: v });
                }
            }
            let a = vertices[raw.start.index()].pos;
            let b = vertices[raw.end.index()].pos;
            let length = a.distance(b);
            if raw.start == raw.end || length <= 0.0 {
                return Err(NetworkError::DegenerateEdge { edge: id, start: raw.start, end: raw.end });
            }

            vertices[raw.start.index()].edges.push(id);
            vertices[raw.end.index()].edges.push(id);
            edges.push(Edge {
                id,
                start: raw.start,
                end: raw.end,
                length,
                unit: Point::new((b.x - a.x) / length, (b.y - a.y) / length),
                congestion: raw.congestion,
            });
        }

        let mut index = ShortestPathIndex::empty();
        index.rebuild(vertices.len(), &edges);
        if let Some((from, to)) = index.first_unreachable() {
            return Err(NetworkError::Disconnected { from, to });
        }

        let segments: Vec<EdgeSegment> = edges
            .iter()
            .map(|e| {
                let a = vertices[e.start.index()].pos;
                let b = vertices[e.end.index()].pos;
                GeomWithData::new(Line::new([a.x, a.y], [b.x, b.y]), e.id)
            })
            .collect();
        let spatial_idx = RTree::bulk_load(segments);

        info!("road network built: {} vertices, {} edges", vertices.len(), edges.len());

        Ok(RoadNetwork {
            vertices,
            edges,
            index,
            index_stale: false,
            spatial_idx,
        })
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
