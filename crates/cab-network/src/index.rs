//! All-pairs shortest-path index.
//!
//! Two dense `n × n` matrices, row-major, indexed by `VertexId`:
//!
//! - `dist[i][j]`: least total edge cost from `i` to `j`.
//! - `next[i][j]`: first edge to take leaving `i` towards `j`; `None` when
//!   `i == j` (already there) or `j` is unreachable.
//!
//! # Algorithm
//!
//! Repeated relaxation over the edge list (Bellman-Ford shape, every
//! destination at once).  Each pass visits edges in id order and relaxes
//! both directions of each edge at equal cost.  An entry only changes on a
//! strict improvement, so on ties the earliest-improving edge wins and the
//! result is reproducible.  All costs are positive, so at most `n − 1`
//! passes are needed; the loop stops early once a pass changes nothing.
//!
//! The network is small and fixed (tens of vertices), so O(n·E·passes)
//! per rebuild is negligible next to one simulation step.

use cab_core::{EdgeId, VertexId};

use crate::network::Edge;

#[derive(Clone, Debug, Default)]
pub struct ShortestPathIndex {
    n:      usize,
    dist:   Vec<f64>,
    next:   Vec<Option<EdgeId>>,
    passes: usize,
}

impl ShortestPathIndex {
    /// An index over zero vertices.  Call [`rebuild`](Self::rebuild) before
    /// use.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Recompute both matrices from scratch for `vertex_count` vertices and
    /// `edges` at their current congestion.  Previous matrices are dropped.
    pub fn rebuild(&mut self, vertex_count: usize, edges: &[Edge]) {
        let n = vertex_count;
        let mut dist = vec![f64::INFINITY; n * n];
        let mut next: Vec<Option<EdgeId>> = vec![None; n * n];
        for i in 0..n {
            dist[i * n + i] = 0.0;
        }

        let max_passes = n.saturating_sub(1);
        let mut passes = 0;
        while passes < max_passes {
            passes += 1;
            let mut improved = false;

            for edge in edges {
                let cost = edge.cost();
                let s = edge.start.index();
                let e = edge.end.index();

                for dest in 0..n {
                    // start → end → … → dest
                    let via_end = cost + dist[e * n + dest];
                    if via_end < dist[s * n + dest] {
                        dist[s * n + dest] = via_end;
                        next[s * n + dest] = Some(edge.id);
                        improved = true;
                    }

                    // end → start → … → dest
                    let via_start = cost + dist[s * n + dest];
                    if via_start < dist[e * n + dest] {
                        dist[e * n + dest] = via_start;
                        next[e * n + dest] = Some(edge.id);
                        improved = true;
                    }
                }
            }

            if !improved {
                break;
            }
        }

        *self = Self { n, dist, next, passes };
    }

    /// Number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Relaxation passes the last rebuild took (including the final
    /// no-change pass when it exited early).
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Least total cost from `from` to `to`; `f64::INFINITY` if unreachable.
    #[inline]
    pub fn dist(&self, from: VertexId, to: VertexId) -> f64 {
        self.dist[from.index() * self.n + to.index()]
    }

    /// First edge of a cheapest path from `from` to `to`.
    ///
    /// `None` means "already there" when `from == to`.
    #[inline]
    pub fn next_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.next[from.index() * self.n + to.index()]
    }

    /// Some vertex pair with no path between them, if any.
    pub fn first_unreachable(&self) -> Option<(VertexId, VertexId)> {
        self.dist
            .iter()
            .position(|d| d.is_infinite())
            .map(|flat| (VertexId((flat / self.n) as u32), VertexId((flat % self.n) as u32)))
    }
}
