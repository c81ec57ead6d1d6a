//! # Graph Model
//!
//! Undirected graph built from an [`AdjacencyMatrix`] using petgraph's `UnGraphMap`.
//!
//! An edge `(i, j)` exists when `matrix[i][j] == 1` **or** `matrix[j][i] == 1`.
//! One-directional entries are tolerated rather than rejected, and a mirrored
//! pair collapses into a single edge.

use std::collections::BTreeSet;

use chroma_core::Result;
use petgraph::graphmap::UnGraphMap;

use crate::matrix::AdjacencyMatrix;

/// Vertex identifier, `0..n-1`.
pub type Vertex = usize;

/// Immutable undirected graph over vertices `0..n-1`.
#[derive(Debug, Clone)]
pub struct Graph {
    /// The underlying undirected graph
    inner: UnGraphMap<Vertex, ()>,
    vertex_count: usize,
}

impl Graph {
    /// Build the graph from a validated matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_engine::{AdjacencyMatrix, Graph};
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
    /// let graph = Graph::from_matrix(&matrix);
    /// assert_eq!(graph.degree(1), 1);
    /// ```
    #[must_use]
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let vertex_count = matrix.size();
        let mut inner = UnGraphMap::with_capacity(vertex_count, 0);
        for v in 0..vertex_count {
            inner.add_node(v);
        }
        for (row, col) in matrix.set_entries() {
            inner.add_edge(row, col, ());
        }
        Self {
            inner,
            vertex_count,
        }
    }

    /// Validate integer rows and build the graph in one step.
    ///
    /// # Errors
    ///
    /// Returns [`chroma_core::Error::InvalidInput`] for any matrix the
    /// [`AdjacencyMatrix::from_rows`] validation rejects.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        AdjacencyMatrix::from_rows(rows).map(|m| Self::from_matrix(&m))
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct undirected edges, self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.vertex_count
    }

    /// Count of distinct neighbors of `v`. A self-loop counts once.
    #[must_use]
    pub fn degree(&self, v: Vertex) -> usize {
        self.inner.neighbors(v).count()
    }

    /// Distinct neighbors of `v`, ascending. Unknown vertices have none.
    #[must_use]
    pub fn neighbors(&self, v: Vertex) -> BTreeSet<Vertex> {
        self.inner.neighbors(v).collect()
    }

    /// Whether `u` and `v` are joined by an edge.
    #[must_use]
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.inner.contains_edge(u, v)
    }

    /// Every edge once as `(min, max)`, sorted ascending.
    #[must_use]
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        let mut edges: Vec<_> = self
            .inner
            .all_edges()
            .map(|(a, b, _)| (a.min(b), a.max(b)))
            .collect();
        edges.sort_unstable();
        edges
    }
}
