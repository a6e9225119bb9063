use common::error::Error;
use common::types::{Edge, Vertex, Weight};

use crate::matrix::SquareMatrix;

/// Weighted directed graph stored as a dense adjacency matrix.
///
/// - `weights[(u, v)]` -> weight of the edge `u -> v`, or `f64::INFINITY` when absent
/// - `weights[(u, u)]` -> `0.0`, unless a negative self-loop was inserted
///
/// The graph is built once through `add_edge` and then only borrowed by the
/// solver, so a completed graph can be solved repeatedly or reused afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    weights: SquareMatrix<Weight>,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Errors
    /// Returns `Error::InvalidSize` if `n < 1`, or if the `n x n` weight and
    /// predecessor matrices cannot be addressed.
    pub fn new(n: usize) -> Result<Self, Error> {
        if n < 1
            || SquareMatrix::<Weight>::checked_len(n).is_none()
            || SquareMatrix::<Option<Vertex>>::checked_len(n).is_none()
        {
            return Err(Error::InvalidSize(n));
        }

        let weights = SquareMatrix::from_fn(n, |i, j| if i == j { 0.0 } else { f64::INFINITY });
        Ok(Self { weights })
    }

    /// Creates a graph with `n` vertices and inserts every `(u, v, w)` triple in order.
    ///
    /// Duplicate `(u, v)` pairs follow `add_edge` semantics: the last one wins.
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self, Error> {
        let mut graph = Self::new(n)?;
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Sets the weight of the directed edge `u -> v`, replacing any earlier value.
    ///
    /// Self-loops never raise the diagonal above zero: a non-negative self-loop
    /// is absorbed by the zero-length path, while a negative one is kept so the
    /// solver reports it as a negative cycle.
    ///
    /// # Errors
    /// - `Error::VertexOutOfRange` if `u` or `v` is not in `[0, n)`.
    /// - `Error::InvalidWeight` if `w` is NaN or infinite.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, w: Weight) -> Result<(), Error> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !w.is_finite() {
            return Err(Error::InvalidWeight(w));
        }

        if u == v {
            self.weights[(u, u)] = w.min(0.0);
        } else {
            self.weights[(u, v)] = w;
        }
        Ok(())
    }

    /// Inserts `u -> v` and `v -> u` with the same weight.
    pub fn add_undirected_edge(&mut self, u: Vertex, v: Vertex, w: Weight) -> Result<(), Error> {
        self.add_edge(u, v, w)?;
        self.add_edge(v, u, w)
    }

    /// Read-only view of the weight matrix consumed by the solver.
    pub fn weights(&self) -> &SquareMatrix<Weight> {
        &self.weights
    }

    pub fn vertex_count(&self) -> usize {
        self.weights.dim()
    }

    /// Weight of `u -> v`, or `None` when there is no such edge.
    ///
    /// The diagonal always reports `Some`, since every vertex reaches itself.
    pub fn edge_weight(&self, u: Vertex, v: Vertex) -> Option<Weight> {
        self.weights.get(u, v).copied().filter(|w| w.is_finite())
    }

    /// Number of stored off-diagonal edges.
    pub fn edge_count(&self) -> usize {
        let n = self.vertex_count();
        (0..n)
            .flat_map(|u| (0..n).map(move |v| (u, v)))
            .filter(|&(u, v)| u != v && self.weights[(u, v)].is_finite())
            .count()
    }

    pub(crate) fn check_vertex(&self, vertex: Vertex) -> Result<(), Error> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
