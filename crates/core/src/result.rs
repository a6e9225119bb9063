use common::error::Error;
use common::types::{Vertex, Weight};

use crate::matrix::SquareMatrix;
use crate::solver::reconstruct_path;

/// Distance matrix `T`: `T[(i, j)]` is the shortest known length from `i` to `j`.
pub type DistanceMatrix = SquareMatrix<Weight>;

/// Predecessor matrix `P`: `P[(i, j)]` is the vertex preceding `j` on the best
/// path from `i`, or `None` when no path is known.
pub type PredecessorMatrix = SquareMatrix<Option<Vertex>>;

/// All-pairs shortest paths of a graph without negative cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    distances: DistanceMatrix,
    predecessors: PredecessorMatrix,
}

impl ShortestPaths {
    pub(crate) fn new(distances: DistanceMatrix, predecessors: PredecessorMatrix) -> Self {
        Self {
            distances,
            predecessors,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.dim()
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorMatrix {
        &self.predecessors
    }

    /// Shortest distance from `from` to `to`, or `None` when `to` is unreachable.
    ///
    /// # Errors
    /// Returns `Error::VertexOutOfRange` for indices outside the graph.
    pub fn distance(&self, from: Vertex, to: Vertex) -> Result<Option<Weight>, Error> {
        let n = self.vertex_count();
        let d = self
            .distances
            .get(from, to)
            .copied()
            .ok_or(Error::VertexOutOfRange {
                vertex: from.max(to),
                vertex_count: n,
            })?;
        Ok(d.is_finite().then_some(d))
    }

    /// Shortest path from `start` to `end` as a vertex sequence, `None` if unreachable.
    pub fn path(&self, start: Vertex, end: Vertex) -> Result<Option<Vec<Vertex>>, Error> {
        reconstruct_path(&self.predecessors, start, end)
    }

    pub fn into_parts(self) -> (DistanceMatrix, PredecessorMatrix) {
        (self.distances, self.predecessors)
    }
}

/// Report of a negative-weight cycle found by the solver.
///
/// No matrices are attached: once a negative cycle exists the distances of the
/// affected pairs are unbounded, and the predecessor chains may loop.
#[derive(Debug, Clone, PartialEq)]
pub struct NegativeCycle {
    /// Never empty, sorted ascending.
    vertices: Vec<Vertex>,
}

impl NegativeCycle {
    /// Builds a report from the vertices found on negative cycles.
    ///
    /// Returns `None` when `vertices` is empty. Duplicates are removed.
    pub fn new(mut vertices: Vec<Vertex>) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }
        vertices.sort_unstable();
        vertices.dedup();
        Some(Self { vertices })
    }

    /// Every vertex whose distance to itself ended negative, in ascending order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The lowest-indexed vertex known to lie on a negative cycle.
    pub fn vertex(&self) -> Vertex {
        self.vertices[0]
    }
}

/// Outcome of one solve.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationResult {
    Solved(ShortestPaths),
    NegativeCycle(NegativeCycle),
}

impl ComputationResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, ComputationResult::Solved(_))
    }

    pub fn as_solved(&self) -> Option<&ShortestPaths> {
        match self {
            ComputationResult::Solved(paths) => Some(paths),
            ComputationResult::NegativeCycle(_) => None,
        }
    }

    /// Converts the outcome into a `Result`, turning a negative cycle into
    /// `Error::NegativeCycleDetected`.
    pub fn into_result(self) -> Result<ShortestPaths, Error> {
        match self {
            ComputationResult::Solved(paths) => Ok(paths),
            ComputationResult::NegativeCycle(cycle) => Err(Error::NegativeCycleDetected {
                vertex: cycle.vertex(),
            }),
        }
    }
}
