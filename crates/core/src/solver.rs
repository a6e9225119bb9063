use std::time::{Duration, Instant};

use super::graph::Graph;
use super::result::{
    ComputationResult, DistanceMatrix, NegativeCycle, PredecessorMatrix, ShortestPaths,
};
use super::traits::AllPairsSolver;
use common::{error::Error, types::Vertex};
use tracing::{debug, warn};

/// Solver implementing the Floyd-Warshall recurrence with predecessor tracking
/// and negative cycle detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshallSolver {
    deadline: Option<Duration>,
}

impl FloydWarshallSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the wall-clock time of a single solve.
    ///
    /// The deadline is checked once per intermediate vertex, so a solve may
    /// overrun it by at most one `O(n^2)` round.
    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

impl AllPairsSolver for FloydWarshallSolver {
    /// Runs the `Θ(n³)` recurrence over owned copies of the weight matrix.
    ///
    /// For every intermediate vertex `k`, every pair `(i, j)` is relaxed through `k`
    /// when `T[i][k] + T[k][j]` is *strictly* shorter than `T[i][j]`. On improvement
    /// the predecessor of `j` is inherited from the `k -> j` path. Strict comparison
    /// keeps the first minimal path found in `k` order, which makes the predecessor
    /// matrix deterministic when several shortest paths exist.
    ///
    /// After the loop, any negative diagonal entry `T[i][i] < 0` proves a
    /// negative cycle through `i`; the matrices are then discarded.
    ///
    /// # Errors
    /// - `Error::DeadlineExceeded` if a configured deadline elapses.
    /// - `Error::WeightOverflow` if a path sum leaves the finite `f64` range and
    ///   no negative cycle has surfaced yet.
    fn solve(&self, graph: &Graph) -> Result<ComputationResult, Error> {
        let n = graph.vertex_count();
        let started = Instant::now();
        debug!(vertices = n, "Starting Floyd-Warshall solve");

        let mut distances = graph.weights().clone();
        let mut predecessors: PredecessorMatrix = graph
            .weights()
            .map(|_| None);
        for i in 0..n {
            for j in 0..n {
                if i != j && distances[(i, j)].is_finite() {
                    predecessors[(i, j)] = Some(i);
                }
            }
        }

        for k in 0..n {
            if let Some(limit) = self.deadline {
                if started.elapsed() >= limit {
                    warn!(completed = k, vertices = n, "Solve deadline exceeded");
                    return Err(Error::DeadlineExceeded { completed: k });
                }
            }

            for i in 0..n {
                // Nothing can be routed through `k` from a source that cannot reach it.
                if !distances[(i, k)].is_finite() {
                    continue;
                }

                for j in 0..n {
                    let via_ik = distances[(i, k)];
                    let via_kj = distances[(k, j)];
                    if !via_ik.is_finite() || !via_kj.is_finite() {
                        continue;
                    }

                    let candidate = via_ik + via_kj;
                    if !candidate.is_finite() {
                        // Runaway sums are expected while a negative cycle feeds on itself.
                        if let Some(cycle) = find_negative_cycle(&distances) {
                            warn!(vertex = cycle.vertex(), "Negative cycle detected");
                            return Ok(ComputationResult::NegativeCycle(cycle));
                        }
                        warn!(from = i, to = j, via = k, "Distance overflowed");
                        return Err(Error::WeightOverflow { from: i, to: j });
                    }
                    if candidate < distances[(i, j)] {
                        distances[(i, j)] = candidate;
                        predecessors[(i, j)] = predecessors[(k, j)];
                    }
                }
            }
        }

        if let Some(cycle) = find_negative_cycle(&distances) {
            warn!(
                vertex = cycle.vertex(),
                count = cycle.vertices().len(),
                "Negative cycle detected"
            );
            return Ok(ComputationResult::NegativeCycle(cycle));
        }

        debug!(
            vertices = n,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Floyd-Warshall solve complete"
        );
        Ok(ComputationResult::Solved(ShortestPaths::new(
            distances,
            predecessors,
        )))
    }
}

/// Vertices with a negative diagonal entry, i.e. on or reachable into a negative cycle.
fn find_negative_cycle(distances: &DistanceMatrix) -> Option<NegativeCycle> {
    let on_cycle: Vec<Vertex> = (0..distances.dim())
        .filter(|&i| distances[(i, i)] < 0.0)
        .collect();
    NegativeCycle::new(on_cycle)
}

/// Reconstructs the shortest path from `start` to `end` out of a predecessor matrix.
///
/// Walks `P[start][.]` backward from `end` until `start` is reached, then
/// reverses the collected vertices.
///
/// # Returns
/// - `Ok(Some(path))` → the vertex sequence `start, ..., end`.
/// - `Ok(None)` → `end` is unreachable from `start`.
/// - `Ok(Some(vec![start]))` when `start == end`.
///
/// # Errors
/// - `Error::VertexOutOfRange` if either vertex is outside the matrix.
/// - `Error::PredecessorChainCorrupt` if the chain is broken, names a vertex
///   outside the matrix, or does not reach `start` within `n` steps.
pub fn reconstruct_path(
    predecessors: &PredecessorMatrix,
    start: Vertex,
    end: Vertex,
) -> Result<Option<Vec<Vertex>>, Error> {
    let n = predecessors.dim();
    for vertex in [start, end] {
        if vertex >= n {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: n,
            });
        }
    }

    if start == end {
        return Ok(Some(vec![start]));
    }

    if predecessors[(start, end)].is_none() {
        return Ok(None);
    }

    let mut path = vec![end];
    let mut current = end;
    for _ in 0..n {
        if current == start {
            path.reverse();
            return Ok(Some(path));
        }

        current = predecessors
            .get(start, current)
            .copied()
            .flatten()
            .ok_or(Error::PredecessorChainCorrupt { start, end })?;
        path.push(current);
    }

    Err(Error::PredecessorChainCorrupt { start, end })
}
