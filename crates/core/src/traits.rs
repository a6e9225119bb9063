use super::graph::Graph;
use super::result::ComputationResult;
use common::error::Error;

/// Trait for all-pairs shortest path solvers.
pub trait AllPairsSolver {
    /// Computes shortest distances and predecessors between every pair of vertices.
    ///
    /// Returns `Ok(ComputationResult::Solved(_))` when the graph has no negative cycle,
    /// `Ok(ComputationResult::NegativeCycle(_))` when one was detected,
    /// or `Err(e)` when the solve could not complete.
    fn solve(&self, graph: &Graph) -> Result<ComputationResult, Error>;
}
