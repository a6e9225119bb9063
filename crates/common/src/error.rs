use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A graph was requested with no vertices, or with more than an `n x n` matrix can address.
    #[error("Graph size {0} is invalid: expected at least one vertex and a matrix that fits in memory.")]
    InvalidSize(usize),

    /// Indicates an attempt to access a vertex index that exceeds the graph size (n).
    #[error("Vertex index {vertex} is out of bounds for a graph of {vertex_count} vertices.")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Edge weights must be comparable and distinguishable from "no edge".
    #[error("Edge weight {0} is invalid: weights must be finite numbers.")]
    InvalidWeight(f64),

    /// Relaxing `from -> to` summed two finite distances into a non-finite one.
    #[error("Distance from {from} to {to} overflowed the range of finite weights.")]
    WeightOverflow { from: usize, to: usize },

    /// The recurrence left a negative value on the diagonal at `vertex`.
    #[error("Negative-weight cycle detected through vertex {vertex}.")]
    NegativeCycleDetected { vertex: usize },

    /// Walking the predecessor chain did not reach the start vertex within n steps.
    #[error("Path reconstruction from {start} to {end} failed due to a broken predecessor chain.")]
    PredecessorChainCorrupt { start: usize, end: usize },

    /// The configured solve deadline elapsed after `completed` intermediate rounds.
    #[error("Solver deadline exceeded after {completed} intermediate rounds.")]
    DeadlineExceeded { completed: usize },
}
