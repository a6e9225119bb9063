pub mod graph;
pub mod matrix;
pub mod result;
pub mod solver;
pub mod traits;

pub use graph::Graph;
pub use matrix::SquareMatrix;
pub use result::{ComputationResult, NegativeCycle, ShortestPaths};
pub use solver::{FloydWarshallSolver, reconstruct_path};
