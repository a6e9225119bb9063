use std::path::Path;
use tracing::{info, warn};

use super::error::Error;
use super::types::GraphSource;
use super::writer::ResultWriter;
use apsp_core::{ComputationResult, traits::AllPairsSolver};

/// Final state of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Solved { vertices: usize },
    NegativeCycle { vertex: usize },
}

/// Load -> solve -> write, generic over the solver like any other `AllPairsSolver` consumer.
pub struct Pipeline<S> {
    solver: S,
    writer: ResultWriter,
}

impl<S> Pipeline<S>
where
    S: AllPairsSolver,
{
    pub fn new(solver: S, writer: ResultWriter) -> Self {
        Pipeline { solver, writer }
    }

    /// Loads the graph from `source`, solves it and writes the report to `output`.
    ///
    /// A negative cycle is not an error here: it is written to the report and
    /// returned as `RunOutcome::NegativeCycle`.
    pub async fn run<G>(&self, source: &G, output: &Path) -> Result<RunOutcome, Error>
    where
        G: GraphSource,
    {
        let graph = source.load().await?;
        info!(
            source = %source.describe(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Graph loaded"
        );

        let result = self.solver.solve(&graph)?;
        let outcome = match &result {
            ComputationResult::Solved(paths) => {
                info!(vertices = paths.vertex_count(), "Shortest paths computed");
                RunOutcome::Solved {
                    vertices: paths.vertex_count(),
                }
            }
            ComputationResult::NegativeCycle(cycle) => {
                warn!(
                    vertex = cycle.vertex() + 1,
                    "Graph contains a negative cycle; distances are undefined"
                );
                RunOutcome::NegativeCycle {
                    vertex: cycle.vertex(),
                }
            }
        };

        self.writer.write_to(output, &result).await?;
        info!(output = %output.display(), "Results written");

        Ok(outcome)
    }
}
