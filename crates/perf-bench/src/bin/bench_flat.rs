use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;

use apsp_core::traits::AllPairsSolver;
use apsp_core::{ComputationResult, FloydWarshallSolver, Graph};
use perf_bench::*;

fn main() -> ExitCode {
    let edges = generate_benchmark_edges();
    let graph = match Graph::from_edges(NUM_VERTICES, &edges) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build benchmark graph: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let solver = FloydWarshallSolver::new();

    let start_time = Instant::now();

    // Row-major single allocation, with predecessor tracking included.
    let result = solver.solve(&graph);

    let elapsed_time = start_time.elapsed();

    let paths = match result {
        Ok(ComputationResult::Solved(paths)) => paths,
        Ok(ComputationResult::NegativeCycle(cycle)) => {
            eprintln!("Unexpected negative cycle through vertex {}", cycle.vertex());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Solve failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let final_checksum = black_box(checksum(paths.distances().rows()));

    println!(
        "--- Flat Layout Results ({} vertices, {} edges) ---",
        NUM_VERTICES,
        edges.len()
    );
    println!("Checksum: {:.3}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
    ExitCode::SUCCESS
}
