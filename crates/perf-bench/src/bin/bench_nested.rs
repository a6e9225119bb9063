use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let edges = generate_benchmark_edges();
    let mut nested: NestedMatrix = nested_from_edges(&edges);

    let start_time = Instant::now();

    // Each `m[i][j]` access first loads the row pointer, then the cell.
    floyd_warshall_nested(&mut nested);

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum(nested.iter().map(|row| row.as_slice())));

    println!(
        "--- Nested Layout Results ({} vertices, {} edges) ---",
        NUM_VERTICES,
        edges.len()
    );
    println!("Checksum: {:.3}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
