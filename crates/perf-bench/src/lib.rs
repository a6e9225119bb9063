// ----------------------------
// Benchmark Layouts
// ----------------------------

use common::types::Edge;

/// Nested layout: one heap allocation per row.
pub type NestedMatrix = Vec<Vec<f64>>;

pub const NUM_VERTICES: usize = 400;

/// Every `STRIDE`-th ordered pair gets an edge, giving a fairly dense graph.
pub const STRIDE: usize = 3;

/// Generates a deterministic dense edge list with positive weights.
///
/// Weights vary with the indices so the compiler cannot fold the recurrence,
/// and stay positive so neither layout hits a negative cycle.
pub fn generate_benchmark_edges() -> Vec<Edge> {
    (0..NUM_VERTICES)
        .flat_map(|u| (0..NUM_VERTICES).map(move |v| (u, v)))
        .filter(|&(u, v)| u != v && (u * NUM_VERTICES + v) % STRIDE == 0)
        .map(|(u, v)| (u, v, 1.0 + ((u * 31 + v * 17) % 97) as f64))
        .collect()
}

pub fn nested_from_edges(edges: &[Edge]) -> NestedMatrix {
    let mut m = vec![vec![f64::INFINITY; NUM_VERTICES]; NUM_VERTICES];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for &(u, v, w) in edges {
        m[u][v] = w;
    }
    m
}

/// Distance-only recurrence over the nested layout.
pub fn floyd_warshall_nested(m: &mut NestedMatrix) {
    let n = m.len();
    for k in 0..n {
        for i in 0..n {
            let ik = m[i][k];
            if !ik.is_finite() {
                continue;
            }
            for j in 0..n {
                let kj = m[k][j];
                if kj.is_finite() && ik + kj < m[i][j] {
                    m[i][j] = ik + kj;
                }
            }
        }
    }
}

/// Sum of all finite distances, used as a cross-layout checksum.
pub fn checksum<'a>(rows: impl Iterator<Item = &'a [f64]>) -> f64 {
    rows.flat_map(|row| row.iter())
        .filter(|w| w.is_finite())
        .sum()
}
