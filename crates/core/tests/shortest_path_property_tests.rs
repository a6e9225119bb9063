use apsp_core::traits::AllPairsSolver;
use apsp_core::{ComputationResult, FloydWarshallSolver, Graph, ShortestPaths};
use common::types::Edge;
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..9;

/// Random directed graphs with non-negative integral weights (no negative cycles).
/// Integral weights keep every path sum exact in `f64`.
fn non_negative_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|n| {
        let edge_generator = (0usize..n, 0usize..n, 0u32..20).prop_map(|(u, v, w)| (u, v, w as f64));
        let edges_generator = prop::collection::vec(edge_generator, 0..40);

        (proptest::strategy::Just(n), edges_generator)
    })
}

/// Random DAGs (edges only go from lower to higher index) with weights that may be negative.
fn dag_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (2usize..9).prop_flat_map(|n| {
        let edge_generator = (0usize..n - 1, 0usize..n, -15i32..15)
            .prop_map(move |(u, r, w)| (u, u + 1 + r % (n - 1 - u), w as f64));
        let edges_generator = prop::collection::vec(edge_generator, 0..30);

        (proptest::strategy::Just(n), edges_generator)
    })
}

/// Arbitrary directed graphs with signed weights; may or may not contain a negative cycle.
fn signed_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|n| {
        let edge_generator =
            (0usize..n, 0usize..n, -5i32..15).prop_map(|(u, v, w)| (u, v, w as f64));
        let edges_generator = prop::collection::vec(edge_generator, 0..25);

        (proptest::strategy::Just(n), edges_generator)
    })
}

fn solve(n: usize, edges: &[Edge]) -> (Graph, ComputationResult) {
    let graph = Graph::from_edges(n, edges).expect("generated edges are in range");
    let result = FloydWarshallSolver::new()
        .solve(&graph)
        .expect("solver without deadline cannot fail");
    (graph, result)
}

fn path_weight(graph: &Graph, path: &[usize]) -> Option<f64> {
    path.windows(2)
        .map(|hop| graph.edge_weight(hop[0], hop[1]))
        .sum()
}

/// Reference check: Bellman-Ford from a virtual source connected to every vertex.
fn has_negative_cycle_reference(n: usize, graph: &Graph) -> bool {
    let mut distance = vec![0.0f64; n];
    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            for v in 0..n {
                if let Some(w) = graph.edge_weight(u, v) {
                    if distance[u] + w < distance[v] {
                        distance[v] = distance[u] + w;
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            return false;
        }
    }
    true
}

fn assert_triangle_inequality(paths: &ShortestPaths) -> Result<(), TestCaseError> {
    let n = paths.vertex_count();
    let t = paths.distances();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                prop_assert!(
                    t[(i, j)] <= t[(i, k)] + t[(k, j)],
                    "T[{}][{}] exceeds the route through {}", i, j, k
                );
            }
        }
    }
    Ok(())
}

fn assert_round_trip(graph: &Graph, paths: &ShortestPaths) -> Result<(), TestCaseError> {
    let n = paths.vertex_count();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let distance = paths.distance(i, j).unwrap();
            let path = paths.path(i, j).unwrap();

            match (distance, path) {
                (Some(d), Some(path)) => {
                    prop_assert_eq!(path[0], i);
                    prop_assert_eq!(*path.last().unwrap(), j);
                    prop_assert!(path.len() <= n);
                    prop_assert_eq!(path_weight(graph, &path), Some(d));
                }
                (None, None) => {}
                (d, p) => prop_assert!(false, "distance {:?} disagrees with path {:?}", d, p),
            }
        }
    }
    Ok(())
}

proptest! {
    /// Property: without negative cycles every vertex is at distance zero from itself.
    #[test]
    fn diagonal_is_zero((n, edges) in non_negative_graph_strategy()) {
        let (_, result) = solve(n, &edges);
        let paths = result.into_result().unwrap();

        for i in 0..n {
            prop_assert_eq!(paths.distances()[(i, i)], 0.0);
        }
    }

    /// Property: T[i][j] <= T[i][k] + T[k][j] for every triple.
    #[test]
    fn triangle_inequality_holds((n, edges) in non_negative_graph_strategy()) {
        let (_, result) = solve(n, &edges);
        assert_triangle_inequality(&result.into_result().unwrap())?;
    }

    /// Property: the triangle inequality survives negative weights.
    #[test]
    fn triangle_inequality_holds_on_negative_dag((n, edges) in dag_strategy()) {
        let (_, result) = solve(n, &edges);
        assert_triangle_inequality(&result.into_result().unwrap())?;
    }

    /// Property: edges inserted in both directions produce a symmetric distance matrix.
    #[test]
    fn undirected_insertion_is_symmetric((n, edges) in non_negative_graph_strategy()) {
        let mut graph = Graph::new(n).unwrap();
        for &(u, v, w) in &edges {
            graph.add_undirected_edge(u, v, w).unwrap();
        }
        let paths = FloydWarshallSolver::new().solve(&graph).unwrap().into_result().unwrap();
        let t = paths.distances();

        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(t[(i, j)], t[(j, i)]);
            }
        }
    }

    /// Property: reconstructed paths exist exactly for finite distances and sum to them.
    #[test]
    fn path_round_trip_non_negative((n, edges) in non_negative_graph_strategy()) {
        let (graph, result) = solve(n, &edges);
        assert_round_trip(&graph, &result.into_result().unwrap())?;
    }

    /// Property: negative weights are handled when no cycle exists at all.
    #[test]
    fn path_round_trip_negative_dag((n, edges) in dag_strategy()) {
        let (graph, result) = solve(n, &edges);
        prop_assert!(result.is_solved());
        assert_round_trip(&graph, &result.into_result().unwrap())?;
    }

    /// Property: negative cycle detection agrees with a Bellman-Ford reference.
    #[test]
    fn negative_cycle_detection_matches_reference((n, edges) in signed_graph_strategy()) {
        let (graph, result) = solve(n, &edges);
        let expected = has_negative_cycle_reference(n, &graph);

        match result {
            ComputationResult::Solved(paths) => {
                prop_assert!(!expected);
                assert_triangle_inequality(&paths)?;
                assert_round_trip(&graph, &paths)?;
            }
            ComputationResult::NegativeCycle(cycle) => {
                prop_assert!(expected);
                prop_assert!(!cycle.vertices().is_empty());
                prop_assert!(cycle.vertices().windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    /// Property: solving the same graph twice yields identical matrices.
    #[test]
    fn solve_is_deterministic((n, edges) in non_negative_graph_strategy()) {
        let (_, first) = solve(n, &edges);
        let (_, second) = solve(n, &edges);
        prop_assert_eq!(first, second);
    }
}
