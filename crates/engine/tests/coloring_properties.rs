//! Property tests for the coloring engine.
//!
//! Random matrices (symmetric or not, self-loops allowed) must always yield:
//! - a proper coloring
//! - identical colorings and enumeration orders on repeat runs
//! - a class count no smaller than the true chromatic number

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]

use chroma_engine::{Graph, arrangements, class_permutations, welsh_powell};
use proptest::prelude::*;

fn matrix_strategy(max_n: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0i64..=1, n), n)
    })
}

/// Exact chromatic number by exhaustive search; self-loops are ignored.
fn brute_force_chromatic(graph: &Graph) -> usize {
    let n = graph.vertex_count();
    let edges: Vec<_> = graph.edges().into_iter().filter(|(u, v)| u != v).collect();
    (1..=n)
        .find(|&k| {
            let mut colors = vec![0usize; n];
            loop {
                if edges.iter().all(|&(u, v)| colors[u] != colors[v]) {
                    return true;
                }
                // Odometer increment over k^n assignments.
                let mut pos = 0;
                loop {
                    if pos == n {
                        return false;
                    }
                    colors[pos] += 1;
                    if colors[pos] < k {
                        break;
                    }
                    colors[pos] = 0;
                    pos += 1;
                }
            }
        })
        .unwrap_or(1)
}

proptest! {
    /// Property: no edge joins two vertices of the same class
    #[test]
    fn prop_coloring_is_proper(rows in matrix_strategy(12)) {
        let graph = Graph::from_rows(&rows).unwrap();
        let coloring = welsh_powell(&graph);
        prop_assert!(coloring.is_proper(&graph));
        prop_assert_eq!(coloring.vertex_count(), rows.len());
    }

    /// Property: same matrix, same coloring, same enumeration order
    #[test]
    fn prop_coloring_and_enumeration_are_deterministic(rows in matrix_strategy(8)) {
        let first = welsh_powell(&Graph::from_rows(&rows).unwrap());
        let second = welsh_powell(&Graph::from_rows(&rows).unwrap());
        prop_assert_eq!(&first, &second);

        let a: Vec<_> = class_permutations(&first).unwrap().take(20).collect();
        let b: Vec<_> = class_permutations(&second).unwrap().take(20).collect();
        prop_assert_eq!(a, b);

        let c = first.class_count();
        let x: Vec<_> = arrangements(&first, c + 1).unwrap().collect();
        let y: Vec<_> = arrangements(&second, c + 1).unwrap().collect();
        prop_assert_eq!(x, y);
    }

    /// Property: the greedy class count is an upper bound, never below optimal
    #[test]
    fn prop_class_count_bounds_chromatic_number(rows in matrix_strategy(6)) {
        let graph = Graph::from_rows(&rows).unwrap();
        let coloring = welsh_powell(&graph);
        let max_degree = graph.vertices().map(|v| graph.degree(v)).max().unwrap_or(0);

        prop_assert!(coloring.class_count() >= brute_force_chromatic(&graph));
        prop_assert!(coloring.class_count() <= max_degree + 1);
    }

    /// Property: the transpose describes the same undirected graph
    #[test]
    fn prop_transpose_yields_same_coloring(rows in matrix_strategy(10)) {
        let n = rows.len();
        let transposed: Vec<Vec<i64>> =
            (0..n).map(|i| (0..n).map(|j| rows[j][i]).collect()).collect();
        let a = welsh_powell(&Graph::from_rows(&rows).unwrap());
        let b = welsh_powell(&Graph::from_rows(&transposed).unwrap());
        prop_assert_eq!(a, b);
    }
}
