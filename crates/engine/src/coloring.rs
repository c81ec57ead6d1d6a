//! # Welsh-Powell Vertex Coloring
//!
//! Greedy, degree-ordered vertex coloring.
//!
//! # Algorithm Overview
//!
//! 1. Order vertices by descending degree, ties broken by ascending vertex id.
//! 2. Visit vertices in that order. Each vertex takes the smallest class id not
//!    already held by a previously visited neighbor.
//!
//! The result is always a proper coloring, but the number of classes it uses is
//! only an upper bound on the chromatic number, not the chromatic number itself.
//!
//! # Complexity
//!
//! - Time: O(V log V + E log V)
//! - Space: O(V)

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::{Graph, Vertex};

/// Color class identifier, `0..class_count`.
pub type ColorClass = usize;

/// Vertex-to-class assignment produced by [`welsh_powell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Coloring {
    /// `classes[v]` is the class of vertex `v`
    classes: Vec<ColorClass>,
}

impl Coloring {
    /// Class of vertex `v`, if `v` exists.
    #[must_use]
    pub fn class_of(&self, v: Vertex) -> Option<ColorClass> {
        self.classes.get(v).copied()
    }

    /// Class ids indexed by vertex.
    #[must_use]
    pub fn classes(&self) -> &[ColorClass] {
        &self.classes
    }

    /// Number of colored vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.classes.len()
    }

    /// `max(class) + 1`, or `1` for an empty coloring.
    ///
    /// This is a heuristic upper bound on the chromatic number. Historically
    /// it was labelled the "chromatic index"; it is neither that nor the exact
    /// chromatic number.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes
            .iter()
            .max()
            .map_or(1, |&max| max.saturating_add(1))
    }

    /// Vertex-to-class pairs in ascending vertex order.
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<Vertex, ColorClass> {
        self.classes.iter().copied().enumerate().collect()
    }

    /// Whether no edge joins two vertices of the same class. Self-loops are ignored.
    #[must_use]
    pub fn is_proper(&self, graph: &Graph) -> bool {
        graph
            .edges()
            .into_iter()
            .filter(|(u, v)| u != v)
            .all(|(u, v)| self.class_of(u) != self.class_of(v))
    }
}

/// Visit order: descending degree, then ascending vertex id.
#[must_use]
pub fn processing_order(graph: &Graph) -> Vec<Vertex> {
    let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
    let degree_of = |v: Vertex| degrees.get(v).copied().unwrap_or(0);

    let mut order: Vec<Vertex> = graph.vertices().collect();
    order.sort_unstable_by(|&a, &b| by_degree_then_index(a, degree_of(a), b, degree_of(b)));
    order
}

fn by_degree_then_index(a: Vertex, degree_a: usize, b: Vertex, degree_b: usize) -> Ordering {
    degree_b.cmp(&degree_a).then_with(|| a.cmp(&b))
}

/// Color `graph` with the Welsh-Powell heuristic.
///
/// Deterministic: the same graph always yields the same coloring.
///
/// # Examples
///
/// ```
/// use chroma_engine::{Graph, welsh_powell};
///
/// let triangle = Graph::from_rows(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
/// let coloring = welsh_powell(&triangle);
/// assert_eq!(coloring.classes(), &[0, 1, 2]);
/// assert_eq!(coloring.class_count(), 3);
/// ```
#[must_use]
pub fn welsh_powell(graph: &Graph) -> Coloring {
    let mut assigned: Vec<Option<ColorClass>> = vec![None; graph.vertex_count()];

    for v in processing_order(graph) {
        let used: BTreeSet<ColorClass> = graph
            .neighbors(v)
            .into_iter()
            .filter_map(|w| assigned.get(w).copied().flatten())
            .collect();
        if let Some(slot) = assigned.get_mut(v) {
            *slot = Some(smallest_unused(&used));
        }
    }

    // Every vertex appears in the processing order exactly once.
    Coloring {
        classes: assigned.into_iter().map(|c| c.unwrap_or(0)).collect(),
    }
}

/// Smallest non-negative class absent from `used`.
fn smallest_unused(used: &BTreeSet<ColorClass>) -> ColorClass {
    used.iter()
        .zip(0..)
        .take_while(|&(&class, expected)| class == expected)
        .count()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_smallest_unused_finds_first_gap() {
        assert_eq!(smallest_unused(&BTreeSet::new()), 0);
        assert_eq!(smallest_unused(&BTreeSet::from([0, 1, 2])), 3);
        assert_eq!(smallest_unused(&BTreeSet::from([0, 2, 3])), 1);
        assert_eq!(smallest_unused(&BTreeSet::from([1, 2])), 0);
    }

    #[test]
    fn test_order_prefers_degree_then_index() {
        // Star centred on 2 plus an edge 0-1.
        let g = Graph::from_rows(&[
            vec![0, 1, 1, 0],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 1],
            vec![0, 0, 1, 0],
        ])
        .unwrap();
        assert_eq!(processing_order(&g), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_comparator_is_explicit_about_ties() {
        assert_eq!(by_degree_then_index(3, 2, 1, 2), Ordering::Greater);
        assert_eq!(by_degree_then_index(3, 4, 1, 2), Ordering::Less);
        assert_eq!(by_degree_then_index(1, 2, 1, 2), Ordering::Equal);
    }

    #[test]
    fn test_edgeless_graph_uses_one_class() {
        let g = Graph::from_rows(&[vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        let c = welsh_powell(&g);
        assert_eq!(c.classes(), &[0, 0, 0]);
        assert_eq!(c.class_count(), 1);
    }

    #[test]
    fn test_empty_coloring_counts_one_class() {
        let c = Coloring {
            classes: Vec::new(),
        };
        assert_eq!(c.class_count(), 1);
    }

    #[test]
    fn test_self_loop_does_not_block_own_color() {
        let g = Graph::from_rows(&[vec![1, 1], vec![1, 0]]).unwrap();
        let c = welsh_powell(&g);
        assert_eq!(c.classes(), &[0, 1]);
        assert!(c.is_proper(&g));
    }

    #[test]
    fn test_as_map_lists_every_vertex() {
        let g = Graph::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let map = welsh_powell(&g).as_map();
        assert_eq!(map, BTreeMap::from([(0, 0), (1, 1)]));
    }

    #[test]
    fn test_is_proper_detects_conflict() {
        let g = Graph::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let bad = Coloring {
            classes: vec![0, 0],
        };
        assert!(!bad.is_proper(&g));
    }
}
