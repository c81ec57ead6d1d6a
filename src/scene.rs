//! Drawable scene data: vertex labels, circular layout, node fills.
//!
//! Scenes are the hand-off to whatever draws the picture; nothing here
//! rasterises or encodes images.

use std::f64::consts::TAU;

use chroma_engine::{Color, Graph, Vertex};
use serde::Serialize;

/// Node fill used when a graph is drawn before coloring.
pub const UNCOLORED_FILL: &str = "skyblue";

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A positioned, filled node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub fill: String,
}

/// Everything needed to draw one graph image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<(String, String)>,
}

impl Scene {
    /// Every node filled [`UNCOLORED_FILL`].
    #[must_use]
    pub fn uncolored(graph: &Graph) -> Self {
        Self::build(graph, |_| UNCOLORED_FILL.to_string())
    }

    /// Node `v` filled `vertex_colors[v]`.
    #[must_use]
    pub fn colored(graph: &Graph, vertex_colors: &[Color]) -> Self {
        Self::build(graph, |v| {
            vertex_colors
                .get(v)
                .map_or(UNCOLORED_FILL, |c| c.name())
                .to_string()
        })
    }

    fn build(graph: &Graph, fill: impl Fn(Vertex) -> String) -> Self {
        let positions = circular_layout(graph.vertex_count());
        let nodes = graph
            .vertices()
            .zip(positions)
            .map(|(v, (x, y))| SceneNode {
                label: vertex_label(v),
                x,
                y,
                fill: fill(v),
            })
            .collect();
        let edges = graph
            .edges()
            .into_iter()
            .map(|(u, v)| (vertex_label(u), vertex_label(v)))
            .collect();
        Self { nodes, edges }
    }
}

/// `A`..`Z`, then `AA`, `AB`, ... (bijective base 26).
#[must_use]
pub fn vertex_label(v: Vertex) -> String {
    let mut letters = Vec::new();
    let mut n = v.saturating_add(1);
    while n > 0 {
        n = n.saturating_sub(1);
        if let Some(&letter) = ALPHABET.get(n % 26) {
            letters.push(char::from(letter));
        }
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Unit-circle positions, vertex `i` at angle `2πi/n`. A lone vertex sits at the origin.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular_layout(n: usize) -> Vec<(f64, f64)> {
    if n == 1 {
        return vec![(0.0, 0.0)];
    }
    let step = TAU / n as f64;
    (0..n)
        .map(|i| {
            let theta = step * i as f64;
            (theta.cos(), theta.sin())
        })
        .collect()
}
