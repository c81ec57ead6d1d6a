//! View assembly for the three Chroma operations.
//!
//! - [`draw`]: the uncolored graph
//! - [`find`]: the Welsh-Powell coloring and every class-to-color permutation, paginated
//! - [`manual`]: capped arrangements for a requested color count, paginated
//!
//! Each view is plain data. [`crate::report`] turns it into text; `serde_json`
//! turns it into JSON.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::num::NonZeroUsize;

use chroma_core::{Result, ResultExt};
use chroma_engine::{
    AdjacencyMatrix, Coloring, Graph, Page, PaletteAssignment, Paginator, arrangements,
    class_permutations, welsh_powell,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::scene::Scene;

/// The uncolored graph.
#[derive(Debug, Clone, Serialize)]
pub struct DrawView {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub scene: Scene,
}

/// One assignment resolved into a drawable scene.
#[derive(Debug, Clone, Serialize)]
pub struct Rendering {
    pub assignment: PaletteAssignment,
    pub scene: Scene,
}

/// Coloring plus a page of Mode A renderings.
#[derive(Debug, Clone, Serialize)]
pub struct FindView {
    pub vertex_count: usize,
    pub coloring: Coloring,
    /// Greedy upper bound on the chromatic number.
    pub class_count: usize,
    pub total_assignments: usize,
    pub renderings: Page<Rendering>,
}

/// Coloring plus a page of Mode B renderings.
#[derive(Debug, Clone, Serialize)]
pub struct ManualView {
    pub vertex_count: usize,
    pub requested_colors: usize,
    pub coloring: Coloring,
    pub class_count: usize,
    pub total_arrangements: usize,
    pub renderings: Page<Rendering>,
}

/// Lay out the graph with no coloring applied.
#[must_use]
pub fn draw(matrix: &AdjacencyMatrix) -> DrawView {
    let graph = Graph::from_matrix(matrix);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Drawing graph"
    );
    DrawView {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        scene: Scene::uncolored(&graph),
    }
}

/// Color the graph and render one page of class permutations.
///
/// # Errors
///
/// Returns [`chroma_core::Error::PaletteOverflow`] when the coloring needs more
/// classes than the palette holds.
pub fn find(matrix: &AdjacencyMatrix, paginator: Paginator, page: NonZeroUsize) -> Result<FindView> {
    let graph = Graph::from_matrix(matrix);
    let coloring = welsh_powell(&graph);
    let class_count = coloring.class_count();
    info!(
        vertices = graph.vertex_count(),
        class_count,
        page = page.get(),
        "Coloring graph"
    );

    let permutations = class_permutations(&coloring).log_failure("class permutation")?;
    let total_assignments = permutations.total();
    debug!(total_assignments, "Enumerating class permutations");

    let renderings = paginator
        .paginate_iter(permutations, total_assignments, page)
        .try_map(|assignment| render(&graph, &coloring, assignment))
        .log_failure("rendering")?;

    Ok(FindView {
        vertex_count: graph.vertex_count(),
        coloring,
        class_count,
        total_assignments,
        renderings,
    })
}

/// Color the graph and render one page of arrangements of `requested_colors` colors.
///
/// # Errors
///
/// Returns [`chroma_core::Error::Mapping`] when `requested_colors` cannot cover
/// the coloring's classes.
pub fn manual(
    matrix: &AdjacencyMatrix,
    requested_colors: usize,
    paginator: Paginator,
    page: NonZeroUsize,
) -> Result<ManualView> {
    let graph = Graph::from_matrix(matrix);
    let coloring = welsh_powell(&graph);
    let class_count = coloring.class_count();
    info!(
        vertices = graph.vertex_count(),
        class_count,
        requested_colors,
        page = page.get(),
        "Arranging colors"
    );

    let all: Vec<PaletteAssignment> = arrangements(&coloring, requested_colors)
        .log_failure("arrangement")?
        .collect();
    debug!(total_arrangements = all.len(), "Arrangements enumerated");

    let renderings = paginator
        .paginate(&all, page)
        .try_map(|assignment| render(&graph, &coloring, assignment))
        .log_failure("rendering")?;

    Ok(ManualView {
        vertex_count: graph.vertex_count(),
        requested_colors,
        coloring,
        class_count,
        total_arrangements: all.len(),
        renderings,
    })
}

fn render(graph: &Graph, coloring: &Coloring, assignment: PaletteAssignment) -> Result<Rendering> {
    let colors = assignment.vertex_colors(coloring)?;
    Ok(Rendering {
        scene: Scene::colored(graph, &colors),
        assignment,
    })
}
