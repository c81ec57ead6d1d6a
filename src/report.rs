//! Plain-text rendering of views.

use std::fmt;

use chroma_engine::Coloring;

use crate::scene::{Scene, vertex_label};
use crate::views::{DrawView, FindView, ManualView, Rendering};

impl fmt::Display for DrawView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} vertices, {} edges",
            self.vertex_count, self.edge_count
        )?;
        write_scene(f, &self.scene)
    }
}

impl fmt::Display for FindView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Colors used: {} (greedy upper bound on the chromatic number)",
            self.class_count
        )?;
        write_coloring(f, &self.coloring)?;
        writeln!(f, "Assignments: {}", self.total_assignments)?;
        write_page(
            f,
            &self.renderings.items,
            self.renderings.page.get(),
            self.renderings.total_pages.get(),
        )
    }
}

impl fmt::Display for ManualView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Requested colors: {} (coloring uses {})",
            self.requested_colors, self.class_count
        )?;
        write_coloring(f, &self.coloring)?;
        if self.total_arrangements == 0 {
            writeln!(
                f,
                "No arrangement of {} colors covers {} vertices",
                self.requested_colors, self.vertex_count
            )?;
        }
        write_page(
            f,
            &self.renderings.items,
            self.renderings.page.get(),
            self.renderings.total_pages.get(),
        )
    }
}

fn write_coloring(f: &mut fmt::Formatter<'_>, coloring: &Coloring) -> fmt::Result {
    write!(f, "Coloring:")?;
    for (v, class) in coloring.as_map() {
        write!(f, " {}={class}", vertex_label(v))?;
    }
    writeln!(f)
}

fn write_page(
    f: &mut fmt::Formatter<'_>,
    items: &[Rendering],
    page: usize,
    total_pages: usize,
) -> fmt::Result {
    writeln!(f, "Page {page}/{total_pages}")?;
    for (i, rendering) in items.iter().enumerate() {
        let names: Vec<&str> = rendering
            .assignment
            .colors()
            .iter()
            .map(|c| c.name())
            .collect();
        writeln!(f, "  [{}] {}", i.saturating_add(1), names.join(", "))?;
        write_scene(f, &rendering.scene)?;
    }
    Ok(())
}

fn write_scene(f: &mut fmt::Formatter<'_>, scene: &Scene) -> fmt::Result {
    for node in &scene.nodes {
        writeln!(
            f,
            "    {:<3} ({:>6.3}, {:>6.3}) {}",
            node.label, node.x, node.y, node.fill
        )?;
    }
    let edges: Vec<String> = scene
        .edges
        .iter()
        .map(|(u, v)| format!("{u}-{v}"))
        .collect();
    writeln!(f, "    edges: {}", edges.join(" "))
}
