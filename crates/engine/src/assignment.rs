//! # Palette Assignments
//!
//! Maps color classes to palette colors, in two enumeration modes:
//!
//! - [`class_permutations`]: every bijection from the `k` classes onto the first
//!   `k` palette colors, in lexicographic palette order (`k!` assignments).
//! - [`arrangements`]: ordered selections of `n` colors (one slot per vertex)
//!   drawn from the first `c` palette colors, capped at
//!   [`ARRANGEMENT_CAP`] and produced lazily.
//!
//! In both modes a vertex `v` is drawn in `assignment[coloring[v]]`.

use std::iter::{Copied, Take};
use std::slice;

use chroma_core::{Error, Result};
use itertools::{Itertools, Permutations};
use serde::Serialize;

use crate::coloring::{ColorClass, Coloring};
use crate::palette::{self, Color, PALETTE_SIZE};

/// Most arrangements [`arrangements`] will ever yield.
pub const ARRANGEMENT_CAP: usize = 10;

type PaletteIter = Copied<slice::Iter<'static, Color>>;

/// Class-id-indexed mapping onto palette colors. One assignment is one rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaletteAssignment {
    colors: Vec<Color>,
}

impl PaletteAssignment {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Colors by position.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette color for `class`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] if the assignment has no entry at `class`.
    pub fn color_for_class(&self, class: ColorClass) -> Result<Color> {
        self.colors.get(class).copied().ok_or_else(|| {
            Error::mapping(format!(
                "color class {class} has no palette entry (assignment covers {} classes)",
                self.colors.len()
            ))
        })
    }

    /// Resolved color of every vertex, in vertex order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] if any vertex's class lies outside the assignment.
    pub fn vertex_colors(&self, coloring: &Coloring) -> Result<Vec<Color>> {
        coloring
            .classes()
            .iter()
            .map(|&class| self.color_for_class(class))
            .collect()
    }
}

/// Every bijection from color classes onto the leading palette colors.
#[derive(Debug, Clone)]
pub struct ClassPermutations {
    inner: Permutations<PaletteIter>,
    total: usize,
}

impl ClassPermutations {
    /// Number of assignments the full enumeration yields (`k!`).
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for ClassPermutations {
    type Item = PaletteAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(PaletteAssignment::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Enumerate all `k!` class-to-color bijections for `coloring`.
///
/// # Errors
///
/// Returns [`Error::PaletteOverflow`] when the coloring has more classes than
/// the palette has colors.
///
/// # Examples
///
/// ```
/// use chroma_engine::{Graph, class_permutations, welsh_powell};
///
/// let k3 = Graph::from_rows(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
/// let perms = class_permutations(&welsh_powell(&k3)).unwrap();
/// assert_eq!(perms.total(), 6);
/// assert_eq!(perms.count(), 6);
/// ```
pub fn class_permutations(coloring: &Coloring) -> Result<ClassPermutations> {
    let k = coloring.class_count();
    if k > PALETTE_SIZE {
        return Err(Error::palette_overflow(k, PALETTE_SIZE));
    }

    Ok(ClassPermutations {
        inner: palette::leading(k).iter().copied().permutations(k),
        total: (1..=k).product(),
    })
}

/// Capped, lazily produced per-vertex arrangements of the leading palette colors.
#[derive(Debug, Clone)]
pub struct Arrangements {
    inner: Take<Permutations<PaletteIter>>,
}

impl Iterator for Arrangements {
    type Item = PaletteAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(PaletteAssignment::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Enumerate up to [`ARRANGEMENT_CAP`] arrangements of `requested_colors`
/// palette colors over the coloring's vertices.
///
/// Only the first `min(requested_colors, 10)` palette colors are used. When
/// fewer colors are available than there are vertices, no arrangement exists
/// and the iterator is empty.
///
/// # Errors
///
/// Returns [`Error::Mapping`] when the usable colors cannot cover every color
/// class of `coloring`.
pub fn arrangements(coloring: &Coloring, requested_colors: usize) -> Result<Arrangements> {
    let k = coloring.class_count();
    let available = palette::leading(requested_colors);
    if available.len() < k {
        return Err(Error::mapping(format!(
            "{requested_colors} requested colors ({} usable) cannot cover {k} color classes",
            available.len()
        )));
    }

    Ok(Arrangements {
        inner: available
            .iter()
            .copied()
            .permutations(coloring.vertex_count())
            .take(ARRANGEMENT_CAP),
    })
}
