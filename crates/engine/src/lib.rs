//! # Chroma Engine
//!
//! Pure, synchronous coloring core:
//!
//! - [`AdjacencyMatrix`] / [`Graph`]: validated input and the undirected graph model
//! - [`welsh_powell`]: greedy degree-ordered vertex coloring
//! - [`class_permutations`] / [`arrangements`]: palette assignment enumeration
//! - [`Paginator`]: page slicing for display
//!
//! Nothing here performs I/O or logging. Every value is built per request and
//! never shared mutably, so requests may run in parallel freely.

pub mod assignment;
pub mod coloring;
pub mod graph;
pub mod matrix;
pub mod pagination;
pub mod palette;

pub use assignment::{
    ARRANGEMENT_CAP, Arrangements, ClassPermutations, PaletteAssignment, arrangements,
    class_permutations,
};
pub use coloring::{ColorClass, Coloring, processing_order, welsh_powell};
pub use graph::{Graph, Vertex};
pub use matrix::AdjacencyMatrix;
pub use pagination::{DEFAULT_PER_PAGE, Page, Paginator};
pub use palette::{Color, PALETTE, PALETTE_SIZE};
