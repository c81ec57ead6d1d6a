#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Chroma
//!
//! Colors graphs given as adjacency matrices and lists the palette assignments
//! used to render them.
//!
//! This library re-exports the workspace crates and hosts the application
//! layer: settings, matrix input, scene assembly and the CLI handlers.

// Re-export all crates
pub use chroma_core;
pub use chroma_engine;

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod report;
pub mod scene;
pub mod views;
