//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Chroma - graph coloring for adjacency matrices
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(version)]
#[command(about = "Color graphs given as adjacency matrices")]
#[command(
    long_about = "Chroma reads an adjacency matrix, colors it with the Welsh-Powell heuristic, and lists palette assignments for rendering."
)]
pub struct Cli {
    /// Settings file (defaults to ./chroma.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Matrix input shared by every command.
#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Matrix file, or `-` for stdin
    #[arg(short, long)]
    pub matrix: String,

    /// Declared vertex count, checked against the matrix
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub vertices: Option<i64>,
}

/// Page selection for paginated commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// 1-indexed page to show
    #[arg(short, long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Renderings per page (overrides settings)
    #[arg(long)]
    pub per_page: Option<NonZeroUsize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay out the graph without coloring
    Draw {
        #[command(flatten)]
        input: MatrixArgs,
    },

    /// Color the graph and list every class-to-color permutation
    Find {
        #[command(flatten)]
        input: MatrixArgs,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Color the graph and list arrangements of a chosen number of colors
    Manual {
        #[command(flatten)]
        input: MatrixArgs,

        /// Number of palette colors to arrange
        #[arg(short, long)]
        colors: usize,

        #[command(flatten)]
        paging: PageArgs,
    },
}
