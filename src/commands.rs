//! CLI command handlers.
//!
//! All commands follow functional patterns:
//! - Zero unwraps, zero panics
//! - Result<T, Error> for all operations
//! - Output is returned as a string; printing is left to `main`

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt::Display;

use chroma_core::{Error, Result};
use chroma_engine::Paginator;
use serde::Serialize;

use crate::cli::{Commands, MatrixArgs, PageArgs};
use crate::config::{OutputFormat, Settings};
use crate::input::{MatrixSource, load_matrix};
use crate::views;

/// Execute a CLI command and return its rendered output.
///
/// # Errors
///
/// Returns the first input, coloring, enumeration or encoding error.
pub fn execute_command(command: &Commands, settings: &Settings) -> Result<String> {
    match command {
        Commands::Draw { input } => {
            let matrix = read_input(input)?;
            emit(&views::draw(&matrix), settings.output)
        }

        Commands::Find { input, paging } => {
            let matrix = read_input(input)?;
            let paginator = paginator_for(paging, settings)?;
            emit(
                &views::find(&matrix, paginator, paging.page)?,
                settings.output,
            )
        }

        Commands::Manual {
            input,
            colors,
            paging,
        } => {
            let matrix = read_input(input)?;
            let paginator = paginator_for(paging, settings)?;
            emit(
                &views::manual(&matrix, *colors, paginator, paging.page)?,
                settings.output,
            )
        }
    }
}

fn read_input(args: &MatrixArgs) -> Result<chroma_engine::AdjacencyMatrix> {
    load_matrix(&MatrixSource::from_arg(&args.matrix), args.vertices)
}

fn paginator_for(paging: &PageArgs, settings: &Settings) -> Result<Paginator> {
    paging
        .per_page
        .map_or_else(|| settings.paginator(), |n| Ok(Paginator::new(n)))
}

fn emit<V: Serialize + Display>(view: &V, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(view.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).map_err(|e| Error::json_encode_failed(e.to_string()))
        }
    }
}
