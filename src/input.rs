//! Matrix input: text grids and JSON arrays, from a file or stdin.
//!
//! Text grids hold one row per line with cells separated by whitespace and/or
//! commas; blank lines and `#` comments are skipped. Input whose first
//! non-blank character is `[` is read as a JSON array of arrays.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Read;
use std::path::PathBuf;

use chroma_core::{Error, Result};
use chroma_engine::AdjacencyMatrix;
use serde_json::Value;

/// Where the matrix text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixSource {
    Stdin,
    File(PathBuf),
}

impl MatrixSource {
    /// `-` means stdin; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Read the whole source as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileReadFailed`] for unreadable files and
    /// [`Error::Io`] for stdin failures.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .map_err(|e| Error::file_read_failed(path, e.to_string())),
        }
    }
}

/// Parse matrix text, detecting the format.
///
/// # Errors
///
/// Returns [`Error::JsonParseFailed`] for malformed JSON and
/// [`Error::InvalidInput`] for anything the matrix validation rejects.
pub fn parse_matrix(text: &str) -> Result<AdjacencyMatrix> {
    if text.trim_start().starts_with('[') {
        parse_json(text)
    } else {
        parse_grid(text)
    }
}

/// Read and parse `source`, checking it against `declared_vertices` when given.
///
/// # Errors
///
/// As [`MatrixSource::read`], [`parse_matrix`] and
/// [`AdjacencyMatrix::with_declared_size`].
pub fn load_matrix(source: &MatrixSource, declared_vertices: Option<i64>) -> Result<AdjacencyMatrix> {
    let matrix = parse_matrix(&source.read()?)?;
    match declared_vertices {
        Some(n) => matrix.with_declared_size(n),
        None => Ok(matrix),
    }
}

fn parse_grid(text: &str) -> Result<AdjacencyMatrix> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|cell| !cell.is_empty())
                .collect()
        })
        .collect();
    AdjacencyMatrix::parse_cells(&rows)
}

fn parse_json(text: &str) -> Result<AdjacencyMatrix> {
    let raw: Vec<Vec<Value>> =
        serde_json::from_str(text).map_err(|e| Error::json_parse_failed(e.to_string()))?;
    let rows = raw
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, value)| json_integer(i, j, value))
                .collect::<Result<Vec<i64>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    AdjacencyMatrix::from_rows(&rows)
}

fn json_integer(row: usize, col: usize, value: &Value) -> Result<i64> {
    value.as_i64().ok_or_else(|| {
        Error::invalid_input(format!("cell ({row}, {col}) is not an integer: {value}"))
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_grid_with_spaces_and_commas() {
        let m = parse_matrix("0 1, 1\n1,0,1\n\n1 1 0\n").unwrap();
        assert_eq!(m.size(), 3);
        assert!(m.is_set(0, 2));
    }

    #[test]
    fn test_grid_skips_comments() {
        let m = parse_matrix("# triangle\n0 1\n1 0\n").unwrap();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_grid_non_integer_cell() {
        let err = parse_matrix("0 a\n1 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: cell (0, 1) is not an integer: 'a'"
        );
    }

    #[test]
    fn test_empty_text_has_no_vertices() {
        assert!(matches!(
            parse_matrix("  \n"),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_json_matrix() {
        let m = parse_matrix("[[0, 1], [0, 0]]").unwrap();
        assert!(m.is_set(0, 1));
        assert!(!m.is_set(1, 0));
    }

    #[test]
    fn test_json_non_integer_value() {
        let err = parse_matrix("[[0, \"1\"], [1, 0]]").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
        let err = parse_matrix("[[0, 1.5], [1, 0]]").unwrap_err();
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn test_json_malformed() {
        assert!(matches!(
            parse_matrix("[[0, 1]"),
            Err(Error::JsonParseFailed { .. })
        ));
    }

    #[test]
    fn test_source_from_arg() {
        assert_eq!(MatrixSource::from_arg("-"), MatrixSource::Stdin);
        assert_eq!(
            MatrixSource::from_arg("m.txt"),
            MatrixSource::File(PathBuf::from("m.txt"))
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let src = MatrixSource::File(PathBuf::from("/nonexistent/chroma/matrix.txt"));
        assert!(matches!(
            load_matrix(&src, None),
            Err(Error::FileReadFailed { .. })
        ));
    }
}
