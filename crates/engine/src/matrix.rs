//! Validated adjacency matrices.
//!
//! A matrix is accepted only when it is square, non-empty, and every entry is
//! `0` or `1`. Symmetry is not required.

use chroma_core::{Error, Result};

/// Square 0/1 adjacency matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Validate integer rows into a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if there are no rows, if any row length
    /// differs from the row count, or if any entry is not `0` or `1`.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::invalid_input(
                "adjacency matrix must have at least one vertex",
            ));
        }

        let mut cells = Vec::with_capacity(size.saturating_mul(size));
        for (i, row) in rows.iter().enumerate() {
            ensure_square(i, row.len(), size)?;
            for (j, &value) in row.iter().enumerate() {
                cells.push(entry_bit(i, j, value)?);
            }
        }

        Ok(Self { size, cells })
    }

    /// Validate textual cells (as typed into a form) into a matrix.
    ///
    /// Cells are trimmed and parsed as signed integers before the 0/1 check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any cell is not an integer, or for
    /// any reason listed on [`AdjacencyMatrix::from_rows`].
    pub fn parse_cells<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, cell)| parse_cell(i, j, cell.as_ref()))
                    .collect::<Result<Vec<i64>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(&parsed)
    }

    /// Check the matrix against a separately declared vertex count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `declared` is not positive or does not
    /// match the matrix size.
    pub fn with_declared_size(self, declared: i64) -> Result<Self> {
        if declared <= 0 {
            return Err(Error::invalid_input(format!(
                "vertex count must be positive, got {declared}"
            )));
        }
        match usize::try_from(declared) {
            Ok(n) if n == self.size => Ok(self),
            _ => Err(Error::invalid_input(format!(
                "declared vertex count {declared} does not match the {size}x{size} matrix",
                size = self.size
            ))),
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether `matrix[row][col] == 1`. Out-of-range positions read as `false`.
    #[must_use]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        row.checked_mul(self.size)
            .and_then(|offset| offset.checked_add(col))
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(false)
    }

    /// Every `(row, col)` holding a `1`, in row-major order.
    pub fn set_entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |row| {
            (0..self.size)
                .filter(move |&col| self.is_set(row, col))
                .map(move |col| (row, col))
        })
    }
}

fn ensure_square(row: usize, len: usize, size: usize) -> Result<()> {
    if len == size {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "matrix is not square: row {row} has {len} entries, expected {size}"
        )))
    }
}

fn entry_bit(row: usize, col: usize, value: i64) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(Error::invalid_input(format!(
            "cell ({row}, {col}) must be 0 or 1, got {other}"
        ))),
    }
}

fn parse_cell(row: usize, col: usize, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        Error::invalid_input(format!(
            "cell ({row}, {col}) is not an integer: '{}'",
            raw.trim()
        ))
    })
}
