//! Raster grid — the binary cell buffer every fill writes into.
//!
//! Cells are stored row-major, one byte each, `1` for filled and `0` for
//! empty. A grid is allocated zeroed per fill and handed back to the caller
//! read-only; the algorithms get mutable row access through crate-private
//! methods.

use crate::basics::RectI;
use crate::error::RasterError;

/// Value written into filled cells.
pub const FILLED: u8 = 1;
/// Value of untouched cells.
pub const EMPTY: u8 = 0;

// ============================================================================
// Grid
// ============================================================================

/// A `rows x cols` binary raster.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Grid {
    /// Allocate a zero-filled grid.
    ///
    /// Fails with [`RasterError::GridTooLarge`] when the cell count overflows
    /// the address space.
    pub fn new(rows: usize, cols: usize) -> Result<Self, RasterError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(RasterError::GridTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            data: vec![EMPTY; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`, the shape of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell value, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// True if the cell exists and is set.
    #[inline]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(v) if v != EMPTY)
    }

    /// Immutable slice for row `row`.
    pub fn row_slice(&self, row: usize) -> &[u8] {
        assert!(
            row < self.rows,
            "row {} out of bounds (rows={})",
            row,
            self.rows
        );
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Raw cell data, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of non-zero cells.
    pub fn count_filled(&self) -> u64 {
        self.data.iter().filter(|&&v| v != EMPTY).count() as u64
    }

    /// Iterate the `(row, col)` of every non-zero cell in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != EMPTY)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Compare two grids cell by cell.
    ///
    /// Returns `None` when the shapes differ.
    pub fn compare(&self, other: &Grid) -> Option<GridDiff> {
        if self.dimensions() != other.dimensions() {
            return None;
        }
        Some(self.diff_same_shape(other))
    }

    /// Cell-by-cell diff of two grids already known to share a shape.
    pub(crate) fn diff_same_shape(&self, other: &Grid) -> GridDiff {
        let mut different_cells = 0u64;
        let mut first_diff = None;
        for row in 0..self.rows {
            let a = self.row_slice(row);
            let b = other.row_slice(row);
            if a == b {
                continue;
            }
            for (col, (va, vb)) in a.iter().zip(b).enumerate() {
                if va != vb {
                    different_cells += 1;
                    if first_diff.is_none() {
                        first_diff = Some((row, col));
                    }
                }
            }
        }

        GridDiff {
            identical: different_cells == 0,
            total_cells: self.data.len() as u64,
            different_cells,
            first_diff,
        }
    }

    // ------------------------------------------------------------------------
    // Crate-private write access
    // ------------------------------------------------------------------------

    /// Grid extents as an inclusive rectangle (`x` = column, `y` = row).
    pub(crate) fn bounds(&self) -> RectI {
        RectI::new(0, 0, self.cols as i64 - 1, self.rows as i64 - 1)
    }

    #[inline]
    pub(crate) fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as u64) < self.rows as u64 && (col as u64) < self.cols as u64
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [u8] {
        assert!(
            row < self.rows,
            "row {} out of bounds (rows={})",
            row,
            self.rows
        );
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Set one cell. Coordinates outside the grid are ignored.
    #[inline]
    pub(crate) fn set(&mut self, row: i64, col: i64, value: u8) {
        if self.contains(row, col) {
            let i = row as usize * self.cols + col as usize;
            self.data[i] = value;
        }
    }

    /// Fill the inclusive column span `[c1, c2]` of `row`, clipped to the grid.
    pub(crate) fn fill_span(&mut self, row: i64, c1: i64, c2: i64, value: u8) {
        if row < 0 || row as u64 >= self.rows as u64 {
            return;
        }
        let c1 = c1.max(0);
        let c2 = c2.min(self.cols as i64 - 1);
        if c1 > c2 {
            return;
        }
        self.row_slice_mut(row as usize)[c1 as usize..=c2 as usize].fill(value);
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// GridDiff
// ============================================================================

/// Result of comparing two grids of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDiff {
    /// True if every cell matches.
    pub identical: bool,
    pub total_cells: u64,
    pub different_cells: u64,
    /// First differing `(row, col)`, scanning row-major.
    pub first_diff: Option<(usize, usize)>,
}

impl std::fmt::Display for GridDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical {
            write!(f, "IDENTICAL: {} cells match", self.total_cells)
        } else {
            write!(
                f,
                "DIFFERENT: {}/{} cells differ",
                self.different_cells, self.total_cells
            )?;
            if let Some((row, col)) = self.first_diff {
                write!(f, ", first at ({}, {})", row, col)?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
