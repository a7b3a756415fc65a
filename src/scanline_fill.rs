//! Edge-table scan-line polygon fill (the `fast` algorithm).
//!
//! Every non-horizontal edge contributes one crossing per grid row it spans,
//! found by linear interpolation along the edge. Crossings on a row are
//! sorted and filled pairwise (even-odd rule). Edges own the half-open row
//! range `[y_low, y_high)` so a vertex shared by two edges is counted once.
//!
//! A second pass marks cells whose centres lie exactly on the boundary,
//! including those on horizontal edges and on the closing row of each edge,
//! so the footprint covers boundary and interior alike.

use log::debug;

use crate::basics::{iceil, ifloor, Vertex};
use crate::deadline::Deadline;
use crate::error::Result;
use crate::grid::{Grid, FILLED};

// ============================================================================
// Edge table
// ============================================================================

/// A non-horizontal edge oriented so that `y_low < y_high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    y_low: i64,
    x_low: i64,
    y_high: i64,
    x_high: i64,
}

impl Edge {
    /// Column of the edge on `row`, exact for integer results.
    #[inline]
    fn x_at(&self, row: i64) -> f64 {
        let dy = self.y_high - self.y_low;
        let dx = self.x_high - self.x_low;
        self.x_low as f64 + ((row - self.y_low) as f64 * dx as f64) / dy as f64
    }

    /// Column of the edge on `row` if it falls exactly on a cell centre.
    #[inline]
    fn exact_x_at(&self, row: i64) -> Option<i64> {
        // i128: the product of two i32 spans can exceed i64.
        let dy = (self.y_high - self.y_low) as i128;
        let num = (row - self.y_low) as i128 * (self.x_high - self.x_low) as i128;
        if num % dy == 0 {
            Some(self.x_low + (num / dy) as i64)
        } else {
            None
        }
    }
}

/// Polygon edges split into the sorted edge table and horizontal runs.
#[derive(Debug, Default)]
struct EdgeTable {
    edges: Vec<Edge>,
    // (row, col_a, col_b)
    horizontal: Vec<(i64, i64, i64)>,
}

impl EdgeTable {
    /// Edges `(i-1, i)` of the ring, sorted by lower row.
    fn build(vertices: &[Vertex]) -> Self {
        let mut table = Self::default();
        let n = vertices.len();
        for i in 0..n {
            let (r0, c0) = vertices[(i + n - 1) % n];
            let (r1, c1) = vertices[i];
            let (r0, c0, r1, c1) = (r0 as i64, c0 as i64, r1 as i64, c1 as i64);
            if r0 == r1 {
                table.horizontal.push((r0, c0, c1));
            } else if r0 < r1 {
                table.edges.push(Edge { y_low: r0, x_low: c0, y_high: r1, x_high: c1 });
            } else {
                table.edges.push(Edge { y_low: r1, x_low: c1, y_high: r0, x_high: c0 });
            }
        }
        table.edges.sort_by_key(|e| e.y_low);
        table
    }
}

// ============================================================================
// Fill
// ============================================================================

/// Fill `vertices` into `grid` with the scan-line algorithm.
///
/// Returns the number of spans written by the interior pass.
pub fn fill_scanline(grid: &mut Grid, vertices: &[Vertex], deadline: &Deadline) -> Result<u64> {
    let table = EdgeTable::build(vertices);
    debug!(
        "scanline: {} edges, {} horizontal runs",
        table.edges.len(),
        table.horizontal.len()
    );

    let spans = fill_interior(grid, &table, deadline)?;
    mark_boundary(grid, &table, deadline)?;
    Ok(spans)
}

fn fill_interior(grid: &mut Grid, table: &EdgeTable, deadline: &Deadline) -> Result<u64> {
    let Some(first) = table.edges.first() else {
        return Ok(0);
    };
    let last_row = table.edges.iter().map(|e| e.y_high).max().unwrap_or(first.y_low) - 1;
    let start_row = first.y_low.max(0);
    let end_row = last_row.min(grid.rows() as i64 - 1);

    let mut next = 0;
    let mut active: Vec<Edge> = Vec::new();
    let mut crossings: Vec<f64> = Vec::new();
    let mut spans = 0u64;

    for row in start_row..=end_row {
        deadline.check()?;

        while next < table.edges.len() && table.edges[next].y_low <= row {
            active.push(table.edges[next]);
            next += 1;
        }
        active.retain(|e| e.y_high > row);

        crossings.clear();
        crossings.extend(active.iter().map(|e| e.x_at(row)));
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            grid.fill_span(row, iceil(pair[0]), ifloor(pair[1]), FILLED);
            spans += 1;
        }
    }
    Ok(spans)
}

fn mark_boundary(grid: &mut Grid, table: &EdgeTable, deadline: &Deadline) -> Result<()> {
    let max_row = grid.rows() as i64 - 1;
    for &(row, ca, cb) in &table.horizontal {
        grid.fill_span(row, ca.min(cb), ca.max(cb), FILLED);
    }
    for edge in &table.edges {
        deadline.check()?;
        for row in edge.y_low.max(0)..=edge.y_high.min(max_row) {
            if let Some(col) = edge.exact_x_at(row) {
                grid.set(row, col, FILLED);
            }
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
