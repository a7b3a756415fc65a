//! Boundary-draw plus flood fill (the `flood` algorithm).
//!
//! The ring is closed back to its first vertex and every edge is drawn with
//! Bresenham's algorithm. The drawn boundary then stops a 4-connected flood
//! started from the seed.

use log::{debug, warn};

use crate::basics::Vertex;
use crate::bounding_rect::BoundsTracker;
use crate::deadline::Deadline;
use crate::error::{FillError, Result};
use crate::flood_fill::flood_fill_4;
use crate::grid::{Grid, EMPTY, FILLED};
use crate::line_bresenham::bresenham;

/// Cells written by the two stages of a boundary fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryFillStats {
    /// Cells walked by the line stage after clipping (repeats included).
    pub boundary_cells: u64,
    pub flooded_cells: u64,
    /// Seed the flood started from, `(row, col)`.
    pub seed: (i64, i64),
}

/// Draw the closed boundary of `vertices` and flood its interior.
///
/// With no explicit `seed` the flood starts at the low corner
/// `(min_row, min_col)` of the drawn boundary. An explicit seed outside the
/// grid fails with [`FillError::OutOfBounds`].
pub fn fill_boundary_flood(
    grid: &mut Grid,
    vertices: &[Vertex],
    seed: Option<(i64, i64)>,
    deadline: &Deadline,
) -> Result<BoundaryFillStats> {
    if let Some((row, col)) = seed {
        if !grid.contains(row, col) {
            return Err(FillError::OutOfBounds {
                row,
                col,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
    }

    let mut stats = BoundaryFillStats::default();
    let mut touched = BoundsTracker::new();
    let rows = 0..=grid.rows() as i64 - 1;
    let cols = 0..=grid.cols() as i64 - 1;

    let closed = vertices.iter().chain(vertices.first());
    for (&(r0, c0), &(r1, c1)) in closed.clone().zip(closed.skip(1)) {
        deadline.check()?;
        let (r0, c0, r1, c1) = (r0 as i64, c0 as i64, r1 as i64, c1 as i64);
        // A segment stays inside its endpoints' box and visits both ends.
        touched.add(r0, c0);
        touched.add(r1, c1);
        for (row, col) in bresenham(r0, c0, r1, c1).clip_major(rows.clone(), cols.clone()) {
            grid.set(row, col, FILLED);
            stats.boundary_cells += 1;
        }
    }

    let Some(bounds) = touched.rect() else {
        return Ok(stats);
    };
    stats.seed = match seed {
        Some(seed) => seed,
        None => {
            let (min_row, max_row) = (bounds.y1, bounds.y2);
            let (min_col, max_col) = (bounds.x1, bounds.x2);
            (max_row - (max_row - min_row), max_col - (max_col - min_col))
        }
    };
    debug!(
        "boundary: {} cells drawn, flood seed {:?}",
        stats.boundary_cells, stats.seed
    );

    stats.flooded_cells = flood_fill_4(grid, stats.seed.0, stats.seed.1, EMPTY, FILLED, deadline)?;
    if stats.flooded_cells == 0 {
        warn!("flood from {:?} filled nothing, grid holds the boundary only", stats.seed);
    }
    Ok(stats)
}
