//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a set of cells, either in one
//! pass over an iterator or incrementally while cells are being produced.

use crate::basics::{RectI, Vertex};

/// Incremental bounding box over `(row, col)` cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsTracker {
    rect: Option<RectI>,
}

impl BoundsTracker {
    pub fn new() -> Self {
        Self { rect: None }
    }

    /// Extend the box to include `(row, col)`.
    #[inline]
    pub fn add(&mut self, row: i64, col: i64) {
        match &mut self.rect {
            None => self.rect = Some(RectI::new(col, row, col, row)),
            Some(r) => {
                if col < r.x1 {
                    r.x1 = col;
                }
                if row < r.y1 {
                    r.y1 = row;
                }
                if col > r.x2 {
                    r.x2 = col;
                }
                if row > r.y2 {
                    r.y2 = row;
                }
            }
        }
    }

    /// The box so far (`x` = column, `y` = row), `None` if nothing was added.
    pub fn rect(&self) -> Option<RectI> {
        self.rect
    }
}

/// Bounding box of a sequence of `(row, col)` cells.
pub fn bounding_rect<I>(cells: I) -> Option<RectI>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let mut tracker = BoundsTracker::new();
    for (row, col) in cells {
        tracker.add(row, col);
    }
    tracker.rect()
}

/// Bounding box of a polygon's vertices.
pub fn polygon_bounds(vertices: &[Vertex]) -> Option<RectI> {
    bounding_rect(vertices.iter().map(|&(r, c)| (r as i64, c as i64)))
}
