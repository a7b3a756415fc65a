//! Bounding-box ray-casting fill (the `rourke` algorithm).
//!
//! Every cell of the polygon's bounding box is classified on its own, so
//! the cost is vertex count times box area. A cell is written whenever it
//! is not `Outside`, which puts vertices and edges in the footprint.

use log::debug;

use crate::basics::{RectI, Vertex};
use crate::bounding_rect::polygon_bounds;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::grid::{Grid, FILLED};
use crate::point_in_polygon::{Classification, PointClassifier};

/// Fill `vertices` into `grid` by classifying every bounding-box cell.
///
/// Returns the number of cells written.
pub fn fill_ray_cast(grid: &mut Grid, vertices: &[Vertex], deadline: &Deadline) -> Result<u64> {
    let Some(bbox) = polygon_bounds(vertices) else {
        return Ok(0);
    };
    // Low end clamped to zero, high end clipped to the grid.
    let mut scan = RectI::new(bbox.x1.max(0), bbox.y1.max(0), bbox.x2, bbox.y2);
    if !scan.clip(&grid.bounds()) {
        debug!("ray-cast: bounding box {:?} misses the grid", bbox);
        return Ok(0);
    }
    debug!("ray-cast: scanning {:?}", scan);

    let classifier = PointClassifier::new(vertices);
    let mut written = 0u64;
    for row in scan.y1..=scan.y2 {
        deadline.check()?;
        let line = grid.row_slice_mut(row as usize);
        for col in scan.x1..=scan.x2 {
            if classifier.classify(row as f64, col as f64) != Classification::Outside {
                line[col as usize] = FILLED;
                written += 1;
            }
        }
    }
    Ok(written)
}
