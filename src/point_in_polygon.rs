//! Ray-casting point classification.
//!
//! Counts how often the polygon boundary crosses the horizontal rays
//! leaving the query point to the right and to the left. Differing
//! parities of the two counts put the point on an edge; an odd right count
//! puts it inside. Coincidence with a vertex is detected directly.

use crate::basics::Vertex;

/// Tolerance used to label a query point as a vertex.
pub const VERTEX_EPSILON: f64 = 1e-12;

/// Position of a point relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Outside,
    Inside,
    Vertex,
    Edge,
}

/// Polygon prepared for repeated classification.
///
/// Holds contiguous column (`x`) and row (`y`) coordinate arrays. The ring
/// is closed implicitly: the last vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct PointClassifier {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PointClassifier {
    pub fn new(vertices: &[Vertex]) -> Self {
        Self {
            xs: vertices.iter().map(|&(_, c)| c as f64).collect(),
            ys: vertices.iter().map(|&(r, _)| r as f64).collect(),
        }
    }

    /// Classify the point at `(row, col)`.
    pub fn classify(&self, row: f64, col: f64) -> Classification {
        let n = self.xs.len();
        if n == 0 {
            return Classification::Outside;
        }

        let mut r_cross = 0u32;
        let mut l_cross = 0u32;

        let mut x1 = self.xs[n - 1] - col;
        let mut y1 = self.ys[n - 1] - row;

        // Edge e = (i-1, i).
        for i in 0..n {
            let x0 = self.xs[i] - col;
            let y0 = self.ys[i] - row;

            if x0.abs() < VERTEX_EPSILON && y0.abs() < VERTEX_EPSILON {
                return Classification::Vertex;
            }

            // e straddles the ray's axis from above or below.
            if (y0 > 0.0) != (y1 > 0.0) && (x0 * y1 - x1 * y0) / (y1 - y0) > 0.0 {
                r_cross += 1;
            }
            if (y0 < 0.0) != (y1 < 0.0) && (x0 * y1 - x1 * y0) / (y1 - y0) < 0.0 {
                l_cross += 1;
            }

            x1 = x0;
            y1 = y0;
        }

        if (r_cross & 1) != (l_cross & 1) {
            Classification::Edge
        } else if r_cross & 1 == 1 {
            Classification::Inside
        } else {
            Classification::Outside
        }
    }
}

/// One-shot classification of `(row, col)` against `vertices`.
pub fn classify(vertices: &[Vertex], row: f64, col: f64) -> Classification {
    PointClassifier::new(vertices).classify(row, col)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [Vertex; 4] = [(1, 1), (1, 5), (5, 5), (5, 1)];

    #[test]
    fn test_inside() {
        assert_eq!(classify(&SQUARE, 3.0, 3.0), Classification::Inside);
        assert_eq!(classify(&SQUARE, 2.0, 4.0), Classification::Inside);
    }

    #[test]
    fn test_outside() {
        assert_eq!(classify(&SQUARE, 0.0, 0.0), Classification::Outside);
        assert_eq!(classify(&SQUARE, 3.0, 6.0), Classification::Outside);
        assert_eq!(classify(&SQUARE, 3.0, -4.0), Classification::Outside);
        assert_eq!(classify(&SQUARE, 9.0, 3.0), Classification::Outside);
    }

    #[test]
    fn test_edge() {
        assert_eq!(classify(&SQUARE, 1.0, 3.0), Classification::Edge);
        assert_eq!(classify(&SQUARE, 3.0, 5.0), Classification::Edge);
        assert_eq!(classify(&SQUARE, 5.0, 2.0), Classification::Edge);
        assert_eq!(classify(&SQUARE, 4.0, 1.0), Classification::Edge);
    }

    #[test]
    fn test_vertex_any_winding() {
        let mut reversed = SQUARE;
        reversed.reverse();
        for &(r, c) in &SQUARE {
            assert_eq!(classify(&SQUARE, r as f64, c as f64), Classification::Vertex);
            assert_eq!(classify(&reversed, r as f64, c as f64), Classification::Vertex);
        }
    }

    #[test]
    fn test_vertex_within_tolerance() {
        assert_eq!(classify(&SQUARE, 1.0 + 1e-13, 5.0), Classification::Vertex);
        assert_ne!(classify(&SQUARE, 1.0 + 1e-6, 5.0), Classification::Vertex);
    }

    #[test]
    fn test_diagonal_edge() {
        let tri: [Vertex; 3] = [(1, 1), (5, 5), (5, 1)];
        assert_eq!(classify(&tri, 3.0, 3.0), Classification::Edge);
        assert_eq!(classify(&tri, 4.0, 2.0), Classification::Inside);
        assert_eq!(classify(&tri, 2.0, 4.0), Classification::Outside);
    }

    #[test]
    fn test_collinear_does_not_panic() {
        let line: [Vertex; 3] = [(0, 0), (2, 2), (4, 4)];
        assert_eq!(classify(&line, 1.0, 3.0), Classification::Outside);
        assert_eq!(classify(&line, 2.0, 2.0), Classification::Vertex);
    }

    #[test]
    fn test_empty_polygon() {
        assert_eq!(classify(&[], 0.0, 0.0), Classification::Outside);
    }
}
