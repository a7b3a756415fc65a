//! Foundation types shared by the fill algorithms.
//!
//! Vertices and cells are addressed as `(row, col)`. Where a geometric
//! `x`/`y` naming is used (the ray-casting classifier, [`Rect`]), `x` runs
//! along columns and `y` along rows.

// ============================================================================
// Vertices
// ============================================================================

/// A polygon vertex as `(row, col)` in absolute grid coordinates.
///
/// Coordinates may be negative or lie beyond the grid; the algorithms clip
/// their output to the grid extents.
pub type Vertex = (i32, i32);

/// Minimum number of vertices accepted for a polygon.
pub const MIN_VERTICES: usize = 3;

// ============================================================================
// Rounding
// ============================================================================

/// Floor of a double as a wide signed integer.
#[inline]
pub fn ifloor(v: f64) -> i64 {
    v.floor() as i64
}

/// Ceiling of a double as a wide signed integer.
#[inline]
pub fn iceil(v: f64) -> i64 {
    v.ceil() as i64
}

// ============================================================================
// Rect
// ============================================================================

/// An inclusive rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.is_valid()
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// Integer rectangle over cell coordinates.
pub type RectI = Rect<i64>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_negative() {
        assert_eq!(ifloor(-0.5), -1);
        assert_eq!(iceil(-0.5), 0);
        assert_eq!(ifloor(3.0), 3);
        assert_eq!(iceil(3.0), 3);
        assert_eq!(iceil(3.01), 4);
    }

    #[test]
    fn test_rect_clip() {
        let mut r = RectI::new(-5, -5, 20, 3);
        assert!(r.clip(&RectI::new(0, 0, 9, 9)));
        assert_eq!(r, RectI::new(0, 0, 9, 3));
    }

    #[test]
    fn test_rect_clip_disjoint() {
        let mut r = RectI::new(20, 20, 30, 30);
        assert!(!r.clip(&RectI::new(0, 0, 9, 9)));
    }
}
