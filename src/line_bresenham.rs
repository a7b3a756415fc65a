//! Bresenham line rasterization.
//!
//! Integer-only stepping between two cells, generalised to all eight
//! octants by swapping the major axis and signing the steps. The iterator
//! is a pure coordinate generator; it never touches a grid.
//!
//! The cell at any step has a closed form, so a line can be clipped to a
//! window along its major axis and resumed there without walking the cells
//! before it.

use std::ops::RangeInclusive;

// ============================================================================
// BresenhamLine
// ============================================================================

/// Iterator over the cells of a segment from `(x0, y0)` to `(x1, y1)`,
/// both endpoints included.
///
/// The sequence has `max(|dx|, |dy|) + 1` items. Midpoint ties are broken
/// towards the lexicographically larger endpoint in both directions, so the
/// cells from `a` to `b` are exactly the cells from `b` to `a` reversed.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x0: i64,
    y0: i64,
    // Unit steps of the major (xx, xy) and minor (yx, yy) axes.
    xx: i64,
    xy: i64,
    yx: i64,
    yy: i64,
    major: i64,
    minor: i64,
    step: i64,
    // Last step to produce, inclusive.
    last: i64,
    offset: i64,
    err: i64,
    step_on_tie: bool,
}

impl BresenhamLine {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let xsign = if dx > 0 { 1 } else { -1 };
        let ysign = if dy > 0 { 1 } else { -1 };
        let dx = dx.abs();
        let dy = dy.abs();

        let (major, minor, xx, xy, yx, yy) = if dx > dy {
            (dx, dy, xsign, 0, 0, ysign)
        } else {
            (dy, dx, 0, ysign, xsign, 0)
        };

        Self {
            x0,
            y0,
            xx,
            xy,
            yx,
            yy,
            major,
            minor,
            step: 0,
            last: major,
            offset: 0,
            err: 2 * minor - major,
            step_on_tie: (x0, y0) <= (x1, y1),
        }
    }

    /// Restrict the line to the steps whose major-axis coordinate lies in
    /// `xs` (x-major lines) or `ys` (y-major lines).
    ///
    /// The cells kept are exactly those the unclipped line produces at those
    /// steps. The minor axis is not clipped, so a kept cell may still fall
    /// outside the other range.
    pub fn clip_major(mut self, xs: RangeInclusive<i64>, ys: RangeInclusive<i64>) -> Self {
        let (origin, dir, range) = if self.xx != 0 {
            (self.x0, self.xx, xs)
        } else {
            (self.y0, self.xy, ys)
        };
        let (lo, hi) = if dir > 0 {
            (range.start() - origin, range.end() - origin)
        } else {
            (origin - range.end(), origin - range.start())
        };
        let first = lo.max(self.step);
        let last = hi.min(self.last);
        if first > last {
            self.step = self.last + 1;
        } else {
            self.last = last;
            self.seek(first);
        }
        self
    }

    /// Jump to `step`, restoring the minor offset and error term it would
    /// have after stepping there one cell at a time.
    fn seek(&mut self, step: i64) {
        // i128: 2 * minor * step exceeds i64 for spans of full i32 range.
        let minor = self.minor as i128;
        let major = self.major as i128;
        let k = step as i128;
        let offset = if major == 0 {
            0
        } else {
            let tie = if self.step_on_tie { 0 } else { 1 };
            (2 * minor * k + major - tie) / (2 * major)
        };
        self.step = step;
        self.offset = offset as i64;
        self.err = (2 * minor - major + 2 * minor * k - 2 * major * offset) as i64;
    }
}

impl Iterator for BresenhamLine {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step > self.last {
            return None;
        }
        let point = (
            self.x0 + self.step * self.xx + self.offset * self.yx,
            self.y0 + self.step * self.xy + self.offset * self.yy,
        );

        let advance = if self.step_on_tie {
            self.err >= 0
        } else {
            self.err > 0
        };
        if advance {
            self.offset += 1;
            self.err -= 2 * self.major;
        }
        self.err += 2 * self.minor;
        self.step += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1 - self.step).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

impl std::iter::FusedIterator for BresenhamLine {}

/// Convenience wrapper returning an iterator over the segment's cells.
#[inline]
pub fn bresenham(x0: i64, y0: i64, x1: i64, y1: i64) -> BresenhamLine {
    BresenhamLine::new(x0, y0, x1, y1)
}

// ============================================================================
// Tests
// ============================================================================
