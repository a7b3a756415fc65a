//! 4-connected flood propagation.
//!
//! Span-based fill driven by an explicit stack: each popped seed is widened
//! into the maximal run of `old` cells on its row, the run is written with
//! `new`, and one seed per `old` run directly above and below is pushed.
//! Written cells double as the visited marker, so every cell is filled at
//! most once and the stack never holds more than a few seeds per span.

use log::{debug, warn};

use crate::deadline::Deadline;
use crate::error::Result;
use crate::grid::Grid;

/// Pops between two deadline checks.
const CHECK_INTERVAL: u32 = 1024;

/// Replace the 4-connected region of `old` cells containing `(row, col)`
/// with `new`.
///
/// Returns the number of cells written. A seed outside the grid, a seed not
/// holding `old`, or `old == new` is a no-op.
pub fn flood_fill_4(
    grid: &mut Grid,
    row: i64,
    col: i64,
    old: u8,
    new: u8,
    deadline: &Deadline,
) -> Result<u64> {
    if old == new {
        return Ok(0);
    }
    if !grid.contains(row, col) {
        warn!("flood seed ({}, {}) outside the grid, nothing filled", row, col);
        return Ok(0);
    }
    let (row, col) = (row as usize, col as usize);
    if grid.get(row, col) != Some(old) {
        warn!("flood seed ({}, {}) is not fillable, nothing filled", row, col);
        return Ok(0);
    }

    let (rows, cols) = grid.dimensions();
    let mut stack: Vec<(usize, usize)> = vec![(row, col)];
    let mut filled = 0u64;
    let mut pops = 0u32;
    let mut max_depth = 1usize;

    while let Some((r, c)) = stack.pop() {
        pops = pops.wrapping_add(1);
        if pops % CHECK_INTERVAL == 0 {
            deadline.check()?;
        }

        let line = grid.row_slice_mut(r);
        if line[c] != old {
            continue;
        }

        let mut left = c;
        while left > 0 && line[left - 1] == old {
            left -= 1;
        }
        let mut right = c;
        while right + 1 < cols && line[right + 1] == old {
            right += 1;
        }
        line[left..=right].fill(new);
        filled += (right - left + 1) as u64;

        if r > 0 {
            push_runs(grid.row_slice(r - 1), r - 1, left, right, old, &mut stack);
        }
        if r + 1 < rows {
            push_runs(grid.row_slice(r + 1), r + 1, left, right, old, &mut stack);
        }
        max_depth = max_depth.max(stack.len());
    }

    debug!("flood: {} cells filled, stack peak {}", filled, max_depth);
    Ok(filled)
}

/// Push the first cell of every `old` run within `line[left..=right]`.
#[inline]
fn push_runs(
    line: &[u8],
    row: usize,
    left: usize,
    right: usize,
    old: u8,
    stack: &mut Vec<(usize, usize)>,
) {
    let mut in_run = false;
    for (c, &v) in line.iter().enumerate().take(right + 1).skip(left) {
        if v == old {
            if !in_run {
                stack.push((row, c));
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
