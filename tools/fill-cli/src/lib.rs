// Request decoding and reporting for the fill-cli front end.
//
// Decodes polygon input the way an HTTP handler would receive it (a JSON
// string of `[row, col]` pairs), and renders fill results as JSON summaries
// or ASCII previews.

use poly_fill::{FillError, FillResult, Grid, Seed, Vertex};
use serde::Serialize;

// ============================================================================
// Input decoding
// ============================================================================

/// Decode a JSON list of `[row, col]` integer pairs.
///
/// Anything that is not a list of integer pairs within `i32` range fails
/// with [`FillError::InvalidPolygon`].
pub fn parse_points(json: &str) -> Result<Vec<Vertex>, FillError> {
    let pairs: Vec<[i32; 2]> = serde_json::from_str(json)
        .map_err(|e| FillError::InvalidPolygon(format!("cannot decode points: {}", e)))?;
    Ok(pairs.into_iter().map(|[r, c]| (r, c)).collect())
}

/// Parse a `row,col` seed.
pub fn parse_seed(s: &str) -> Result<Seed, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = r.trim().parse().map_err(|e| format!("bad row {:?}: {}", r, e))?;
    let col = c.trim().parse().map_err(|e| format!("bad col {:?}: {}", c, e))?;
    Ok((row, col))
}

/// Parse a `rows,cols` preview window.
pub fn parse_window(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROWS,COLS, got {:?}", s))?;
    let rows = r.trim().parse().map_err(|e| format!("bad rows {:?}: {}", r, e))?;
    let cols = c.trim().parse().map_err(|e| format!("bad cols {:?}: {}", c, e))?;
    Ok((rows, cols))
}

// ============================================================================
// Reporting
// ============================================================================

/// JSON summary of one fill.
#[derive(Debug, Clone, Serialize)]
pub struct FillSummary {
    pub algorithm: String,
    pub rows: usize,
    pub cols: usize,
    pub filled_cells: u64,
    pub execution_seconds: f64,
}

impl FillSummary {
    pub fn from_result(result: &FillResult) -> Self {
        let (rows, cols) = result.grid.dimensions();
        Self {
            algorithm: result.algorithm.to_string(),
            rows,
            cols,
            filled_cells: result.grid.count_filled(),
            execution_seconds: result.elapsed_secs(),
        }
    }
}

/// Render the top-left `rows x cols` window of `grid`, one line per row,
/// `1`/`0` separated by spaces.
pub fn ascii_preview(grid: &Grid, rows: usize, cols: usize) -> String {
    let rows = rows.min(grid.rows());
    let cols = cols.min(grid.cols());
    let mut out = String::with_capacity(rows * (cols * 2 + 1));
    for row in 0..rows {
        let line: Vec<&str> = grid.row_slice(row)[..cols]
            .iter()
            .map(|&v| if v == 0 { "0" } else { "1" })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
