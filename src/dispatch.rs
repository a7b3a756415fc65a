//! Algorithm selection and timing.
//!
//! [`Filler`] validates a request, allocates a fresh grid of the configured
//! shape, runs exactly one fill algorithm into it and measures the
//! wall-clock time of that run alone. The grid is only handed out when the
//! algorithm finishes; any error drops it.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::basics::{Vertex, MIN_VERTICES};
use crate::boundary_fill::fill_boundary_flood;
use crate::config::FillConfig;
use crate::deadline::Deadline;
use crate::error::{FillError, Result};
use crate::grid::Grid;
use crate::ray_cast_fill::fill_ray_cast;
use crate::scanline_fill::fill_scanline;

// ============================================================================
// Algorithm
// ============================================================================

/// The interchangeable fill algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Edge-table scan-line fill.
    Fast,
    /// Ray-casting classification of every bounding-box cell.
    Rourke,
    /// Bresenham boundary followed by a 4-connected flood.
    Flood,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Fast, Algorithm::Rourke, Algorithm::Flood];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fast => "fast",
            Algorithm::Rourke => "rourke",
            Algorithm::Flood => "flood",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| FillError::InvalidAlgorithm(s.to_string()))
    }
}

/// Explicit flood seed as `(row, col)`.
pub type Seed = (i32, i32);

// ============================================================================
// FillResult
// ============================================================================

/// A completed fill.
#[derive(Debug, Clone)]
pub struct FillResult {
    pub grid: Grid,
    /// Time spent inside the algorithm, excluding validation and allocation.
    pub elapsed: Duration,
    pub algorithm: Algorithm,
}

impl FillResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

// ============================================================================
// Filler
// ============================================================================

/// Dispatcher for single fills on a grid of fixed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filler {
    rows: usize,
    cols: usize,
    timeout: Option<Duration>,
}

impl Filler {
    /// A filler for `rows x cols` grids with no time limit.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            timeout: None,
        }
    }

    pub fn from_config(config: &FillConfig) -> Self {
        Self::new(config.rows, config.cols).with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Fill with the algorithm given by name (`fast`, `rourke` or `flood`).
    pub fn fill_named(
        &self,
        vertices: &[Vertex],
        algorithm: &str,
        seed: Option<Seed>,
    ) -> Result<FillResult> {
        let algorithm = algorithm.parse()?;
        self.fill(vertices, algorithm, seed)
    }

    /// Fill under this filler's own timeout, counted from the start of the
    /// algorithm.
    pub fn fill(
        &self,
        vertices: &[Vertex],
        algorithm: Algorithm,
        seed: Option<Seed>,
    ) -> Result<FillResult> {
        self.run(vertices, algorithm, seed, None)
    }

    /// Fill under a caller-supplied deadline, which may be cancelled from
    /// another thread.
    pub fn fill_with_deadline(
        &self,
        vertices: &[Vertex],
        algorithm: Algorithm,
        seed: Option<Seed>,
        deadline: &Deadline,
    ) -> Result<FillResult> {
        self.run(vertices, algorithm, seed, Some(deadline))
    }

    fn run(
        &self,
        vertices: &[Vertex],
        algorithm: Algorithm,
        seed: Option<Seed>,
        deadline: Option<&Deadline>,
    ) -> Result<FillResult> {
        validate_polygon(vertices)?;
        if seed.is_some() && algorithm != Algorithm::Flood {
            debug!("seed ignored by the {} algorithm", algorithm);
        }

        let mut grid = Grid::new(self.rows, self.cols)?;
        let own_deadline;
        let deadline = match deadline {
            Some(d) => d,
            None => {
                own_deadline = Deadline::from_timeout(self.timeout);
                &own_deadline
            }
        };

        let start = Instant::now();
        match algorithm {
            Algorithm::Fast => {
                fill_scanline(&mut grid, vertices, deadline)?;
            }
            Algorithm::Rourke => {
                fill_ray_cast(&mut grid, vertices, deadline)?;
            }
            Algorithm::Flood => {
                let seed = seed.map(|(r, c)| (r as i64, c as i64));
                fill_boundary_flood(&mut grid, vertices, seed, deadline)?;
            }
        }
        let elapsed = start.elapsed();

        info!(
            "{} fill of {} vertices took {:.6}s",
            algorithm,
            vertices.len(),
            elapsed.as_secs_f64()
        );
        Ok(FillResult {
            grid,
            elapsed,
            algorithm,
        })
    }
}

impl Default for Filler {
    fn default() -> Self {
        Self::from_config(&FillConfig::default())
    }
}

fn validate_polygon(vertices: &[Vertex]) -> Result<()> {
    if vertices.len() < MIN_VERTICES {
        return Err(FillError::InvalidPolygon(format!(
            "need at least {} vertices, got {}",
            MIN_VERTICES,
            vertices.len()
        )));
    }
    Ok(())
}

/// Fill `vertices` on the default grid with the algorithm named `algorithm`.
///
/// `seed` is only used by `flood`.
pub fn fill(vertices: &[Vertex], algorithm: &str, seed: Option<Seed>) -> Result<FillResult> {
    Filler::default().fill_named(vertices, algorithm, seed)
}

// ============================================================================
// Tests
// ============================================================================
