//! # poly-fill
//!
//! Rasterizes a simple polygon onto a fixed-size binary grid with one of
//! three interchangeable fill algorithms and reports how long the fill took.
//!
//! - **`fast`** — edge-table scan-line fill
//! - **`rourke`** — ray-casting classification of every bounding-box cell
//! - **`flood`** — Bresenham boundary followed by a 4-connected flood fill
//!
//! ## Architecture
//!
//! 1. **Primitives** — Bresenham lines, point classification, flood propagation
//! 2. **Algorithms** — one module per fill strategy, writing into a [`Grid`]
//! 3. **Dispatcher** — [`Filler`] validates, allocates, times one algorithm
//! 4. **Service** — [`FillService`] bounds concurrent fills and enforces
//!    time limits
//!
//! ## Example
//!
//! ```no_run
//! let points = [(1, 1), (1, 5), (5, 5), (5, 1)];
//! let result = poly_fill::fill(&points, "fast", None)?;
//! assert!(result.grid.is_filled(3, 3));
//! println!("filled in {:.6}s", result.elapsed_secs());
//! # Ok::<(), poly_fill::FillError>(())
//! ```

#![forbid(unsafe_code)]

// Foundation
pub mod basics;
pub mod config;
pub mod deadline;
pub mod error;
pub mod grid;

// Primitives
pub mod bounding_rect;
pub mod flood_fill;
pub mod line_bresenham;
pub mod point_in_polygon;

// Fill algorithms
pub mod boundary_fill;
pub mod ray_cast_fill;
pub mod scanline_fill;

// Dispatch
pub mod dispatch;
pub mod service;

pub use basics::Vertex;
pub use config::FillConfig;
pub use deadline::Deadline;
pub use dispatch::{fill, Algorithm, FillResult, Filler, Seed};
pub use error::{ConfigError, FillError, RasterError, Result};
pub use grid::{Grid, GridDiff};
pub use point_in_polygon::Classification;
pub use service::{FillComparison, FillService};
