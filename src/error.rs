//! Error types for polygon filling.

use std::time::Duration;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FillError>;

/// Errors that can occur while filling a polygon.
///
/// Every failure is returned to the caller. Wrapped failures keep their
/// originating cause reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FillError {
    /// The algorithm name is not one of `fast`, `rourke` or `flood`.
    #[error("invalid algorithm {0:?}, pick one of: rourke, flood, fast")]
    InvalidAlgorithm(String),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Internal failure while computing the fill. No grid is returned.
    #[error("rasterization failed")]
    Rasterization {
        #[source]
        source: RasterError,
    },

    /// An explicit flood seed lies outside the grid.
    #[error("seed ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// The fill ran past its deadline or was cancelled.
    #[error("fill aborted after {elapsed:?}")]
    TimedOut { elapsed: Duration },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Low-level rasterization faults, carried as the source of
/// [`FillError::Rasterization`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RasterError {
    #[error("grid of {rows}x{cols} cells does not fit in memory")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("worker pool failed: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Problems reading or validating a [`FillConfig`](crate::FillConfig).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}

impl From<RasterError> for FillError {
    fn from(source: RasterError) -> Self {
        FillError::Rasterization { source }
    }
}
