//! Fill configuration.
//!
//! The grid shape is fixed per deployment rather than per request; it lives
//! here together with the admission limit and the per-fill time budget.
//! Every field has a default, so a config file only needs the values it
//! overrides.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default grid height in cells.
pub const DEFAULT_ROWS: usize = 19_200;
/// Default grid width in cells.
pub const DEFAULT_COLS: usize = 10_800;
/// Default number of fills allowed to run at once.
pub const DEFAULT_MAX_CONCURRENT_FILLS: usize = 2;
/// Default time budget of one fill, in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Worker count of the fill service; bounds live grids at one per worker.
    pub max_concurrent_fills: usize,
    /// Time budget of a single fill in seconds. `null` disables the limit.
    pub timeout_secs: Option<f64>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_concurrent_fills: DEFAULT_MAX_CONCURRENT_FILLS,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FillConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FillConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.max_concurrent_fills == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_fills must be at least 1".into(),
            ));
        }
        if let Some(secs) = self.timeout_secs {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "timeout_secs must be a positive number, got {}",
                    secs
                )));
            }
        }
        Ok(())
    }

    /// Per-fill time budget; invalid values read as no limit.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}
