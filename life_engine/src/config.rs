// config.rs - Construction-time settings for an engine

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::grid::{BoundaryMode, DEFAULT_COLS, DEFAULT_ROWS};

pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 100;

/// Upper bound on `rows * cols`.
pub const MAX_CELLS: usize = 1 << 24;

/// Settings fixed when an engine is built. Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between scheduled steps while running.
    pub update_interval_ms: u64,
    pub boundary_mode: BoundaryMode,
    /// Drop back to idle when a step produces a grid seen in the last few generations.
    pub halt_on_cycle: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            boundary_mode: BoundaryMode::default(),
            halt_on_cycle: false,
        }
    }
}

impl EngineConfig {
    pub fn new(rows: usize, cols: usize, boundary_mode: BoundaryMode) -> Self {
        Self {
            rows,
            cols,
            boundary_mode,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(LifeError::InvalidConfig("rows must be greater than zero"));
        }
        if self.cols == 0 {
            return Err(LifeError::InvalidConfig("cols must be greater than zero"));
        }
        match self.rows.checked_mul(self.cols) {
            None => return Err(LifeError::InvalidConfig("rows * cols overflows")),
            Some(cells) if cells > MAX_CELLS => {
                return Err(LifeError::InvalidConfig("rows * cols exceeds the cell limit"));
            }
            Some(_) => {}
        }
        if self.update_interval_ms == 0 {
            return Err(LifeError::InvalidConfig("update_interval_ms must be greater than zero"));
        }
        Ok(())
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
