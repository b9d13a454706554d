// error.rs - Errors surfaced by the engine and its configuration

use thiserror::Error;

/// Errors returned by [`crate::LifeEngine`] and [`crate::EngineConfig`].
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Cells can only be edited while the simulation is idle.
    #[error("cannot edit cells while the simulation is running")]
    SimulationRunning,

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid grid text: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
