// lib.rs - Conway's Game of Life engine with pluggable schedulers

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod simulation;
pub mod ticker;

pub use config::EngineConfig;
pub use engine::{LifeEngine, RunState, Snapshot};
pub use error::{LifeError, Result};
pub use grid::{BoundaryMode, Grid};
pub use patterns::{Pattern, PATTERNS};
pub use simulation::Simulation;
pub use ticker::Ticker;
