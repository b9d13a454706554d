// engine.rs - Game of Life state machine: grid, generation counter and run state

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{debug, info, trace};

use crate::config::EngineConfig;
use crate::error::{LifeError, Result};
use crate::grid::{BoundaryMode, Grid};
use crate::patterns::{self, Pattern};

const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    pub run_state: RunState,
}

/// Owns one simulation. Stepping on a timer is left to a scheduler
/// ([`crate::Ticker`] or [`crate::Simulation`]) which reads [`LifeEngine::run_state`]
/// before every tick.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    config: EngineConfig,
    grid: Grid,
    next_grid: Grid,
    generation: u64,
    run_state: RunState,
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl LifeEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        Self {
            config,
            next_grid: grid.clone(),
            grid,
            generation: 0,
            run_state: RunState::Idle,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn boundary_mode(&self) -> BoundaryMode {
        self.config.boundary_mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn live_cells(&self) -> usize {
        self.grid.live_cells()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            generation: self.generation,
            run_state: self.run_state,
        }
    }

    /// Flips one cell. Only allowed while idle; nothing changes on error.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        if !self.grid.contains(row, col) {
            return Err(LifeError::InvalidIndex {
                row,
                col,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }
        if self.is_running() {
            return Err(LifeError::SimulationRunning);
        }

        self.grid.toggle(row, col);
        self.clear_history();
        Ok(())
    }

    /// Advances one generation. Every cell is computed from the previous grid.
    pub fn step(&mut self) {
        self.grid.next_generation_into(self.config.boundary_mode, &mut self.next_grid);
        std::mem::swap(&mut self.grid, &mut self.next_grid);
        self.generation += 1;
        trace!("generation {} ({} live)", self.generation, self.grid.live_cells());

        if self.config.halt_on_cycle && self.check_for_cycle() && self.is_running() {
            info!("grid repeated at generation {}, stopping", self.generation);
            self.run_state = RunState::Idle;
        }
    }

    /// Idempotent.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        debug!("start at generation {}", self.generation);
        self.run_state = RunState::Running;
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("stop at generation {}", self.generation);
        }
        self.run_state = RunState::Idle;
    }

    /// Clears the grid, zeroes the generation and goes idle.
    pub fn reset(&mut self) {
        debug!("reset");
        self.grid.clear();
        self.generation = 0;
        self.run_state = RunState::Idle;
        self.clear_history();
    }

    /// Stops, clears and places `pattern` in the centre of the grid.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.reset();
        patterns::apply_pattern(&mut self.grid, pattern);
        debug!("loaded {} ({} live)", pattern.name, self.grid.live_cells());
    }

    /// Stops and refills the grid from `seed`.
    pub fn randomize(&mut self, seed: u64) {
        self.reset();
        patterns::apply_random_pattern(&mut self.grid, seed);
        debug!("randomized with seed {} ({} live)", seed, self.grid.live_cells());
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Records the current grid and reports whether it was seen in the recent history.
    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..seen].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    fn clear_history(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}
