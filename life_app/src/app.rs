// app.rs - Viewer state: one engine, its ticker and display settings

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use egui::Color32;
use log::debug;

use life_engine::{EngineConfig, LifeEngine, LifeError, Ticker, PATTERNS};

pub struct LifeApp {
    pub engine: LifeEngine,
    pub ticker: Ticker,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u64,
}

impl LifeApp {
    pub fn new(engine: LifeEngine) -> Self {
        let ticker = Ticker::from_config(engine.config());
        let random_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self {
            engine,
            ticker,
            live_color: Color32::from_rgb(0x59, 0xff, 0xa0),
            dead_color: Color32::from_rgb(0xb4, 0xad, 0xea),
            selected_pattern: 0,
            random_seed,
        }
    }

    /// Called once per frame before drawing.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.ticker.poll(&mut self.engine, now)
    }

    pub fn toggle_running(&mut self) {
        if self.engine.is_running() {
            self.engine.stop();
        } else {
            self.engine.start();
        }
    }

    /// Click on a cell. Clicks while running are ignored.
    pub fn click_cell(&mut self, row: usize, col: usize) {
        match self.engine.toggle_cell(row, col) {
            Ok(()) => {}
            Err(LifeError::SimulationRunning) => debug!("ignoring click at ({}, {}) while running", row, col),
            Err(err) => log::warn!("{}", err),
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.engine.load_pattern(pattern);
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        self.engine.randomize(self.random_seed);
    }
}

impl Default for LifeApp {
    fn default() -> Self {
        Self::new(LifeEngine::default())
    }
}

/// Builds the engine the app starts with.
pub fn initial_engine(config: EngineConfig, pattern: Option<&str>) -> Result<LifeEngine, LifeError> {
    let mut engine = LifeEngine::new(config)?;
    if let Some(name) = pattern {
        match life_engine::patterns::find(name) {
            Some(pattern) => engine.load_pattern(pattern),
            None => log::warn!("unknown pattern {:?}, starting empty", name),
        }
    }
    Ok(engine)
}
