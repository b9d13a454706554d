// ticker.rs - Fixed-rate stepping for frame-driven hosts (e.g. an egui update loop)

use std::time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::engine::LifeEngine;

/// Steps an engine at most once per `interval`, and only while it is running.
///
/// The host calls [`Ticker::poll`] every frame. The clock is armed on the first
/// poll that sees the engine running and disarmed whenever it is seen idle, so
/// stopping before the first interval elapses never produces a step.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_update: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_update: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.update_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changing the rate does not move the last tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Returns `true` if a generation was computed.
    pub fn poll(&mut self, engine: &mut LifeEngine, now: Instant) -> bool {
        if !engine.is_running() {
            self.last_update = None;
            return false;
        }

        match self.last_update {
            None => {
                self.last_update = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                engine.step();
                self.last_update = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    /// Time left until the next step is due, or `None` when disarmed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.last_update
            .map(|last| self.interval.saturating_sub(now.saturating_duration_since(last)))
    }
}
