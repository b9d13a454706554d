// simulation.rs - Tokio timer that drives one engine while it is running

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::engine::{LifeEngine, RunState};
use crate::error::Result;
use crate::grid::Grid;

/// Owns an engine plus at most one background stepping task.
///
/// The task ticks every `interval` (first tick one interval after `start`) and
/// re-reads the run state under the lock before each step, so once `stop` or
/// `reset` returns no further generation is computed.
pub struct Simulation {
    engine: Arc<Mutex<LifeEngine>>,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl Simulation {
    pub fn new(engine: LifeEngine) -> Self {
        let interval = engine.config().update_interval();
        Self {
            engine: Arc::new(Mutex::new(engine)),
            interval,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Shared handle for readers. Calling `start` through it does not spawn a task.
    pub fn engine(&self) -> Arc<Mutex<LifeEngine>> {
        Arc::clone(&self.engine)
    }

    /// Idempotent: a second call while running keeps the existing task.
    pub async fn start(&mut self) {
        let was_running = {
            let mut engine = self.engine.lock().await;
            let was_running = engine.is_running();
            engine.start();
            was_running
        };

        let task_alive = self.task.as_ref().is_some_and(|task| !task.is_finished());
        if was_running && task_alive {
            return;
        }

        self.abort_task();
        debug!("spawning stepping task every {:?}", self.interval);
        self.task = Some(tokio::spawn(run_ticks(self.engine(), self.interval)));
    }

    pub async fn stop(&mut self) {
        self.engine.lock().await.stop();
        self.abort_task();
    }

    pub async fn reset(&mut self) {
        self.engine.lock().await.reset();
        self.abort_task();
    }

    pub async fn toggle_cell(&self, row: usize, col: usize) -> Result<()> {
        self.engine.lock().await.toggle_cell(row, col)
    }

    /// Manual single step, independent of the timer.
    pub async fn step(&self) {
        self.engine.lock().await.step();
    }

    pub async fn generation(&self) -> u64 {
        self.engine.lock().await.generation()
    }

    pub async fn run_state(&self) -> RunState {
        self.engine.lock().await.run_state()
    }

    /// Copy of the current grid.
    pub async fn grid(&self) -> Grid {
        self.engine.lock().await.grid().clone()
    }

    /// Waits until the engine reaches `generation` or stops running.
    pub async fn wait_for_generation(&self, generation: u64) -> u64 {
        loop {
            {
                let engine = self.engine.lock().await;
                if engine.generation() >= generation || !engine.is_running() {
                    return engine.generation();
                }
            }
            time::sleep(self.interval).await;
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("aborting stepping task");
            task.abort();
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.abort_task();
    }
}

async fn run_ticks(engine: Arc<Mutex<LifeEngine>>, period: Duration) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    loop {
        interval.tick().await;

        let mut engine = engine.lock().await;
        if !engine.is_running() {
            break;
        }
        engine.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::grid::BoundaryMode;
    use crate::patterns;
    use crate::error::LifeError;

    fn simulation() -> Simulation {
        let config = EngineConfig {
            update_interval_ms: 100,
            ..EngineConfig::new(5, 5, BoundaryMode::Clamped)
        };
        let mut engine = LifeEngine::new(config).unwrap();
        engine.load_pattern(patterns::find("Blinker").unwrap());
        Simulation::new(engine)
    }

    #[tokio::test(start_paused = true)]
    async fn steps_once_per_interval_while_running() {
        let mut sim = simulation();
        sim.start().await;
        time::sleep(Duration::from_millis(350)).await;
        sim.stop().await;

        assert_eq!(sim.generation().await, 3);
        assert_eq!(sim.run_state().await, RunState::Idle);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(sim.generation().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn start_then_stop_before_first_tick() {
        let mut sim = simulation();
        let before = sim.grid().await;

        sim.start().await;
        sim.stop().await;
        time::sleep(Duration::from_millis(1_000)).await;

        assert_eq!(sim.generation().await, 0);
        assert_eq!(sim.grid().await, before);
        assert_eq!(sim.run_state().await, RunState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_does_not_double_the_rate() {
        let mut sim = simulation();
        sim.start().await;
        sim.start().await;
        time::sleep(Duration::from_millis(250)).await;
        sim.start().await;
        time::sleep(Duration::from_millis(100)).await;
        sim.stop().await;

        assert_eq!(sim.generation().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_pending_ticks() {
        let mut sim = simulation();
        sim.start().await;
        time::sleep(Duration::from_millis(150)).await;
        assert_eq!(sim.generation().await, 1);

        sim.reset().await;
        time::sleep(Duration::from_millis(300)).await;

        assert_eq!(sim.generation().await, 0);
        assert!(sim.grid().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop_resumes_stepping() {
        let mut sim = simulation();
        sim.start().await;
        time::sleep(Duration::from_millis(150)).await;
        sim.stop().await;
        sim.start().await;
        assert!(sim.wait_for_generation(4).await >= 4);
        assert_eq!(sim.run_state().await, RunState::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_step_works_without_the_timer() {
        let sim = simulation();
        sim.step().await;
        assert_eq!(sim.generation().await, 1);
        assert_eq!(sim.run_state().await, RunState::Idle);
        assert_eq!(sim.grid().await.to_string(), ".....\n..#..\n..#..\n..#..\n.....");

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(sim.generation().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn toggling_requires_idle() {
        let mut sim = simulation();
        sim.start().await;
        assert!(matches!(sim.toggle_cell(0, 0).await, Err(LifeError::SimulationRunning)));
        sim.stop().await;
        assert!(sim.toggle_cell(0, 0).await.is_ok());
    }
}
