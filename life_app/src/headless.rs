// headless.rs - Runs a simulation on the tokio timer without opening a window

use log::info;

use life_engine::{Grid, LifeEngine, Simulation};

/// Runs until `generations` have been computed (or the engine halts itself) and
/// returns the generation reached with the final grid.
pub async fn run(engine: LifeEngine, generations: u64) -> (u64, Grid) {
    let mut sim = Simulation::new(engine);
    info!("running {} generations every {:?}", generations, sim.interval());

    if generations > 0 {
        sim.start().await;
        sim.wait_for_generation(generations).await;
        sim.stop().await;
    }

    let reached = sim.generation().await;
    let grid = sim.grid().await;
    info!("stopped at generation {} with {} live cells", reached, grid.live_cells());
    (reached, grid)
}
