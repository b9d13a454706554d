// main.rs - Desktop viewer and headless runner for the Game of Life engine

use eframe::egui;

mod app;
mod cli;
mod headless;
mod ui;

use app::LifeApp;
use cli::{AppError, Options};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let options = Options::parse(std::env::args().skip(1))?;
    if options.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }
    cli::init_logger(options.log_level);

    let config = options.load_config()?;
    let mut engine = app::initial_engine(config, options.pattern.as_deref())?;

    if let Some(generations) = options.headless {
        if options.pattern.is_none() {
            engine.randomize(options.seed);
        }
        let runtime = tokio::runtime::Runtime::new()?;
        let (reached, grid) = runtime.block_on(headless::run(engine, generations));
        println!("Generation: {}\n{}", reached, grid);
        return Ok(());
    }

    let (rows, cols) = engine.grid().dimensions();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(cols as f32 * 21.0 + 40.0).max(760.0), rows as f32 * 21.0 + 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(engine))),
    )?;
    Ok(())
}
