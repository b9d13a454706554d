use life_engine::*;
use pretty_assertions::assert_eq;

fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

fn step_once(text: &str, mode: BoundaryMode) -> Grid {
    grid(text).next_generation(mode)
}

/// Engine preloaded with `text` through `toggle_cell`.
fn engine_with(text: &str, mode: BoundaryMode) -> LifeEngine {
    let start = grid(text);
    let (rows, cols) = start.dimensions();
    let mut engine = LifeEngine::new(EngineConfig::new(rows, cols, mode)).unwrap();
    for (row, col) in start.live_positions() {
        engine.toggle_cell(row, col).unwrap();
    }
    engine
}

#[test]
fn dead_grid_stays_dead() {
    for mode in [BoundaryMode::Clamped, BoundaryMode::Wrapped] {
        let mut engine = LifeEngine::new(EngineConfig::new(7, 9, mode)).unwrap();
        engine.step();
        assert!(engine.grid().is_empty());
        assert_eq!(engine.generation(), 1);
    }
}

#[test]
fn lonely_cell_dies() {
    let next = step_once("
        .....
        .....
        ..#..
        .....
        .....
    ", BoundaryMode::Wrapped);
    assert!(next.is_empty());
}

#[test]
fn survival_with_two_or_three_neighbours() {
    // Centre has two neighbours.
    let next = step_once("
        .....
        .#...
        ..#..
        ...#.
        .....
    ", BoundaryMode::Clamped);
    assert!(next.is_alive(2, 2));

    // Centre has three neighbours.
    let next = step_once("
        .....
        .#.#.
        ..#..
        ...#.
        .....
    ", BoundaryMode::Clamped);
    assert!(next.is_alive(2, 2));
}

#[test]
fn overpopulation_kills() {
    let next = step_once("
        .....
        .###.
        ..#..
        ...#.
        .....
    ", BoundaryMode::Clamped);
    assert!(!next.is_alive(2, 2));
}

#[test]
fn birth_needs_exactly_three() {
    for live in 0..=8 {
        let mut text = String::new();
        let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        for row in 0..5 {
            for col in 0..5 {
                let alive = row >= 1 && row <= 3 && col >= 1 && col <= 3
                    && ring[..live].contains(&(row - 1, col - 1));
                text.push(if alive { '#' } else { '.' });
            }
            text.push('\n');
        }
        let next = step_once(&text, BoundaryMode::Clamped);
        assert_eq!(next.is_alive(2, 2), live == 3, "live neighbours = {}", live);
    }
}

#[test]
fn step_is_deterministic() {
    let text = "
        .#..#.
        ##..#.
        ...##.
        #.....
        .#.#.#
    ";
    for mode in [BoundaryMode::Clamped, BoundaryMode::Wrapped] {
        let mut a = engine_with(text, mode);
        let mut b = engine_with(text, mode);
        a.step();
        b.step();
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn boundary_modes_differ_at_corners() {
    let text = "
        #.#
        ...
        ..#
    ";
    // (0,0) and (0,2) plus (2,2) are mutual neighbours only on a torus.
    let clamped = step_once(text, BoundaryMode::Clamped);
    let wrapped = step_once(text, BoundaryMode::Wrapped);

    assert!(!clamped.is_alive(0, 0));
    assert!(wrapped.is_alive(0, 0));
    assert!(clamped != wrapped);
}

#[test]
fn vertical_blinker_turns_horizontal() {
    let mut engine = engine_with("
        .#.
        .#.
        .#.
    ", BoundaryMode::Clamped);

    engine.step();

    assert_eq!(engine.grid(), &grid("
        ...
        ###
        ...
    "));
    assert_eq!(engine.generation(), 1);
}

#[test]
fn glider_travels_across_a_torus() {
    let mut engine = LifeEngine::new(EngineConfig::new(8, 8, BoundaryMode::Wrapped)).unwrap();
    engine.load_pattern(patterns::find("Glider").unwrap());
    let start: Vec<_> = engine.grid().live_positions().collect();

    for _ in 0..4 {
        engine.step();
    }
    let moved: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(engine.grid().live_positions().collect::<Vec<_>>(), moved);

    // 8 cells of travel brings it home.
    for _ in 0..28 {
        engine.step();
    }
    assert_eq!(engine.grid().live_positions().collect::<Vec<_>>(), start);
    assert_eq!(engine.generation(), 32);
}

#[test]
fn block_in_a_clamped_corner_is_still() {
    let text = "
        ##..
        ##..
        ....
        ....
    ";
    let mut engine = engine_with(text, BoundaryMode::Clamped);
    for _ in 0..5 {
        engine.step();
    }
    assert_eq!(engine.grid(), &grid(text));
}

#[test]
fn reset_always_returns_to_empty_idle() {
    let mut engine = engine_with("
        .#.
        .#.
        .#.
    ", BoundaryMode::Wrapped);
    engine.start();
    engine.step();
    engine.reset();

    let snap = engine.snapshot();
    assert_eq!(snap.generation, 0);
    assert_eq!(snap.run_state, RunState::Idle);
    assert_eq!(snap.grid, &Grid::new(3, 3));
}

#[test]
fn start_stop_without_tick_changes_nothing() {
    let mut engine = engine_with("
        .#.
        .#.
        .#.
    ", BoundaryMode::Clamped);
    let before = engine.grid().clone();

    engine.start();
    engine.stop();

    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.run_state(), RunState::Idle);
}
