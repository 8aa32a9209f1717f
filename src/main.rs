//! Headless demo runner
//!
//! Drives the engine from a coarse sleep loop with a scripted "hug the
//! walls" input feed and logs the run. Real hosts (the portal page, a
//! terminal frontend) drive `tick` from their own schedulers; this binary
//! exists to exercise the crate end to end on native targets.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use grid_snake::{Config, Direction, FileScoreStore, SnakeEngine, Status};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let store = FileScoreStore::new("snake_highscore.json");
    let mut engine = SnakeEngine::new(Config::default(), seed, store);

    log::info!("grid-snake headless demo (seed {seed})");
    log::info!("stored best: {}", engine.state().high_score);

    engine.start();

    // Circle the board clockwise: turn whenever the head nears an edge.
    let grid = engine.config().grid_size;
    let mut last = Instant::now();
    // The scripted pilot circles forever on an empty board, so cap the run.
    while engine.state().status == Status::Running && engine.state().time_ticks < 2_000 {
        std::thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_millis() as u32;
        last = now;

        let head = engine.state().head();
        let turn = match engine.state().direction {
            Direction::Right if head.x >= grid - 2 => Some(Direction::Down),
            Direction::Down if head.y >= grid - 2 => Some(Direction::Left),
            Direction::Left if head.x <= 1 => Some(Direction::Up),
            Direction::Up if head.y <= 1 => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = turn {
            engine.queue_direction(direction);
        }

        engine.tick(elapsed_ms);
    }

    let state = engine.state();
    log::info!(
        "run over after {} ticks: score {}, length {}, best {}",
        state.time_ticks,
        state.score,
        state.len(),
        state.high_score
    );
    println!(
        "score {} / best {} ({} ticks)",
        state.score, state.high_score, state.time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm host page drives the engine directly through the library.
}
