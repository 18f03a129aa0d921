//! Reel Frenzy entry point
//!
//! Native build runs a headless demo round: the hook is recast every time
//! it comes back up, and the result is logged. Pass a tuning JSON path as
//! the first argument to try different balance values.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use reel_frenzy::consts::FRAME_MS;
    use reel_frenzy::platform::{FrameDriver, InputEvent};
    use reel_frenzy::sim::{GameEvent, GameStatus};
    use reel_frenzy::{FileStore, GameSession, HighScoreStore, MemoryStore, Tuning};

    env_logger::init();
    log::info!("Reel Frenzy (native demo) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(Path::new(&path)).unwrap_or_else(|e| {
            log::warn!("{e}; falling back to default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let store: Box<dyn HighScoreStore> = match FileStore::default_location() {
        Some(store) => {
            log::info!("High score file: {}", store.path().display());
            Box::new(store)
        }
        None => {
            log::warn!("No user data directory, high score will not be kept");
            Box::new(MemoryStore::new())
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut session = GameSession::new(tuning, store, seed);
    let mut driver = FrameDriver::new();
    session.handle(InputEvent::CastKey);

    let (mut catches, mut misses) = (0u32, 0u32);
    while session.status() == GameStatus::Playing {
        if session.snapshot().hook.is_idle() {
            session.handle(InputEvent::CastKey);
        }
        for event in driver.advance(&mut session, FRAME_MS).events {
            match event {
                GameEvent::Landed { .. } => catches += 1,
                GameEvent::Missed => misses += 1,
                _ => {}
            }
        }
    }

    let state = session.snapshot();
    println!(
        "Final score: {}  (best {}){}",
        state.score,
        state.high_score,
        if state.is_new_high_score() { "  New High Score!" } else { "" }
    );
    println!("Landed {catches} catches, {misses} empty casts");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive GameSession directly
}
