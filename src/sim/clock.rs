//! One-second round countdown

use super::state::{GameEvent, GameStatus, GameState};

/// Count down one second. Ends the round at zero.
///
/// No-op unless the round is in progress, so a timer that fires late
/// after game over changes nothing.
pub fn clock_tick(state: &mut GameState) -> Option<GameEvent> {
    if state.status != GameStatus::Playing {
        return None;
    }

    state.remaining_seconds = state.remaining_seconds.saturating_sub(1);
    if state.remaining_seconds > 0 {
        return None;
    }

    state.status = GameStatus::GameOver;
    log::info!(
        "Round over: score {} (best {})",
        state.score,
        state.high_score
    );
    Some(GameEvent::RoundOver { score: state.score })
}
