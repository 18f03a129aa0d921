//! Score bookkeeping for landed catches

use glam::Vec2;

use super::state::{FeedbackEvent, GameState};

/// Label for a floating score popup: `+50`, `+0`, `-25`
pub fn format_points(points: i64) -> String {
    if points >= 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}

/// Apply a landed catch's points and spawn its popup.
///
/// There is no floor: trash can push the score below zero. The sum
/// saturates at the `i64` range. Returns true when the high score went up
/// (the caller persists it).
pub fn award(state: &mut GameState, points: i64, origin: Vec2, now_ms: u64) -> bool {
    state.score = state.score.saturating_add(points);

    let raised = state.score > state.high_score;
    if raised {
        state.high_score = state.score;
    }

    state.feedback.push(FeedbackEvent {
        pos: origin,
        label: format_points(points),
        created_ms: now_ms,
    });

    raised
}
