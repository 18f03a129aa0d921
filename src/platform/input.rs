//! Input mapping
//!
//! The cast key doubles as the start key whenever no round is running.
//! Pointer clicks only ever cast; starting from the overlay goes through
//! its own button.

use crate::sim::GameStatus;

/// Raw input the platform layer reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Space bar (or whatever the platform binds to cast)
    CastKey,
    /// Click or tap on the play field
    PointerClick,
}

/// What the player wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Cast,
}

/// Map an input to an intent for the current status
pub fn intent_for(status: GameStatus, event: InputEvent) -> Option<Intent> {
    match (event, status) {
        (InputEvent::CastKey, GameStatus::Playing) => Some(Intent::Cast),
        (InputEvent::CastKey, GameStatus::Ready | GameStatus::GameOver) => Some(Intent::Start),
        (InputEvent::PointerClick, GameStatus::Playing) => Some(Intent::Cast),
        (InputEvent::PointerClick, _) => None,
    }
}
