//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in from the caller, never read from the system
//! - Seeded RNG only
//! - Stable iteration order (spawn order within each set)
//! - No rendering, storage or platform dependencies

pub mod catalog;
pub mod clock;
pub mod collision;
pub mod hook;
pub mod motion;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catalog::{Archetype, Category};
pub use clock::clock_tick;
pub use collision::{find_capture, resolve_capture};
pub use hook::{Hook, HookState, HookStep};
pub use scoring::{award, format_points};
pub use spawn::Spawner;
pub use state::{
    Direction, FeedbackEvent, FeedbackTone, GameEvent, GameState, GameStatus, SwimmingObject,
};
pub use tick::tick;
