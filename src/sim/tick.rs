//! Per-frame simulation step
//!
//! Order within a frame: drift objects, move the hook (landing catches),
//! test for captures, spawn, then expire old score popups.

use glam::Vec2;
use rand::Rng;

use super::catalog::Category;
use super::collision::resolve_capture;
use super::hook::HookStep;
use super::motion::advance_objects;
use super::scoring::award;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the game state by one frame.
///
/// `now_ms` is the caller's monotonic clock; it drives spawn intervals and
/// popup lifetimes. Does nothing unless the round is in progress.
pub fn tick(state: &mut GameState, tuning: &Tuning, rng: &mut impl Rng, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_playing() {
        return events;
    }

    state.time_ticks += 1;

    // Drift fish and trash
    let field_width = tuning.field.width;
    let gone = advance_objects(&mut state.fish, field_width) + advance_objects(&mut state.trash, field_width);
    if gone > 0 {
        log::trace!("{gone} objects swam off the field");
    }

    // Hook
    match state.hook.step(&tuning.hook, tuning.field.height) {
        HookStep::Surfaced { catch: Some(catch) } => {
            let points = catch.points();
            let origin = Vec2::new(state.hook.pos.x, tuning.hook.launch_y);
            let raised = award(state, points, origin, now_ms);
            log::debug!("Landed {} for {:+}, score {}", catch.archetype.name, points, state.score);
            events.push(GameEvent::Landed {
                points,
                score: state.score,
            });
            if raised {
                events.push(GameEvent::HighScore(state.high_score));
            }
        }
        HookStep::Bottomed => events.push(GameEvent::Missed),
        HookStep::Surfaced { catch: None } | HookStep::Moved | HookStep::Resting => {}
    }

    // Capture
    if let Some(event) = resolve_capture(state) {
        events.push(event);
    }

    spawn_objects(state, tuning, rng, now_ms, &mut events);

    state.feedback.retain(|f| !f.is_expired(now_ms));

    events
}

/// Run both spawners
fn spawn_objects(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut impl Rng,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) {
    for category in [Category::Beneficial, Category::Hazard] {
        let (cadence, catalog) = tuning.category(category);
        let active = state.objects(category).len();
        if !state.spawner_mut(category).is_ready(now_ms, cadence, active) {
            continue;
        }

        let id = state.next_entity_id();
        let spawned = state
            .spawner_mut(category)
            .spawn(id, catalog, &tuning.field, now_ms, rng);
        if let Some(object) = spawned {
            log::debug!(
                "Spawned {} #{} heading {:?} at y={:.0}",
                object.archetype.name,
                id,
                object.direction,
                object.pos.y
            );
            state.objects_mut(category).push(object);
            events.push(GameEvent::Spawned { id, category });
        }
    }
}
