//! Hook capture detection
//!
//! Plain AABB overlap between the hook and every active object. Fish are
//! tested before trash, each in spawn order, so ties always go to the
//! oldest fish.

use glam::Vec2;

use super::catalog::Category;
use super::state::{GameEvent, GameState, SwimmingObject};
use crate::boxes_overlap;

/// First object the hook box overlaps, as `(category, index into that set)`
pub fn find_capture(
    hook_pos: Vec2,
    hook_size: Vec2,
    fish: &[SwimmingObject],
    trash: &[SwimmingObject],
) -> Option<(Category, usize)> {
    let hit = |objects: &[SwimmingObject]| {
        objects
            .iter()
            .position(|o| boxes_overlap(hook_pos, hook_size, o.pos, o.size))
    };

    hit(fish)
        .map(|i| (Category::Beneficial, i))
        .or_else(|| hit(trash).map(|i| (Category::Hazard, i)))
}

/// Move the first overlapping object onto a dropping hook.
///
/// Does nothing unless the hook is dropping.
pub fn resolve_capture(state: &mut GameState) -> Option<GameEvent> {
    if !state.hook.is_dropping() {
        return None;
    }

    let (category, index) = find_capture(state.hook.pos, state.hook.size, &state.fish, &state.trash)?;
    let object = state.objects_mut(category).remove(index);
    debug_assert_eq!(object.category(), category);

    log::debug!(
        "Caught {} #{} ({:+} pts) at {:?}",
        object.archetype.name,
        object.id,
        object.points(),
        state.hook.pos
    );

    let event = GameEvent::Caught {
        id: object.id,
        category,
        points: object.points(),
    };
    state.hook.attach(object);
    Some(event)
}
