//! Horizontal drift for everything swimming across the field

use super::state::SwimmingObject;

/// Move every object one frame and drop the ones that left the field.
///
/// Returns how many were despawned.
pub fn advance_objects(objects: &mut Vec<SwimmingObject>, field_width: f32) -> usize {
    let before = objects.len();
    objects.retain_mut(|object| {
        object.advance();
        !object.is_off_field(field_width)
    });
    before - objects.len()
}
