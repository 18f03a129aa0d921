//! Timed spawning, one spawner per category
//!
//! A spawner fires when its interval has passed since the last spawn and
//! its category is under the population cap. A spawner that has never
//! fired this round is ready immediately.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::catalog::{Archetype, Category};
use super::state::{Direction, SwimmingObject};
use crate::tuning::{FieldTuning, SpawnTuning};

/// Spawn timer for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub category: Category,
    /// Timestamp of the last spawn (None = not yet this round)
    pub last_spawn_ms: Option<u64>,
}

impl Spawner {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            last_spawn_ms: None,
        }
    }

    /// Interval elapsed and population below cap
    pub fn is_ready(&self, now_ms: u64, cadence: SpawnTuning, active: usize) -> bool {
        if active >= cadence.max_population {
            return false;
        }
        match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > cadence.interval_ms,
        }
    }

    /// Roll a new object just off the trailing edge and restart the timer.
    ///
    /// Returns None only for an empty catalog.
    pub fn spawn(
        &mut self,
        id: u32,
        catalog: &[Archetype],
        field: &FieldTuning,
        now_ms: u64,
        rng: &mut impl Rng,
    ) -> Option<SwimmingObject> {
        self.last_spawn_ms = Some(now_ms);

        let archetype = catalog.choose(rng)?.clone();
        let direction = if rng.random_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        };
        let x = match direction {
            Direction::Right => -archetype.width,
            Direction::Left => field.width,
        };
        let (band_top, band_bottom) = field.spawn_band();
        let y = if band_bottom > band_top {
            rng.random_range(band_top..band_bottom)
        } else {
            band_top
        };

        Some(SwimmingObject {
            id,
            pos: Vec2::new(x, y),
            size: archetype.size(),
            archetype,
            direction,
        })
    }
}
