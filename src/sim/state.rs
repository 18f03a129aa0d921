//! Game state and core simulation types
//!
//! Everything the renderer reads each frame lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::{Archetype, Category};
use super::hook::Hook;
use super::spawn::Spawner;
use crate::consts::FEEDBACK_LIFETIME_MS;
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the first start
    Ready,
    /// Round in progress
    Playing,
    /// Clock ran out
    GameOver,
}

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A fish or piece of trash crossing the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimmingObject {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub archetype: Archetype,
    pub direction: Direction,
}

impl SwimmingObject {
    #[inline]
    pub fn category(&self) -> Category {
        self.archetype.category
    }

    #[inline]
    pub fn points(&self) -> i64 {
        self.archetype.points
    }

    /// Move one frame along the travel direction
    pub fn advance(&mut self) {
        self.pos.x += self.direction.sign() * self.archetype.speed;
    }

    /// Fully off the field on either side
    pub fn is_off_field(&self, field_width: f32) -> bool {
        self.pos.x > field_width || self.pos.x < -self.size.x
    }
}

/// Color hint for a floating score label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTone {
    Positive,
    Negative,
}

/// Floating "+50" style label shown where a catch was landed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub pos: Vec2,
    pub label: String,
    pub created_ms: u64,
}

impl FeedbackEvent {
    pub fn tone(&self) -> FeedbackTone {
        if self.label.starts_with('-') {
            FeedbackTone::Negative
        } else {
            FeedbackTone::Positive
        }
    }

    /// Older than the display lifetime
    #[inline]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_ms) >= FEEDBACK_LIFETIME_MS
    }
}

/// Simulation notifications, returned from tick for the session and UI
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new object entered the field
    Spawned { id: u32, category: Category },
    /// The hook grabbed an object
    Caught { id: u32, category: Category, points: i64 },
    /// Hook hit the bottom without a catch
    Missed,
    /// A catch reached the surface and was scored
    Landed { points: i64, score: i64 },
    /// The high score went up
    HighScore(i64),
    /// Round clock ran out
    RoundOver { score: i64 },
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Round score (can go negative)
    pub score: i64,
    /// Best score this process has seen, seeded from storage
    pub high_score: i64,
    pub remaining_seconds: u32,
    pub hook: Hook,
    /// Beneficial objects in spawn order
    pub fish: Vec<SwimmingObject>,
    /// Hazard objects in spawn order
    pub trash: Vec<SwimmingObject>,
    /// Floating score labels, oldest first
    pub feedback: Vec<FeedbackEvent>,
    pub fish_spawner: Spawner,
    pub trash_spawner: Spawner,
    /// Frames simulated this round
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state in the Ready status
    pub fn new(tuning: &Tuning, high_score: i64) -> Self {
        Self {
            status: GameStatus::Ready,
            score: 0,
            high_score: high_score.max(0),
            remaining_seconds: tuning.round_seconds,
            hook: Hook::at_launch(&tuning.hook),
            fish: Vec::new(),
            trash: Vec::new(),
            feedback: Vec::new(),
            fish_spawner: Spawner::new(Category::Beneficial),
            trash_spawner: Spawner::new(Category::Hazard),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Clear everything but the high score and begin playing
    pub fn reset_round(&mut self, tuning: &Tuning) {
        let high_score = self.high_score;
        *self = Self::new(tuning, high_score);
        self.status = GameStatus::Playing;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Active set for a category
    pub fn objects(&self, category: Category) -> &[SwimmingObject] {
        match category {
            Category::Beneficial => &self.fish,
            Category::Hazard => &self.trash,
        }
    }

    pub fn objects_mut(&mut self, category: Category) -> &mut Vec<SwimmingObject> {
        match category {
            Category::Beneficial => &mut self.fish,
            Category::Hazard => &mut self.trash,
        }
    }

    pub fn spawner_mut(&mut self, category: Category) -> &mut Spawner {
        match category {
            Category::Beneficial => &mut self.fish_spawner,
            Category::Hazard => &mut self.trash_spawner,
        }
    }

    /// Fish then trash, in spawn order
    pub fn active_objects(&self) -> impl Iterator<Item = &SwimmingObject> {
        self.fish.iter().chain(self.trash.iter())
    }

    /// Score popups still on screen at `now_ms`.
    ///
    /// Ticks stop at game over, so renderers filter through this rather
    /// than reading `feedback` directly.
    pub fn live_feedback(&self, now_ms: u64) -> impl Iterator<Item = &FeedbackEvent> {
        self.feedback.iter().filter(move |f| !f.is_expired(now_ms))
    }

    /// Game-over banner condition
    pub fn is_new_high_score(&self) -> bool {
        self.score > 0 && self.score >= self.high_score
    }
}
