//! Hook state machine
//!
//! `Idle --cast--> Dropping --catch or bottom--> Reeling --surface--> Idle`.
//! The caught object lives inside the `Reeling` variant, so a catch can
//! only exist while reeling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::SwimmingObject;
use crate::tuning::HookTuning;

/// Hook phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HookState {
    /// Resting at the launch point
    Idle,
    /// Sinking, can catch things
    Dropping,
    /// Rising back to the boat, optionally dragging a catch
    Reeling { caught: Option<SwimmingObject> },
}

/// What a single hook step did
#[derive(Debug, Clone, PartialEq)]
pub enum HookStep {
    /// Nothing to do
    Resting,
    /// Moved, no transition
    Moved,
    /// Passed the field bottom and started reeling in empty
    Bottomed,
    /// Arrived back at the launch point; carries whatever was caught
    Surfaced { catch: Option<SwimmingObject> },
}

/// The player's hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub state: HookState,
}

impl Hook {
    pub fn at_launch(tuning: &HookTuning) -> Self {
        Self {
            pos: Vec2::new(tuning.launch_x, tuning.launch_y),
            size: Vec2::new(tuning.width, tuning.height),
            state: HookState::Idle,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == HookState::Idle
    }

    #[inline]
    pub fn is_dropping(&self) -> bool {
        self.state == HookState::Dropping
    }

    /// Object currently on the hook
    pub fn caught(&self) -> Option<&SwimmingObject> {
        match &self.state {
            HookState::Reeling { caught } => caught.as_ref(),
            _ => None,
        }
    }

    /// Start dropping. Returns false (and does nothing) unless idle.
    pub fn cast(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = HookState::Dropping;
        true
    }

    /// Take ownership of a caught object and start reeling
    pub fn attach(&mut self, mut object: SwimmingObject) {
        debug_assert!(self.is_dropping(), "attach while {:?}", self.state);
        object.pos.y = self.pos.y;
        self.state = HookState::Reeling {
            caught: Some(object),
        };
    }

    /// Advance one frame
    pub fn step(&mut self, tuning: &HookTuning, field_height: f32) -> HookStep {
        match self.state {
            HookState::Idle => HookStep::Resting,
            HookState::Dropping => {
                self.pos.y += tuning.drop_speed;
                if self.pos.y > field_height {
                    self.state = HookState::Reeling { caught: None };
                    HookStep::Bottomed
                } else {
                    HookStep::Moved
                }
            }
            HookState::Reeling { ref mut caught } => {
                self.pos.y -= tuning.reel_speed;
                if let Some(object) = caught.as_mut() {
                    object.pos.y = self.pos.y;
                }
                if self.pos.y > tuning.launch_y {
                    return HookStep::Moved;
                }
                let catch = caught.take();
                *self = Self::at_launch(tuning);
                HookStep::Surfaced { catch }
            }
        }
    }
}
