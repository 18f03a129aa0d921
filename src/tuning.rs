//! Data-driven game balance
//!
//! Everything a designer might want to tweak lives here. Loaded once at
//! startup from JSON; missing fields fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::catalog::{Archetype, Category, default_fish, default_trash};

/// Errors loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Play field dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub width: f32,
    pub height: f32,
    /// Nothing spawns above this line (surface + boat)
    pub spawn_band_top: f32,
    /// Nothing spawns within this distance of the bottom
    pub spawn_band_bottom_margin: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            spawn_band_top: 150.0,
            spawn_band_bottom_margin: 50.0,
        }
    }
}

impl FieldTuning {
    /// Vertical range new objects spawn in: `[top, height - bottom_margin)`
    pub fn spawn_band(&self) -> (f32, f32) {
        (self.spawn_band_top, self.height - self.spawn_band_bottom_margin)
    }
}

/// Hook geometry and speeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookTuning {
    pub width: f32,
    pub height: f32,
    /// Pixels per frame while dropping
    pub drop_speed: f32,
    /// Pixels per frame while reeling
    pub reel_speed: f32,
    pub launch_x: f32,
    pub launch_y: f32,
}

impl Default for HookTuning {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 15.0,
            drop_speed: 5.0,
            reel_speed: 7.0,
            launch_x: 400.0,
            launch_y: 110.0,
        }
    }
}

/// Per-category spawn cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTuning {
    /// Population cap for the category
    pub max_population: usize,
    /// Minimum milliseconds between spawns
    pub interval_ms: u64,
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldTuning,
    /// Round length in seconds
    pub round_seconds: u32,
    pub hook: HookTuning,
    pub fish_spawn: SpawnTuning,
    pub trash_spawn: SpawnTuning,
    pub fish_types: Vec<Archetype>,
    pub trash_types: Vec<Archetype>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field: FieldTuning::default(),
            round_seconds: 60,
            hook: HookTuning::default(),
            fish_spawn: SpawnTuning {
                max_population: 10,
                interval_ms: 1000,
            },
            trash_spawn: SpawnTuning {
                max_population: 3,
                interval_ms: 5000,
            },
            fish_types: default_fish(),
            trash_types: default_trash(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Spawn cadence and catalog for a category
    pub fn category(&self, category: Category) -> (SpawnTuning, &[Archetype]) {
        match category {
            Category::Beneficial => (self.fish_spawn, self.fish_types.as_slice()),
            Category::Hazard => (self.trash_spawn, self.trash_types.as_slice()),
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: String| Err(TuningError::Invalid(msg));

        let field = &self.field;
        if field.width <= 0.0 || field.height <= 0.0 {
            return invalid(format!("field must be positive, got {}x{}", field.width, field.height));
        }
        let (band_top, band_bottom) = field.spawn_band();
        if band_top < 0.0 || band_top >= band_bottom {
            return invalid(format!("empty spawn band [{band_top}, {band_bottom})"));
        }
        if self.round_seconds == 0 {
            return invalid("round must last at least one second".to_string());
        }

        let hook = &self.hook;
        if hook.width <= 0.0 || hook.height <= 0.0 {
            return invalid(format!("hook must be positive, got {}x{}", hook.width, hook.height));
        }
        if hook.drop_speed <= 0.0 || hook.reel_speed <= 0.0 {
            return invalid("hook speeds must be positive".to_string());
        }
        if hook.launch_y < 0.0 || hook.launch_y >= field.height {
            return invalid(format!("hook launch height {} is outside the field", hook.launch_y));
        }

        for category in [Category::Beneficial, Category::Hazard] {
            let (_, catalog) = self.category(category);
            if catalog.is_empty() {
                return invalid(format!("{} catalog is empty", category.as_str()));
            }
            for archetype in catalog {
                if archetype.category != category {
                    return invalid(format!(
                        "{} is tagged {} but listed as {}",
                        archetype.name,
                        archetype.category.as_str(),
                        category.as_str()
                    ));
                }
                if archetype.width <= 0.0 || archetype.height <= 0.0 || archetype.speed <= 0.0 {
                    return invalid(format!("{} needs positive size and speed", archetype.name));
                }
            }
        }

        Ok(())
    }
}
