//! Catchable object archetypes
//!
//! Pure data: the spawner picks from these, nothing here has behavior
//! beyond simple accessors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::parse_hex_color;

/// Which active set an object lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fish - worth points
    Beneficial,
    /// Trash - costs points
    Hazard,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beneficial => "beneficial",
            Category::Hazard => "hazard",
        }
    }
}

/// A kind of catchable object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub category: Category,
    pub width: f32,
    pub height: f32,
    /// Signed score delta when reeled in
    pub points: i64,
    /// Horizontal pixels per frame
    pub speed: f32,
    /// Render color as `#rrggbb`
    pub color: String,
}

impl Archetype {
    pub fn new(
        name: &str,
        category: Category,
        size: (f32, f32),
        points: i64,
        speed: f32,
        color: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            width: size.0,
            height: size.1,
            points,
            speed,
            color: color.to_string(),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Parsed render color (grey if the string is malformed)
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.color).unwrap_or([0x80, 0x80, 0x80])
    }
}

/// Default fish catalog
pub fn default_fish() -> Vec<Archetype> {
    use Category::Beneficial;
    vec![
        Archetype::new("Minnow", Beneficial, (30.0, 20.0), 10, 1.5, "#c0c0c0"),
        Archetype::new("Trout", Beneficial, (50.0, 25.0), 50, 2.0, "#8A9A5B"),
        Archetype::new("Salmon", Beneficial, (60.0, 30.0), 100, 2.5, "#FA8072"),
        Archetype::new("Golden Fish", Beneficial, (40.0, 40.0), 500, 3.0, "#FFD700"),
    ]
}

/// Default trash catalog
pub fn default_trash() -> Vec<Archetype> {
    use Category::Hazard;
    vec![
        Archetype::new("Old Boot", Hazard, (30.0, 30.0), -25, 0.5, "#5C4033"),
        Archetype::new("Tin Can", Hazard, (25.0, 25.0), -15, 0.7, "#A9A9A9"),
    ]
}
