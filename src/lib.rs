//! Reel Frenzy - A timed arcade fishing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hook, fish, collisions, scoring, clock)
//! - `session`: Session controller, the single entry point for intents
//! - `platform`: Input mapping and frame scheduling
//! - `persistence`: High score storage backends
//! - `tuning`: Data-driven game balance

pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use persistence::{FileStore, HighScoreStore, MemoryStore, PersistenceError};
pub use session::GameSession;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Frame rate the driver targets (ticks per second)
    pub const FRAME_RATE: u32 = 60;
    /// Frame interval in milliseconds
    pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;
    /// Maximum frame ticks per driver advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Round clock resolution
    pub const CLOCK_STEP_MS: f64 = 1000.0;

    /// How long a floating score label stays on screen
    pub const FEEDBACK_LIFETIME_MS: u64 = 1000;

    /// Storage key for the persisted high score
    pub const HIGH_SCORE_KEY: &str = "fishingGameHighScore";
}

/// Axis-aligned overlap between two boxes given by top-left corner and size.
///
/// Touching edges do not count as overlap.
#[inline]
pub fn boxes_overlap(a_pos: glam::Vec2, a_size: glam::Vec2, b_pos: glam::Vec2, b_size: glam::Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Parse a `#rrggbb` color string into RGB bytes
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_boxes_overlap() {
        let size = Vec2::new(10.0, 10.0);
        assert!(boxes_overlap(Vec2::ZERO, size, Vec2::new(5.0, 5.0), size));
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(20.0, 0.0), size));
        // Shared edge is not an overlap
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(10.0, 0.0), size));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFD700"), Some([0xff, 0xd7, 0x00]));
        assert_eq!(parse_hex_color("#c0c0c0"), Some([0xc0, 0xc0, 0xc0]));
        assert_eq!(parse_hex_color("c0c0c0"), None);
        assert_eq!(parse_hex_color("#c0c0"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
