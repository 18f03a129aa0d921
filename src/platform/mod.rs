//! Platform abstraction layer
//!
//! Glue between the outside world and the session:
//! - Input events to intents
//! - Frame and round-clock scheduling

pub mod input;
pub mod time;

pub use input::{InputEvent, Intent, intent_for};
pub use time::{DriverReport, FrameDriver};
