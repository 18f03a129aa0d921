//! Frame scheduling
//!
//! Turns wall-clock deltas into a serialized stream of fixed-rate frame
//! ticks plus one round-clock tick per whole second. Any host loop
//! (animation callback, timer, test harness) feeds `advance` with elapsed
//! time and gets the same behavior.

use crate::consts::{CLOCK_STEP_MS, FRAME_MS, MAX_SUBSTEPS};
use crate::persistence::HighScoreStore;
use crate::session::GameSession;
use crate::sim::{GameEvent, GameStatus};

/// Largest delta accepted per advance (a backgrounded tab can report seconds)
const MAX_ADVANCE_MS: f64 = 100.0;

/// What one `advance` call did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverReport {
    pub frames: u32,
    pub clock_ticks: u32,
    pub events: Vec<GameEvent>,
}

/// Fixed-step driver for a session
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    /// Simulation clock handed to `tick`
    now_ms: f64,
    frame_accumulator: f64,
    clock_accumulator: f64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulation time in whole milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms as u64
    }

    /// Feed `dt_ms` of elapsed wall time into the session.
    ///
    /// Issues nothing while the session is not playing, and drops any
    /// partial frame or second so the next round starts clean.
    pub fn advance<S: HighScoreStore>(&mut self, session: &mut GameSession<S>, dt_ms: f64) -> DriverReport {
        let mut report = DriverReport::default();
        if session.status() != GameStatus::Playing {
            self.frame_accumulator = 0.0;
            self.clock_accumulator = 0.0;
            return report;
        }

        let dt = dt_ms.clamp(0.0, MAX_ADVANCE_MS);
        self.frame_accumulator += dt;
        self.clock_accumulator += dt;

        let mut substeps = 0;
        while self.frame_accumulator >= FRAME_MS && substeps < MAX_SUBSTEPS {
            self.now_ms += FRAME_MS;
            self.frame_accumulator -= FRAME_MS;
            report.events.extend(session.tick(self.now_ms as u64));
            report.frames += 1;
            substeps += 1;
        }

        while self.clock_accumulator >= CLOCK_STEP_MS && session.status() == GameStatus::Playing {
            self.clock_accumulator -= CLOCK_STEP_MS;
            report.events.extend(session.clock_tick());
            report.clock_ticks += 1;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::tuning::Tuning;

    fn session() -> GameSession<MemoryStore> {
        GameSession::new(Tuning::default(), MemoryStore::new(), 42)
    }

    #[test]
    fn test_idle_until_started() {
        let mut session = session();
        let mut driver = FrameDriver::new();
        let report = driver.advance(&mut session, 100.0);
        assert_eq!(report, DriverReport::default());
        assert_eq!(driver.now_ms(), 0);
    }

    #[test]
    fn test_one_second_of_play() {
        let mut session = session();
        let mut driver = FrameDriver::new();
        session.start();

        let mut frames = 0;
        let mut clock_ticks = 0;
        for _ in 0..10 {
            let report = driver.advance(&mut session, 100.0);
            frames += report.frames;
            clock_ticks += report.clock_ticks;
        }
        assert!((59..=60).contains(&frames), "frames = {frames}");
        assert_eq!(clock_ticks, 1);
        assert_eq!(session.snapshot().remaining_seconds, 59);
        assert_eq!(session.snapshot().time_ticks, frames as u64);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut session = session();
        let mut driver = FrameDriver::new();
        session.start();

        let report = driver.advance(&mut session, 5_000.0);
        assert!(report.frames <= MAX_SUBSTEPS);
        assert_eq!(report.clock_ticks, 0);
    }

    #[test]
    fn test_stops_at_game_over() {
        let mut session = session();
        let mut driver = FrameDriver::new();
        session.start();

        let mut round_over = false;
        for _ in 0..700 {
            let report = driver.advance(&mut session, 100.0);
            round_over |= report
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::RoundOver { .. }));
        }
        assert!(round_over);
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.snapshot().remaining_seconds, 0);

        let ticks = session.snapshot().time_ticks;
        let report = driver.advance(&mut session, 100.0);
        assert_eq!(report.frames, 0);
        assert_eq!(session.snapshot().time_ticks, ticks);
    }
}
