//! Game session controller
//!
//! Owns the simulation state, the tuning, the RNG and the high score store.
//! Every intent from the outside world goes through here, and every
//! mutating call checks the session status first, so a frame or timer that
//! fires after the round ended is harmless.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::persistence::HighScoreStore;
use crate::platform::input::{InputEvent, Intent, intent_for};
use crate::sim::{self, GameEvent, GameState, GameStatus};
use crate::tuning::Tuning;

/// One player's game, from the ready screen through any number of rounds
pub struct GameSession<S: HighScoreStore> {
    state: GameState,
    tuning: Tuning,
    store: S,
    rng: Pcg32,
}

impl<S: HighScoreStore> GameSession<S> {
    /// Create a session in the Ready status, seeding the high score from storage
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Self {
        let high_score = match store.load() {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                log::warn!("Could not read high score, starting from 0: {e}");
                0
            }
        };
        log::info!("Session ready (seed {seed}, high score {high_score})");

        Self {
            state: GameState::new(&tuning, high_score),
            tuning,
            store,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a new round. Allowed from any status; keeps the high score.
    pub fn start(&mut self) {
        self.state.reset_round(&self.tuning);
        log::info!(
            "Round started: {}s on the clock, best {}",
            self.state.remaining_seconds,
            self.state.high_score
        );
    }

    /// Drop the hook. Returns whether the cast happened.
    pub fn cast_line(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        self.state.hook.cast()
    }

    /// Advance one frame at caller time `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> Vec<GameEvent> {
        let events = sim::tick(&mut self.state, &self.tuning, &mut self.rng, now_ms);
        if events.iter().any(|e| matches!(e, GameEvent::HighScore(_))) {
            self.persist_high_score();
        }
        events
    }

    /// One second of round clock
    pub fn clock_tick(&mut self) -> Option<GameEvent> {
        sim::clock_tick(&mut self.state)
    }

    /// Apply a raw input event through the status-gated mapping
    pub fn handle(&mut self, event: InputEvent) -> Option<Intent> {
        let intent = intent_for(self.state.status, event)?;
        match intent {
            Intent::Start => self.start(),
            Intent::Cast => {
                self.cast_line();
            }
        }
        Some(intent)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist_high_score(&mut self) {
        let high_score = self.state.high_score;
        match self.store.save(high_score) {
            Ok(()) => log::info!("New high score: {high_score}"),
            Err(e) => log::warn!("Failed to save high score {high_score}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::catalog::default_fish;
    use crate::sim::{Direction, HookState, SwimmingObject};
    use glam::Vec2;
    use proptest::prelude::*;

    fn quiet_tuning() -> Tuning {
        let mut tuning = Tuning::default();
        tuning.fish_spawn.max_population = 0;
        tuning.trash_spawn.max_population = 0;
        tuning
    }

    /// Session with a still 50-point trout sitting under the dropping hook
    fn hooked_trout(store: MemoryStore) -> GameSession<MemoryStore> {
        let mut session = GameSession::new(quiet_tuning(), store, 1);
        session.start();
        assert!(session.cast_line());
        let mut trout = default_fish().remove(1);
        trout.speed = 0.0;
        session.state.fish.push(SwimmingObject {
            id: 100,
            pos: Vec2::new(380.0, 110.0),
            size: trout.size(),
            archetype: trout,
            direction: Direction::Left,
        });
        session
    }

    fn reel_in(session: &mut GameSession<MemoryStore>) {
        for frame in 0..50 {
            session.tick(frame * 16);
            if session.snapshot().hook.is_idle() {
                return;
            }
        }
        panic!("hook never surfaced");
    }

    #[test]
    fn test_new_session_is_ready() {
        let session = GameSession::new(Tuning::default(), MemoryStore::with_value(900), 1);
        let state = session.snapshot();
        assert_eq!(state.status, GameStatus::Ready);
        assert_eq!(state.high_score, 900);
        assert_eq!(state.remaining_seconds, 60);
    }

    #[test]
    fn test_start_resets_round() {
        let mut session = hooked_trout(MemoryStore::with_value(10));
        session.tick(0);
        session.clock_tick();
        assert!(session.snapshot().hook.caught().is_some());

        session.start();
        let state = session.snapshot();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 10);
        assert_eq!(state.remaining_seconds, 60);
        assert_eq!(state.hook.state, HookState::Idle);
        assert!(state.hook.caught().is_none());
        assert!(state.fish.is_empty() && state.trash.is_empty());
        assert!(state.feedback.is_empty());
    }

    #[test]
    fn test_cast_requires_playing() {
        let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), 1);
        assert!(!session.cast_line());
        assert!(session.snapshot().hook.is_idle());

        session.start();
        assert!(session.cast_line());
        assert!(!session.cast_line());
    }

    #[test]
    fn test_landing_persists_high_score() {
        let mut session = hooked_trout(MemoryStore::new());
        reel_in(&mut session);
        assert_eq!(session.snapshot().score, 50);
        assert_eq!(session.snapshot().high_score, 50);
        assert_eq!(session.store().value(), Some(50));
        assert!(session.snapshot().is_new_high_score());
    }

    #[test]
    fn test_failed_save_keeps_scores() {
        let mut session = hooked_trout(MemoryStore::failing());
        reel_in(&mut session);
        assert_eq!(session.snapshot().score, 50);
        assert_eq!(session.snapshot().high_score, 50);
        assert_eq!(session.store().value(), None);
    }

    #[test]
    fn test_lower_score_does_not_write() {
        let mut session = hooked_trout(MemoryStore::with_value(1_000));
        reel_in(&mut session);
        assert_eq!(session.snapshot().score, 50);
        assert_eq!(session.snapshot().high_score, 1_000);
        assert_eq!(session.store().writes, 0);
        assert!(!session.snapshot().is_new_high_score());
    }

    #[test]
    fn test_round_ends_and_late_ticks_are_ignored() {
        let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), 3);
        session.start();
        session.tick(0);
        for _ in 0..59 {
            assert_eq!(session.clock_tick(), None);
        }
        assert_eq!(session.snapshot().remaining_seconds, 1);
        assert!(matches!(session.clock_tick(), Some(GameEvent::RoundOver { .. })));
        assert_eq!(session.status(), GameStatus::GameOver);

        let frozen = session.snapshot().clone();
        assert!(session.tick(99_000).is_empty());
        assert_eq!(session.clock_tick(), None);
        assert!(!session.cast_line());
        assert_eq!(session.snapshot(), &frozen);
    }

    #[test]
    fn test_input_gating() {
        let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), 1);
        assert_eq!(session.handle(InputEvent::PointerClick), None);
        assert_eq!(session.status(), GameStatus::Ready);

        assert_eq!(session.handle(InputEvent::CastKey), Some(Intent::Start));
        assert_eq!(session.status(), GameStatus::Playing);

        assert_eq!(session.handle(InputEvent::PointerClick), Some(Intent::Cast));
        assert!(session.snapshot().hook.is_dropping());
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), 1);
        session.start();
        session.state.remaining_seconds = 1;
        session.clock_tick();
        assert_eq!(session.status(), GameStatus::GameOver);

        assert_eq!(session.handle(InputEvent::CastKey), Some(Intent::Start));
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.snapshot().remaining_seconds, 60);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Start,
        Cast,
        Tick(u64),
        Clock,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            1 => Just(Op::Start),
            4 => Just(Op::Cast),
            20 => (1u64..200).prop_map(Op::Tick),
            2 => Just(Op::Clock),
        ]
    }

    proptest! {
        #[test]
        fn prop_high_score_never_decreases(seed in any::<u64>(), ops in proptest::collection::vec(op(), 1..400)) {
            let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), seed);
            let mut now = 0u64;
            let mut best = session.snapshot().high_score;
            for op in ops {
                match op {
                    Op::Start => session.start(),
                    Op::Cast => { session.cast_line(); }
                    Op::Tick(dt) => { now += dt; session.tick(now); }
                    Op::Clock => { session.clock_tick(); }
                }
                let state = session.snapshot();
                prop_assert!(state.high_score >= best);
                prop_assert!(state.high_score >= state.score);
                prop_assert!(state.high_score >= 0);
                best = state.high_score;
            }
        }

        #[test]
        fn prop_catch_only_while_reeling(seed in any::<u64>(), ticks in 1usize..600) {
            let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), seed);
            session.start();
            for frame in 0..ticks {
                if frame % 40 == 0 {
                    session.cast_line();
                }
                session.tick(frame as u64 * 16);
                let hook = &session.snapshot().hook;
                if hook.caught().is_some() {
                    let reeling = matches!(hook.state, HookState::Reeling { .. });
                    prop_assert!(reeling, "catch held while {:?}", hook.state);
                }
            }
        }

        #[test]
        fn prop_ticks_outside_play_change_nothing(seed in any::<u64>(), times in proptest::collection::vec(any::<u64>(), 1..50)) {
            let mut session = GameSession::new(Tuning::default(), MemoryStore::new(), seed);
            let ready = session.snapshot().clone();
            for now in times {
                session.tick(now);
                session.clock_tick();
                session.cast_line();
            }
            prop_assert_eq!(session.snapshot(), &ready);
        }
    }
}
