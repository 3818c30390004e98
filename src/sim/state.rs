//! Game state and the managers that govern a run
//!
//! Score, lives, difficulty and the spawn timer are explicit structs owned
//! by the engine state; nothing here is global. All of it serializes for
//! save/continue and determinism.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fruit::{Fruit, FruitKind};
use super::path::SlicePath;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current play-area extent, supplied by the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: DEFAULT_AREA_WIDTH,
            height: DEFAULT_AREA_HEIGHT,
        }
    }
}

/// Discrete events emitted by a tick, consumed by the audio and
/// persistence layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One projectile was cut this tick
    FruitSliced {
        kind: FruitKind,
        points: u64,
        score: u64,
    },
    /// At least one projectile was cut this tick (single combined audio cue)
    SliceLanded,
    LifeLost {
        lives_left: u8,
    },
    /// The score crossed a background threshold
    BackgroundChanged {
        index: usize,
    },
    GameOver {
        final_score: u64,
    },
    /// The host should test this score against the leaderboard
    HighScoreCandidate {
        score: u64,
    },
}

/// Score and lives for one run
///
/// Score and slice count only grow, lives only shrink; a reset is the sole
/// way back to a playable state once the run ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    pub fruits_sliced: u32,
    pub lives: u8,
    max_lives: u8,
    game_over: bool,
    game_over_tick: u64,
}

impl Session {
    pub fn new(max_lives: u8) -> Self {
        Self {
            score: 0,
            fruits_sliced: 0,
            lives: max_lives,
            max_lives,
            game_over: false,
            game_over_tick: 0,
        }
    }

    /// Credit a slice. No-op once the run has ended.
    pub fn add_score(&mut self, points: u64) {
        if self.game_over {
            return;
        }
        self.score += points;
        self.fruits_sliced += 1;
    }

    /// Drop one life. Flips game-over exactly once, recording the tick the
    /// last life was lost; a no-op afterwards.
    pub fn lose_life(&mut self, now_tick: u64) {
        if self.game_over {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            self.game_over_tick = now_tick;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Restart requests are honored only after a short cooldown.
    pub fn can_restart(&self, now_tick: u64) -> bool {
        self.game_over
            && now_tick.saturating_sub(self.game_over_tick) >= RESTART_COOLDOWN_TICKS
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.fruits_sliced = 0;
        self.lives = self.max_lives;
        self.game_over = false;
        self.game_over_tick = 0;
    }
}

/// Monotonic speed scaling driven by cumulative slices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    /// Applied to launch velocities by the projectile factory
    pub multiplier: f32,
    increment: f32,
    max: f32,
    fruits_per_level: u32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            multiplier: 1.0,
            increment: tuning.difficulty_increment,
            max: tuning.max_multiplier,
            fruits_per_level: tuning.fruits_per_level,
        }
    }

    /// Bump the multiplier each time the slice count crosses a level boundary.
    pub fn on_slice_count(&mut self, total_slices: u32) {
        if total_slices.is_multiple_of(self.fruits_per_level) {
            self.multiplier = (self.multiplier + self.increment).min(self.max);
        }
    }

    /// Force the multiplier up to `floor` (never down, never past the cap).
    pub fn raise_floor(&mut self, floor: f32) {
        if self.multiplier < floor {
            self.multiplier = floor.min(self.max);
        }
    }

    /// Zero-based level derived from how far the multiplier has climbed
    pub fn level(&self) -> u32 {
        ((self.multiplier - 1.0) / self.increment).round() as u32
    }

    pub fn reset(&mut self) {
        self.multiplier = 1.0;
    }
}

/// Fixed-interval spawn timer; one projectile per firing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    timer: u32,
    interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self { timer: 0, interval }
    }

    /// Advance one tick; true exactly when the interval elapses.
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= self.interval {
            self.timer = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }
}

/// Score thresholds opening each successive background, ascending
const BACKGROUND_THRESHOLDS: [u64; 7] = [200, 500, 1000, 1500, 2000, 2500, 3000];

/// Background/level index for a score (0-based, eight stages)
pub fn background_for_score(score: u64) -> usize {
    BACKGROUND_THRESHOLDS.iter().filter(|&&t| score >= t).count()
}

/// Complete engine state for one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn kinematics and piece spin
    pub rng: Pcg32,
    /// Balance parameters the run was started with
    pub tuning: Tuning,
    /// Simulation tick counter (monotonic clock for the restart cooldown)
    pub time_ticks: u64,
    pub paused: bool,
    pub session: Session,
    pub difficulty: Difficulty,
    pub spawner: Spawner,
    /// In-progress cursor gesture, fed by the host's input source
    pub slice_path: SlicePath,
    /// Live projectiles, insertion order
    pub fruits: Vec<Fruit>,
    /// Background/level index derived from score thresholds
    pub background_index: usize,
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session: Session::new(tuning.initial_lives),
            difficulty: Difficulty::new(&tuning),
            spawner: Spawner::new(tuning.spawn_interval_ticks),
            tuning,
            time_ticks: 0,
            paused: false,
            slice_path: SlicePath::new(),
            fruits: Vec::new(),
            background_index: 0,
            next_id: 1,
        }
    }

    /// Allocate a new projectile ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Return the session to its initial state: the sole way back to play
    /// after game over. The tick counter and RNG keep running; reset starts
    /// a new session, not a new timeline.
    pub fn reset(&mut self) {
        self.fruits.clear();
        self.session.reset();
        self.difficulty.reset();
        self.spawner.reset();
        self.slice_path.end();
        self.background_index = 0;
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_game_over_fires_once_at_zero_lives() {
        let mut session = Session::new(5);
        for tick in 1..=4u64 {
            session.lose_life(tick);
            assert!(!session.is_game_over());
        }
        session.lose_life(42);
        assert!(session.is_game_over());
        assert_eq!(session.lives, 0);

        // Further losses are no-ops and must not move the recorded tick
        session.lose_life(99);
        assert_eq!(session.lives, 0);
        assert!(!session.can_restart(42));
        assert!(session.can_restart(42 + RESTART_COOLDOWN_TICKS));
    }

    #[test]
    fn test_add_score_after_game_over_is_noop() {
        let mut session = Session::new(1);
        session.lose_life(1);
        assert!(session.is_game_over());
        session.add_score(10);
        assert_eq!(session.score, 0);
        assert_eq!(session.fruits_sliced, 0);
    }

    #[test]
    fn test_restart_gating_and_reset() {
        let mut session = Session::new(5);
        for _ in 0..5 {
            session.lose_life(100);
        }
        assert!(session.is_game_over());
        assert!(!session.can_restart(100));
        assert!(!session.can_restart(100 + RESTART_COOLDOWN_TICKS - 1));
        assert!(session.can_restart(100 + RESTART_COOLDOWN_TICKS));

        session.reset();
        assert!(!session.is_game_over());
        assert_eq!(session.lives, 5);
        assert_eq!(session.score, 0);
        assert!(!session.can_restart(u64::MAX));
    }

    #[test]
    fn test_difficulty_steps_on_exact_multiples() {
        let tuning = Tuning::default();
        let mut difficulty = Difficulty::new(&tuning);

        for count in 1..=9 {
            difficulty.on_slice_count(count);
        }
        assert_eq!(difficulty.multiplier, 1.0);

        difficulty.on_slice_count(10);
        assert!((difficulty.multiplier - 1.05).abs() < 1e-6);
        assert_eq!(difficulty.level(), 1);
    }

    #[test]
    fn test_difficulty_caps_at_max() {
        let tuning = Tuning::default();
        let mut difficulty = Difficulty::new(&tuning);
        for i in 1..=1000u32 {
            difficulty.on_slice_count(i * tuning.fruits_per_level);
        }
        assert_eq!(difficulty.multiplier, tuning.max_multiplier);
    }

    #[test]
    fn test_difficulty_floor_never_lowers() {
        let tuning = Tuning::default();
        let mut difficulty = Difficulty::new(&tuning);
        difficulty.raise_floor(2.0);
        assert_eq!(difficulty.multiplier, 2.0);

        // Already above the floor: untouched
        difficulty.raise_floor(1.5);
        assert_eq!(difficulty.multiplier, 2.0);

        difficulty.reset();
        assert_eq!(difficulty.multiplier, 1.0);
    }

    #[test]
    fn test_spawner_fires_on_interval() {
        let mut spawner = Spawner::new(3);
        assert!(!spawner.tick());
        assert!(!spawner.tick());
        assert!(spawner.tick());
        // Counter rolls over and the cycle repeats
        assert!(!spawner.tick());
        assert!(!spawner.tick());
        assert!(spawner.tick());

        spawner.tick();
        spawner.reset();
        assert!(!spawner.tick());
        assert!(!spawner.tick());
        assert!(spawner.tick());
    }

    #[test]
    fn test_background_thresholds() {
        assert_eq!(background_for_score(0), 0);
        assert_eq!(background_for_score(199), 0);
        assert_eq!(background_for_score(200), 1);
        assert_eq!(background_for_score(999), 2);
        assert_eq!(background_for_score(1000), 3);
        assert_eq!(background_for_score(3000), 7);
        assert_eq!(background_for_score(50_000), 7);
    }

    #[test]
    fn test_state_reset_restores_initial_values() {
        let mut state = GameState::new(1);
        state.session.add_score(500);
        state.difficulty.raise_floor(2.0);
        state.background_index = 3;
        state.slice_path.begin(glam::Vec2::new(1.0, 1.0));
        state.time_ticks = 777;

        state.reset();
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.lives, state.tuning.initial_lives);
        assert_eq!(state.difficulty.multiplier, 1.0);
        assert_eq!(state.background_index, 0);
        assert!(!state.slice_path.is_active());
        assert!(state.fruits.is_empty());
        // The timeline keeps running across resets
        assert_eq!(state.time_ticks, 777);
    }

    proptest! {
        #[test]
        fn session_fields_stay_monotonic(ops in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut session = Session::new(5);
            let mut prev_score = session.score;
            let mut prev_sliced = session.fruits_sliced;
            let mut prev_lives = session.lives;

            for (tick, &slice) in ops.iter().enumerate() {
                if slice {
                    session.add_score(10);
                } else {
                    session.lose_life(tick as u64);
                }
                prop_assert!(session.score >= prev_score);
                prop_assert!(session.fruits_sliced >= prev_sliced);
                prop_assert!(session.lives <= prev_lives);
                prev_score = session.score;
                prev_sliced = session.fruits_sliced;
                prev_lives = session.lives;
            }
        }

        #[test]
        fn difficulty_stays_bounded_and_monotonic(counts in proptest::collection::vec(1u32..10_000, 0..200)) {
            let tuning = Tuning::default();
            let mut difficulty = Difficulty::new(&tuning);
            let mut prev = difficulty.multiplier;

            for count in counts {
                difficulty.on_slice_count(count);
                prop_assert!(difficulty.multiplier >= prev);
                prop_assert!(difficulty.multiplier <= tuning.max_multiplier);
                prev = difficulty.multiplier;
            }
        }
    }
}
