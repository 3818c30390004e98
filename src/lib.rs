//! Fruit Slicer - an arcade slicing game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, slice detection, game state)
//! - `highscores`: Top-10 leaderboard with JSON persistence
//! - `tuning`: Data-driven game balance
//!
//! The engine never touches pixels, files or audio devices. A host feeds it
//! pointer gestures and play-area dimensions, ticks it once per frame, and
//! consumes the [`sim::GameEvent`]s it emits to drive rendering and audio.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default play-area extent in pixels (hosts pass the real size per tick)
    pub const DEFAULT_AREA_WIDTH: f32 = 800.0;
    pub const DEFAULT_AREA_HEIGHT: f32 = 600.0;

    /// Downward acceleration applied to every projectile and piece (px/s²)
    pub const GRAVITY: f32 = 540.0;
    /// Fraction of horizontal speed kept after a side-wall bounce
    pub const WALL_RESTITUTION: f32 = 0.9;

    /// Perpendicular "pop" given to the two pieces of a cut fruit (px/s)
    pub const SLICE_FORCE: f32 = 240.0;
    /// Lateral offset seeding the two piece positions (px)
    pub const PIECE_OFFSET: f32 = 15.0;
    /// Piece spin magnitude range (rad/s); left spins negative, right positive
    pub const PIECE_SPIN_MIN: f32 = 2.1;
    pub const PIECE_SPIN_MAX: f32 = 5.2;

    /// Most recent pointer positions kept in a slice gesture
    pub const SLICE_PATH_CAPACITY: usize = 15;

    /// Ticks a finished run must wait before a restart is honored (2 s at 60 Hz)
    pub const RESTART_COOLDOWN_TICKS: u64 = 120;

    /// Background index at which the difficulty floor engages
    pub const DIFFICULTY_FLOOR_INDEX: usize = 2;
    /// Multiplier floor forced once that index is reached
    pub const DIFFICULTY_FLOOR: f32 = 2.0;
}
