//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the live set)
//! - No rendering, audio or platform dependencies

pub mod factory;
pub mod fruit;
pub mod geom;
pub mod path;
pub mod state;
pub mod tick;

pub use factory::{FruitFactory, RandomFruitFactory};
pub use fruit::{Fruit, FruitKind, FruitState, Piece};
pub use geom::point_segment_distance;
pub use path::SlicePath;
pub use state::{
    Difficulty, GameEvent, GameState, PlayArea, Session, Spawner, background_for_score,
};
pub use tick::{TickInput, tick};
