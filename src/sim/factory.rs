//! Randomized projectile creation
//!
//! The orchestrator requests new projectiles through the [`FruitFactory`]
//! seam; the default implementation reproduces the launch rules the game
//! balance was tuned around. All randomness comes from the seeded run RNG,
//! so spawn sequences replay exactly for a given seed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::fruit::{Fruit, FruitKind, FruitState};
use super::state::PlayArea;
use crate::tuning::Tuning;

/// Seam between the orchestrator and projectile creation
pub trait FruitFactory {
    /// Build one projectile for the given difficulty and level.
    fn spawn(
        &mut self,
        rng: &mut Pcg32,
        tuning: &Tuning,
        area: PlayArea,
        multiplier: f32,
        level: u32,
        id: u32,
    ) -> Fruit;
}

/// First levels launch a little slower to ease players in
const EARLY_LEVELS: u32 = 3;
const EARLY_LEVEL_DISCOUNT: f32 = 0.8;

/// Default factory: randomized kinematics scaled by the difficulty multiplier
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFruitFactory;

impl FruitFactory for RandomFruitFactory {
    fn spawn(
        &mut self,
        rng: &mut Pcg32,
        tuning: &Tuning,
        area: PlayArea,
        multiplier: f32,
        level: u32,
        id: u32,
    ) -> Fruit {
        let radius = rng.random_range(tuning.min_radius..=tuning.max_radius);

        let kind = if rng.random_bool(tuning.special_chance) {
            FruitKind::Special
        } else if rng.random_bool(tuning.hazard_chance) {
            FruitKind::Hazard
        } else {
            FruitKind::Normal
        };

        // Launch column anywhere between the walls, from the lower half
        let max_x = (area.width - radius).max(radius);
        let x = rng.random_range(radius..=max_x);
        let min_y = (area.height / 2.0).min(area.height);
        let y = rng.random_range(min_y..=area.height);

        let mut speed = multiplier;
        if level <= EARLY_LEVELS {
            speed *= EARLY_LEVEL_DISCOUNT;
        }

        let vx = rng.random_range(-tuning.launch_vx..=tuning.launch_vx) * speed;
        let vy = rng.random_range(tuning.launch_vy_min..=tuning.launch_vy_max) * speed;

        let points = tuning.base_points + level.saturating_sub(1) * tuning.points_per_level;

        Fruit {
            id,
            kind,
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            rotation: 0.0,
            rotation_speed: rng.random_range(-tuning.spin..=tuning.spin),
            points,
            state: FruitState::Whole,
            removal: false,
        }
    }
}
