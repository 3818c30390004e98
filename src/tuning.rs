//! Data-driven game balance
//!
//! Everything a host might reasonably retune lives here and can be loaded
//! from JSON; engine-fixed constants stay in [`crate::consts`]. Unknown or
//! missing fields fall back to the shipped defaults.

use serde::{Deserialize, Serialize};

/// Balance parameters for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ticks between spawn requests
    pub spawn_interval_ticks: u32,
    /// Starting (and maximum) lives
    pub initial_lives: u8,
    /// Slices per difficulty step
    pub fruits_per_level: u32,
    /// Multiplier gained per difficulty step
    pub difficulty_increment: f32,
    /// Multiplier cap
    pub max_multiplier: f32,
    /// Projectile radius range (px)
    pub min_radius: f32,
    pub max_radius: f32,
    /// Horizontal launch speed bound (px/s, symmetric)
    pub launch_vx: f32,
    /// Vertical launch speed range (px/s; upward is negative)
    pub launch_vy_min: f32,
    pub launch_vy_max: f32,
    /// Whole-fruit spin bound (rad/s, symmetric)
    pub spin: f32,
    /// Base point value of a level-1 fruit
    pub base_points: u32,
    /// Extra points per level above 1
    pub points_per_level: u32,
    /// Chance of the bonus-scoring variant
    pub special_chance: f64,
    /// Chance of a hazard
    pub hazard_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ticks: 70,
            initial_lives: 5,
            fruits_per_level: 10,
            difficulty_increment: 0.05,
            max_multiplier: 4.0,
            min_radius: 35.0,
            max_radius: 45.0,
            launch_vx: 90.0,
            launch_vy_min: -480.0,
            launch_vy_max: -360.0,
            spin: 2.1,
            base_points: 10,
            points_per_level: 5,
            special_chance: 0.05,
            hazard_chance: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_json() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{"initial_lives": 3, "spawn_interval_ticks": 30}"#).unwrap();
        assert_eq!(tuning.initial_lives, 3);
        assert_eq!(tuning.spawn_interval_ticks, 30);
        assert_eq!(tuning.fruits_per_level, Tuning::default().fruits_per_level);
        assert_eq!(tuning.max_multiplier, Tuning::default().max_multiplier);
    }
}
