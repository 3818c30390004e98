//! Projectiles: fruit and hazards
//!
//! A projectile is launched upward, falls under gravity, and can be cut
//! exactly once by the player's slice gesture. Cutting replaces the single
//! body with two independently simulated pieces.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::point_segment_distance;
use super::state::PlayArea;
use crate::consts::*;

/// Projectile variants; behavior differences are table lookups, not dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FruitKind {
    #[default]
    Normal,
    /// Bonus tier, double points
    Special,
    /// Bomb: scores nothing when cut, costs nothing when missed
    Hazard,
}

impl FruitKind {
    /// Multiplier applied to the fruit's base point value when sliced
    pub fn score_scale(&self) -> u64 {
        match self {
            FruitKind::Normal => 1,
            FruitKind::Special => 2,
            FruitKind::Hazard => 0,
        }
    }

    /// Whether letting this projectile fall unsliced costs a life
    pub fn penalizes_miss(&self) -> bool {
        !matches!(self, FruitKind::Hazard)
    }
}

/// One fragment of a cut fruit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
}

/// Whole body, or the two pieces it split into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FruitState {
    Whole,
    Sliced { left: Piece, right: Piece },
}

/// A simulated projectile
///
/// While `Whole`, the single-body fields evolve. Once `Sliced`, they are
/// frozen and only the two pieces move. The transition happens at most once,
/// in [`Fruit::check_slice`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub kind: FruitKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Level-scaled base point value assigned at spawn
    pub points: u32,
    pub state: FruitState,
    pub removal: bool,
}

impl Fruit {
    pub fn is_sliced(&self) -> bool {
        matches!(self.state, FruitState::Sliced { .. })
    }

    /// Fully off the bottom of the play area; safe to discard
    pub fn is_removable(&self) -> bool {
        self.removal
    }

    /// Points awarded when this fruit is sliced (kind-scaled)
    pub fn score_value(&self) -> u64 {
        self.points as u64 * self.kind.score_scale()
    }

    /// Advance one timestep: gravity, integration, wall bounces, removal.
    pub fn update(&mut self, area: PlayArea, dt: f32) {
        match &mut self.state {
            FruitState::Whole => {
                self.vel.y += GRAVITY * dt;
                self.pos += self.vel * dt;
                self.rotation += self.rotation_speed * dt;

                // Bounce off the side walls, shedding some speed
                if self.pos.x < self.radius {
                    self.pos.x = self.radius;
                    self.vel.x = self.vel.x.abs() * WALL_RESTITUTION;
                } else if self.pos.x > area.width - self.radius {
                    self.pos.x = area.width - self.radius;
                    self.vel.x = -self.vel.x.abs() * WALL_RESTITUTION;
                }

                // Gone once fully below the bottom edge and still descending
                if self.pos.y > area.height + self.radius && self.vel.y > 0.0 {
                    self.removal = true;
                }
            }
            FruitState::Sliced { left, right } => {
                left.vel.y += GRAVITY * dt;
                left.pos += left.vel * dt;
                left.rotation += left.rotation_speed * dt;

                right.vel.y += GRAVITY * dt;
                right.pos += right.vel * dt;
                right.rotation += right.rotation_speed * dt;

                if left.pos.y > area.height + self.radius
                    && right.pos.y > area.height + self.radius
                {
                    self.removal = true;
                }
            }
        }
    }

    /// Test the slice trail against this fruit and cut it on the first hit.
    ///
    /// Walks consecutive trail segments in order; the first one passing
    /// within `radius` of the center wins. Returns false without touching
    /// anything when already sliced or the trail is too short.
    pub fn check_slice(&mut self, points: &[Vec2], rng: &mut impl Rng) -> bool {
        if self.is_sliced() || points.len() < 2 {
            return false;
        }

        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if point_segment_distance(self.pos, a, b) >= self.radius {
                continue;
            }

            // Direction of the cut; a zero-length segment leaves it at (0,0)
            let mut dir = b - a;
            let len = dir.length();
            if len > 0.0 {
                dir /= len;
            }

            // Pieces pop apart perpendicular to the cut, opposite ways
            let perp = Vec2::new(-dir.y, dir.x);
            let left = Piece {
                pos: self.pos - Vec2::new(PIECE_OFFSET, 0.0),
                vel: self.vel + perp * SLICE_FORCE,
                rotation: 0.0,
                rotation_speed: -rng.random_range(PIECE_SPIN_MIN..PIECE_SPIN_MAX),
            };
            let right = Piece {
                pos: self.pos + Vec2::new(PIECE_OFFSET, 0.0),
                vel: self.vel - perp * SLICE_FORCE,
                rotation: 0.0,
                rotation_speed: rng.random_range(PIECE_SPIN_MIN..PIECE_SPIN_MAX),
            };
            self.state = FruitState::Sliced { left, right };
            return true;
        }

        false
    }
}
