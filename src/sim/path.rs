//! Slice gesture bookkeeping
//!
//! Accumulates a bounded, time-ordered trail of pointer positions while a
//! slicing gesture is active. Hit-testing and scoring live elsewhere; this
//! is pure trail state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SLICE_PATH_CAPACITY;

/// The player's in-progress cut gesture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlicePath {
    points: Vec<Vec2>,
    active: bool,
}

impl SlicePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture at `p`, discarding any previous trail.
    pub fn begin(&mut self, p: Vec2) {
        self.points.clear();
        self.active = true;
        self.push(p);
    }

    /// Append `p` to the active trail; the oldest point is dropped once the
    /// trail is at capacity. Ignored while no gesture is active.
    pub fn extend(&mut self, p: Vec2) {
        if !self.active {
            return;
        }
        self.push(p);
    }

    /// Finish the gesture and clear the trail.
    pub fn end(&mut self) {
        self.active = false;
        self.points.clear();
    }

    /// A gesture is in progress and has at least one accepted point.
    pub fn is_active(&self) -> bool {
        self.active && !self.points.is_empty()
    }

    /// Current trail, oldest point first.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    fn push(&mut self, p: Vec2) {
        // Malformed pointer events must not corrupt the trail
        if !p.is_finite() {
            log::debug!("ignoring non-finite slice point {:?}", p);
            return;
        }
        self.points.push(p);
        if self.points.len() > SLICE_PATH_CAPACITY {
            self.points.remove(0);
        }
    }
}
