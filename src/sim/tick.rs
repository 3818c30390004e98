//! Fixed timestep simulation tick
//!
//! The orchestrator composes spawning, physics, slice detection, scoring,
//! difficulty and session transitions in a fixed order, once per simulated
//! frame. It owns all engine state for the duration of a tick; hosts feed
//! gestures into [`GameState::slice_path`] between ticks and drain the
//! returned events afterwards.

use glam::Vec2;

use super::factory::FruitFactory;
use super::state::{GameEvent, GameState, PlayArea, background_for_score};
use crate::consts::*;

/// Host input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Toggle pause
    pub pause: bool,
    /// Restart request; honored only after the game-over cooldown
    pub restart: bool,
    /// Current play-area extent
    pub area: PlayArea,
}

/// Advance the engine by one fixed timestep, returning this tick's events.
///
/// Tick order: pause gate, restart gate, spawn request, physics, removals
/// and life loss, slice tests, difficulty and background bookkeeping.
pub fn tick(
    state: &mut GameState,
    factory: &mut impl FruitFactory,
    input: &TickInput,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        state.paused = !state.paused;
    }
    if state.paused {
        return events;
    }

    // The tick counter keeps running through game over so the restart
    // cooldown can elapse
    state.time_ticks += 1;

    if state.session.is_game_over() {
        if input.restart && state.session.can_restart(state.time_ticks) {
            state.reset();
            log::info!("session restarted");
        }
        return events;
    }

    // Spawn request, parameterized by current difficulty and level
    if state.spawner.tick() {
        let level = state.background_index as u32 + 1;
        let id = state.next_entity_id();
        let fruit = factory.spawn(
            &mut state.rng,
            &state.tuning,
            input.area,
            state.difficulty.multiplier,
            level,
            id,
        );
        log::debug!("spawned {:?} {} at {:?}", fruit.kind, fruit.id, fruit.pos);
        state.fruits.push(fruit);
    }

    // Advance physics
    for fruit in &mut state.fruits {
        fruit.update(input.area, SIM_DT);
    }

    // Resolve removals: an unsliced miss costs a life (hazards excepted)
    let session = &mut state.session;
    let now_tick = state.time_ticks;
    state.fruits.retain(|fruit| {
        if !fruit.is_removable() {
            return true;
        }
        if !fruit.is_sliced() && fruit.kind.penalizes_miss() && !session.is_game_over() {
            session.lose_life(now_tick);
            events.push(GameEvent::LifeLost {
                lives_left: session.lives,
            });
            if session.is_game_over() {
                log::info!("game over at {} points", session.score);
                events.push(GameEvent::GameOver {
                    final_score: session.score,
                });
                events.push(GameEvent::HighScoreCandidate {
                    score: session.score,
                });
            }
        }
        false
    });

    // Slice tests against the current gesture
    if state.slice_path.is_active() && state.slice_path.points().len() >= 2 {
        // Snapshot the trail so the live set can be mutated while testing
        let path: Vec<Vec2> = state.slice_path.points().to_vec();
        let mut sliced_any = false;

        for fruit in &mut state.fruits {
            if !fruit.check_slice(&path, &mut state.rng) {
                continue;
            }
            sliced_any = true;

            let points = fruit.score_value();
            state.session.add_score(points);
            state.difficulty.on_slice_count(state.session.fruits_sliced);
            events.push(GameEvent::FruitSliced {
                kind: fruit.kind,
                points,
                score: state.session.score,
            });

            // Score thresholds drive the background and the level-triggered
            // difficulty floor
            let index = background_for_score(state.session.score);
            if index >= DIFFICULTY_FLOOR_INDEX {
                state.difficulty.raise_floor(DIFFICULTY_FLOOR);
            }
            if index != state.background_index {
                state.background_index = index;
                events.push(GameEvent::BackgroundChanged { index });
            }
        }

        if sliced_any {
            events.push(GameEvent::SliceLanded);
        }
    }

    events
}
