//! Fruit Slicer entry point
//!
//! Runs a headless demo session: an auto-player slices every fruit it can
//! reach and leaves hazards alone, while the events a presentation layer
//! would consume are logged. Pass a seed as the first argument to replay a
//! specific run.

use glam::Vec2;

use fruit_slicer::HighScores;
use fruit_slicer::sim::{FruitKind, GameEvent, GameState, RandomFruitFactory, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xF00D);

    log::info!("Fruit Slicer (headless) starting with seed {}", seed);

    let mut state = GameState::new(seed);
    let mut factory = RandomFruitFactory;
    let input = TickInput::default();
    let mut scores = HighScores::load();

    // One minute of play at 60 Hz
    for _ in 0..3600 {
        // Draw a short vertical cut through the first whole fruit; bombs are
        // left to fall on their own
        let target = state
            .fruits
            .iter()
            .find(|f| !f.is_sliced() && f.kind != FruitKind::Hazard)
            .map(|f| f.pos);
        if let Some(pos) = target {
            state.slice_path.begin(pos - Vec2::new(0.0, 30.0));
            state.slice_path.extend(pos + Vec2::new(0.0, 30.0));
        }

        for event in tick(&mut state, &mut factory, &input) {
            match event {
                GameEvent::FruitSliced {
                    kind,
                    points,
                    score,
                } => log::info!("sliced {:?} for {} ({} total)", kind, points, score),
                GameEvent::SliceLanded => {}
                GameEvent::LifeLost { lives_left } => {
                    log::info!("life lost, {} remaining", lives_left)
                }
                GameEvent::BackgroundChanged { index } => {
                    log::info!("background changed to {}", index)
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("game over at {} points", final_score)
                }
                GameEvent::HighScoreCandidate { score } => {
                    record_high_score(&mut scores, score, &state)
                }
            }
        }

        state.slice_path.end();

        if state.session.is_game_over() {
            break;
        }
    }

    if !state.session.is_game_over() {
        record_high_score(&mut scores, state.session.score, &state);
    }

    println!(
        "score {}  fruits {}  lives {}  multiplier {:.2} (level {})  background {}",
        state.session.score,
        state.session.fruits_sliced,
        state.session.lives,
        state.difficulty.multiplier,
        state.difficulty.level(),
        state.background_index
    );
}

fn record_high_score(scores: &mut HighScores, score: u64, state: &GameState) {
    if let Some(rank) = scores.add_score(score, state.session.fruits_sliced, now_millis()) {
        log::info!("new high score, rank {}", rank);
        scores.save();
    }
}

fn now_millis() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
