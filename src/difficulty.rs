//! Score-driven progression: more and faster birds as the climb goes on.

use log::info;
use rand::Rng;

use crate::constants::{
    BIRD_HEIGHT, INITIAL_BIRD_COUNT, INITIAL_BIRD_SPEED_MAX, INITIAL_BIRD_SPEED_MIN,
    MAX_BIRDS_PER_LINE, MAX_BIRD_COUNT, MAX_BIRD_SPEED_MAX, MAX_BIRD_SPEED_MIN,
    SCORE_PER_DIFFICULTY, SPEED_RAMP_LEVELS,
};
use crate::entities::{GameState, SpeedRange};
use crate::world;

pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_DIFFICULTY
}

pub fn target_bird_count(level: u32) -> usize {
    (INITIAL_BIRD_COUNT + level as usize).min(MAX_BIRD_COUNT)
}

/// Linear ramp from the initial to the max range over `SPEED_RAMP_LEVELS`,
/// flat afterwards.
pub fn speed_range(level: u32) -> SpeedRange {
    let progress = (level as f32 / SPEED_RAMP_LEVELS as f32).min(1.0);
    SpeedRange {
        min: INITIAL_BIRD_SPEED_MIN + progress * (MAX_BIRD_SPEED_MIN - INITIAL_BIRD_SPEED_MIN),
        max: INITIAL_BIRD_SPEED_MAX + progress * (MAX_BIRD_SPEED_MAX - INITIAL_BIRD_SPEED_MAX),
    }
}

/// Re-derive the level from the score.  On a level-up the speed range is
/// raised first, then birds are appended (never removed) up to the target.
pub fn on_score_changed(state: &mut GameState, rng: &mut impl Rng) {
    let level = level_for_score(state.score);
    if level <= state.difficulty {
        return;
    }
    state.difficulty = level;
    state.bird_speed = speed_range(level);

    let target = target_bird_count(level);
    for index in state.birds.len()..target {
        // Stagger the newcomers so they don't enter on one line.
        let y = -BIRD_HEIGHT * (1 + index % MAX_BIRDS_PER_LINE) as f32;
        let bird = world::spawn_bird(rng, y, state.bird_speed);
        state.birds.push(bird);
    }

    info!(
        "difficulty {} at score {}: {} birds, speed {:.2}..{:.2}",
        level,
        state.score,
        state.birds.len(),
        state.bird_speed.min,
        state.bird_speed.max
    );
}
