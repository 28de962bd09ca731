#![allow(dead_code)]

use doodle_jump::difficulty::speed_range;
use doodle_jump::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A quiet session: ten Normal platforms stacked at the left edge, the
/// player off to the right touching none of them, one bird far below the
/// action and a weather timer that won't fire during a test.
pub fn make_state() -> GameState {
    GameState {
        player: Player {
            x: 250.0,
            y: 300.0,
            vy: 0.0,
            facing: Facing::Right,
            flight: None,
            shoot_cooldown: 0,
            boost: None,
            stuck_to: None,
            jump_held: false,
        },
        platforms: (0..10)
            .map(|i| Platform {
                x: 0.0,
                y: i as f32 * 48.0,
                kind: PlatformKind::Normal,
            })
            .collect(),
        birds: vec![make_bird(0.0, 470.0)],
        clouds: Vec::new(),
        stars: Vec::new(),
        particles: Vec::new(),
        boosts: Vec::new(),
        bullets: Vec::new(),
        camera: 0.0,
        score: 0,
        difficulty: 0,
        bird_speed: speed_range(0),
        weather: Weather::Clear,
        weather_ticks_left: 10_000,
        day_phase: 0.5,
        night_mode: false,
        status: GameStatus::Playing,
        frame: 0,
    }
}

pub fn make_bird(x: f32, y: f32) -> Bird {
    Bird {
        x,
        y,
        speed: 1.0,
        facing: Facing::Right,
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn idle() -> InputSnapshot {
    InputSnapshot::default()
}
