//! Frame controller.
//!
//! `tick` takes an immutable reference to the current `GameState`, the
//! input seen this frame and an RNG handle, and returns the next
//! `GameState`.  Side effects are limited to the injected RNG, so a seeded
//! RNG plus a fixed input script replays exactly.

use log::info;
use rand::Rng;

use crate::constants::{
    FIRST_WEATHER_MAX_SECS, MAX_BIRD_COUNT, MAX_BIRD_SPEED_MAX, INITIAL_BIRD_SPEED_MIN,
    PLATFORM_COUNT, PLAYER_START_X, PLAYER_START_Y,
};
use crate::difficulty;
use crate::entities::{Facing, GameState, GameStatus, InputSnapshot, Player, Weather};
use crate::math::uniform;
use crate::physics;
use crate::weather;
use crate::world;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a brand-new session.  `night_mode` comes from the host's clock.
pub fn init_state(night_mode: bool, rng: &mut impl Rng) -> GameState {
    let bird_speed = difficulty::speed_range(0);
    let platforms = world::initial_platforms(rng);
    let birds = world::initial_birds(rng, bird_speed);
    let clouds = world::initial_clouds(rng);
    let stars = world::initial_stars(rng);
    let weather_ticks_left = weather::secs_to_ticks(uniform(rng, 0.0, FIRST_WEATHER_MAX_SECS));
    let day_phase = rng.gen::<f32>();

    GameState {
        player: Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            vy: 0.0,
            facing: Facing::Right,
            flight: None,
            shoot_cooldown: 0,
            boost: None,
            stuck_to: None,
            jump_held: false,
        },
        platforms,
        birds,
        clouds,
        stars,
        particles: Vec::new(),
        boosts: Vec::new(),
        bullets: Vec::new(),
        camera: 0.0,
        score: 0,
        difficulty: 0,
        bird_speed,
        weather: Weather::Clear,
        // A zero countdown would fire on the first tick.
        weather_ticks_left: weather_ticks_left.max(1),
        day_phase,
        night_mode,
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Per-frame tick (nearly pure, RNG is injected) ────────────────────────────

/// Advance the simulation by one fixed 1/60 s step.
///
/// After game over every system is frozen; only `input.restart` does
/// anything, and it replaces the whole session.
pub fn tick(state: &GameState, input: &InputSnapshot, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        if input.restart {
            info!("restarting after a score of {}", state.score);
            return init_state(state.night_mode, rng);
        }
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Weather & particles ───────────────────────────────────────────────
    weather::update(&mut next, input, rng);

    // ── 2. Timers ────────────────────────────────────────────────────────────
    physics::release_from_sticky(&mut next.player, input);
    physics::advance_crumbling(&mut next.platforms);
    physics::tick_player_timers(&mut next.player);
    physics::toggle_flight(&mut next.player, input);

    // ── 3. Gravity / flight, steering, shooting ──────────────────────────────
    physics::integrate(&mut next.player, &next.platforms, input);
    physics::steer(&mut next.player, input);
    physics::fire(&mut next, input);

    // ── 4. Landing, then scroll (order matters for jump height) ──────────────
    physics::land_on_platforms(&mut next.player, &mut next.platforms);
    physics::scroll_camera(&mut next, rng);

    // ── 5. Obstacles, projectiles, decoration, pickups ───────────────────────
    physics::fly_birds(&mut next);
    physics::move_bullets(&mut next);
    world::drift_clouds(&mut next.clouds);
    physics::collect_boosts(&mut next);

    // ── 6. Terminal check ────────────────────────────────────────────────────
    physics::check_fall(&mut next);

    check_invariants(&next);
    next
}

// ── Contract checks ──────────────────────────────────────────────────────────

/// Internal invariants of a session.  Violations are bugs, not game events,
/// so they only fire in debug builds.
pub fn check_invariants(state: &GameState) {
    debug_assert_eq!(state.platforms.len(), PLATFORM_COUNT, "platform pool resized");
    debug_assert!(
        state.birds.len() <= MAX_BIRD_COUNT,
        "bird pool over cap: {}",
        state.birds.len()
    );
    debug_assert!(
        state.birds.len() >= difficulty::target_bird_count(state.difficulty),
        "bird pool shrank below its level target"
    );
    debug_assert_eq!(
        state.difficulty,
        difficulty::level_for_score(state.score),
        "difficulty out of step with score"
    );
    debug_assert!(
        state.bird_speed.min >= INITIAL_BIRD_SPEED_MIN - f32::EPSILON
            && state.bird_speed.max <= MAX_BIRD_SPEED_MAX + f32::EPSILON
            && state.bird_speed.min <= state.bird_speed.max,
        "bird speed range out of bounds: {:?}",
        state.bird_speed
    );
    debug_assert!(
        state.particles.len() <= state.weather.particle_cap(),
        "particle pool over the {:?} cap",
        state.weather
    );
    debug_assert!(
        state.player.stuck_to.map_or(true, |i| i < state.platforms.len()),
        "stuck reference points outside the platform pool"
    );
}
