//! Tuning table for the simulation.  Distances are logical viewport units,
//! speeds are units per tick, timers are ticks at `TICKS_PER_SECOND`.

// ── Viewport & sprite boxes ───────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 320.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const PLATFORM_WIDTH: f32 = 60.0;
pub const PLATFORM_HEIGHT: f32 = 10.0;
pub const BIRD_WIDTH: f32 = 40.0;
pub const BIRD_HEIGHT: f32 = 30.0;
pub const CLOUD_WIDTH: f32 = 80.0;
pub const CLOUD_HEIGHT: f32 = 40.0;

// ── Clock ─────────────────────────────────────────────────────────────────────

pub const TICKS_PER_SECOND: u32 = 60;

// ── Player physics ────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.15;
pub const JUMP_VELOCITY: f32 = -7.0;
pub const STICKY_RELEASE_FACTOR: f32 = 1.2;
pub const JUMP_BOOST_FACTOR: f32 = 1.5;
pub const FLY_VELOCITY: f32 = -4.0;
pub const MOVE_SPEED: f32 = 3.0;
pub const BOOSTED_MOVE_SPEED: f32 = 5.0;
/// The camera keeps the player at or below this line (40% of the viewport).
pub const SCROLL_LINE: f32 = SCREEN_HEIGHT * 0.4;

pub const PLAYER_START_X: f32 = SCREEN_WIDTH / 2.0;
pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT - 100.0;

pub const BULLET_SPEED: f32 = 5.0;

pub const FLY_DURATION_TICKS: u32 = 4 * TICKS_PER_SECOND;
pub const BOOST_DURATION_TICKS: u32 = 12 * TICKS_PER_SECOND;
pub const SHOOT_COOLDOWN_TICKS: u32 = TICKS_PER_SECOND * 4 / 10;
pub const BREAK_DURATION_TICKS: u32 = TICKS_PER_SECOND * 3 / 10;

// ── Pools ─────────────────────────────────────────────────────────────────────

pub const PLATFORM_COUNT: usize = 10;
pub const INITIAL_BIRD_COUNT: usize = 1;
pub const MAX_BIRD_COUNT: usize = 8;
pub const MAX_BIRDS_PER_LINE: usize = 2;
pub const BIRD_PLACEMENT_ATTEMPTS: usize = 10;
pub const CLOUD_COUNT: usize = 5;
pub const STAR_COUNT: usize = 100;
pub const RAINDROP_COUNT: usize = 50;
pub const SNOWFLAKE_COUNT: usize = 40;

// ── Generator odds ────────────────────────────────────────────────────────────

pub const STICKY_CHANCE: f32 = 0.20;
pub const DISAPPEARING_CHANCE: f32 = 0.15;
pub const BOOST_SPAWN_CHANCE: f32 = 0.15;
pub const RAIN_SPAWN_CHANCE: f32 = 0.3;
pub const SNOW_SPAWN_CHANCE: f32 = 0.2;

pub const CLOUD_SPEED_MIN: f32 = 0.2;
pub const CLOUD_SPEED_MAX: f32 = 1.0;

// ── Difficulty ────────────────────────────────────────────────────────────────

pub const SCORE_PER_DIFFICULTY: u32 = 20;
/// Levels over which bird speed ramps from the initial to the max range.
pub const SPEED_RAMP_LEVELS: u32 = 10;
pub const INITIAL_BIRD_SPEED_MIN: f32 = 0.7;
pub const INITIAL_BIRD_SPEED_MAX: f32 = 1.5;
pub const MAX_BIRD_SPEED_MIN: f32 = 2.5;
pub const MAX_BIRD_SPEED_MAX: f32 = 4.0;

// ── Day cycle & weather ───────────────────────────────────────────────────────

/// Score points per full day/night cycle.
pub const DAY_CYCLE_LENGTH: f32 = 1000.0;
pub const SUNRISE_END: f32 = 0.2;
pub const SUNSET_START: f32 = 0.7;
pub const SUNSET_END: f32 = 0.9;

pub const WEATHER_MIN_SECS: f32 = 15.0;
pub const WEATHER_MAX_SECS: f32 = 35.0;
/// Upper bound of the delay before the first weather change.
pub const FIRST_WEATHER_MAX_SECS: f32 = 15.0;
