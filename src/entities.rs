//! All game entity types. Pure data, no logic beyond tiny accessors.

use crate::constants::{RAINDROP_COUNT, SNOWFLAKE_COUNT, TICKS_PER_SECOND};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// −1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weather {
    Clear,
    Rain,
    Snow,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::Rain, Weather::Snow];

    /// Manual cycle order.
    pub fn next(self) -> Weather {
        match self {
            Weather::Clear => Weather::Rain,
            Weather::Rain => Weather::Snow,
            Weather::Snow => Weather::Clear,
        }
    }

    /// Maximum number of live particles for this weather.
    pub fn particle_cap(self) -> usize {
        match self {
            Weather::Clear => 0,
            Weather::Rain => RAINDROP_COUNT,
            Weather::Snow => SNOWFLAKE_COUNT,
        }
    }
}

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Lifecycle of a disappearing platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crumble {
    Intact,
    Breaking { ticks_left: u32 },
    Broken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformKind {
    Normal,
    /// Holds the player until a fresh jump press.
    Sticky,
    /// Survives exactly one bounce, then crumbles.
    Disappearing(Crumble),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn is_broken(&self) -> bool {
        self.kind == PlatformKind::Disappearing(Crumble::Broken)
    }
}

// ── Power-ups & projectiles ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoostKind {
    /// Faster horizontal movement.
    Speed,
    /// Stronger bounces plus a flight window.
    Jump,
    /// Birds are defeated on contact instead of ending the run.
    Shield,
}

impl BoostKind {
    pub const ALL: [BoostKind; 3] = [BoostKind::Speed, BoostKind::Jump, BoostKind::Shield];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boost {
    pub x: f32,
    pub y: f32,
    pub kind: BoostKind,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveBoost {
    pub kind: BoostKind,
    pub ticks_left: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub speed: f32,
    pub active: bool,
}

// ── Player & obstacles ────────────────────────────────────────────────────────

/// Position is the sprite centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub facing: Facing,
    /// Remaining flight ticks, if flight is enabled.
    pub flight: Option<u32>,
    pub shoot_cooldown: u32,
    pub boost: Option<ActiveBoost>,
    /// Index into `GameState::platforms` of the sticky platform holding us.
    pub stuck_to: Option<usize>,
    /// `up` state seen last tick, for edge detection.
    pub jump_held: bool,
}

impl Player {
    pub fn boost_kind(&self) -> Option<BoostKind> {
        self.boost.map(|b| b.kind)
    }

    pub fn has_boost(&self, kind: BoostKind) -> bool {
        self.boost_kind() == Some(kind)
    }
}

/// Position is the sprite's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub facing: Facing,
}

// ── Decoration ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub brightness: f32,
}

/// A raindrop or snowflake.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// What the host saw on the keyboard this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Jump / fly key held.
    pub up: bool,
    /// Pressed this tick.
    pub shoot: bool,
    /// Pressed this tick.
    pub fly: bool,
    /// Pressed this tick.
    pub cycle_weather: bool,
    /// Pressed this tick; only honoured after game over.
    pub restart: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One play session.  Cloneable so `tick` can hand back a fresh copy.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Always exactly `PLATFORM_COUNT` slots, recycled in place.
    pub platforms: Vec<Platform>,
    pub birds: Vec<Bird>,
    pub clouds: Vec<Cloud>,
    pub stars: Vec<Star>,
    pub particles: Vec<Particle>,
    pub boosts: Vec<Boost>,
    pub bullets: Vec<Bullet>,
    /// Total distance scrolled so far.
    pub camera: f32,
    pub score: u32,
    pub difficulty: u32,
    pub bird_speed: SpeedRange,
    pub weather: Weather,
    pub weather_ticks_left: u32,
    /// Random per-session offset into the day cycle, in `[0, 1)`.
    pub day_phase: f32,
    /// Dim sprites; seeded from the host's wall clock.
    pub night_mode: bool,
    pub status: GameStatus,
    pub frame: u64,
}

impl GameState {
    /// Seconds of simulated play.
    pub fn game_time(&self) -> f32 {
        self.frame as f32 / TICKS_PER_SECOND as f32
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
