//! World generator: builds the initial layout and recycles entities that
//! scrolled out of the viewport.  Pools are never reallocated here except
//! for the boost list, which grows by at most one per platform recycle.

use log::{debug, trace};
use rand::Rng;

use crate::constants::{
    BIRD_HEIGHT, BIRD_PLACEMENT_ATTEMPTS, BOOST_SPAWN_CHANCE, CLOUD_COUNT, CLOUD_HEIGHT,
    CLOUD_SPEED_MAX, CLOUD_SPEED_MIN, CLOUD_WIDTH, DISAPPEARING_CHANCE, INITIAL_BIRD_COUNT,
    MAX_BIRDS_PER_LINE, PLATFORM_COUNT, PLATFORM_HEIGHT, PLATFORM_WIDTH, PLAYER_START_X,
    SCREEN_HEIGHT, SCREEN_WIDTH, STAR_COUNT, STICKY_CHANCE,
};
use crate::difficulty;
use crate::entities::{
    Bird, Boost, BoostKind, Cloud, Crumble, GameState, Particle, Platform, PlatformKind,
    SpeedRange, Star, Weather,
};
use crate::math::{chance, random_facing, uniform};

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Normal 65%, Sticky 20%, Disappearing 15%.
pub fn roll_platform_kind(rng: &mut impl Rng) -> PlatformKind {
    let r: f32 = rng.gen();
    if r < STICKY_CHANCE {
        PlatformKind::Sticky
    } else if r < STICKY_CHANCE + DISAPPEARING_CHANCE {
        PlatformKind::Disappearing(Crumble::Intact)
    } else {
        PlatformKind::Normal
    }
}

fn random_platform_x(rng: &mut impl Rng) -> f32 {
    uniform(rng, 0.0, SCREEN_WIDTH - PLATFORM_WIDTH)
}

/// A guaranteed Normal platform under the spawn point, then evenly spaced
/// random ones up the screen.
pub fn initial_platforms(rng: &mut impl Rng) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(PLATFORM_COUNT);
    platforms.push(Platform {
        x: PLAYER_START_X - PLATFORM_WIDTH / 2.0,
        y: SCREEN_HEIGHT - 30.0,
        kind: PlatformKind::Normal,
    });
    let spacing = SCREEN_HEIGHT / PLATFORM_COUNT as f32;
    for i in 1..PLATFORM_COUNT {
        let kind = roll_platform_kind(rng);
        platforms.push(Platform {
            x: random_platform_x(rng),
            y: i as f32 * spacing,
            kind,
        });
    }
    platforms
}

/// Move platform `idx` back to the top with a fresh kind, award a point,
/// and maybe drop a boost above it.
pub fn recycle_platform(state: &mut GameState, idx: usize, rng: &mut impl Rng) {
    // The slot is about to mean a different platform.
    if state.player.stuck_to == Some(idx) {
        state.player.stuck_to = None;
    }

    let x = random_platform_x(rng);
    let kind = roll_platform_kind(rng);
    let platform = &mut state.platforms[idx];
    platform.y = 0.0;
    platform.x = x;
    platform.kind = kind;
    trace!("platform {idx} recycled as {kind:?} at x={x:.1}");

    state.score += 1;
    difficulty::on_score_changed(state, rng);

    if chance(rng, BOOST_SPAWN_CHANCE) {
        let kind = BoostKind::ALL[rng.gen_range(0..BoostKind::ALL.len())];
        let platform = &state.platforms[idx];
        state.boosts.push(Boost {
            x: platform.x + PLATFORM_WIDTH / 4.0,
            y: platform.y - PLATFORM_HEIGHT * 2.0,
            kind,
            active: true,
        });
        debug!("{kind:?} boost spawned above platform {idx}");
    }
}

// ── Birds ─────────────────────────────────────────────────────────────────────

pub fn bird_speed(rng: &mut impl Rng, range: SpeedRange) -> f32 {
    uniform(rng, range.min, range.max)
}

pub fn spawn_bird(rng: &mut impl Rng, y: f32, range: SpeedRange) -> Bird {
    let facing = random_facing(rng);
    Bird {
        x: uniform(rng, 0.0, SCREEN_WIDTH),
        y,
        speed: bird_speed(rng, range),
        facing,
    }
}

pub fn initial_birds(rng: &mut impl Rng, range: SpeedRange) -> Vec<Bird> {
    (0..INITIAL_BIRD_COUNT)
        .map(|_| {
            let y = uniform(rng, 0.0, SCREEN_HEIGHT / 2.0);
            spawn_bird(rng, y, range)
        })
        .collect()
}

/// Number of birds other than `skip` within one bird height of `y`.
fn birds_near(birds: &[Bird], skip: usize, y: f32) -> usize {
    birds
        .iter()
        .enumerate()
        .filter(|(i, b)| *i != skip && (b.y - y).abs() < BIRD_HEIGHT)
        .count()
}

/// Pick a new height above the viewport for bird `idx`, avoiding bands that
/// already hold `MAX_BIRDS_PER_LINE` birds, then re-roll its heading and speed.
pub fn recycle_bird(birds: &mut [Bird], idx: usize, range: SpeedRange, rng: &mut impl Rng) {
    let mut placed = None;
    for _ in 0..BIRD_PLACEMENT_ATTEMPTS {
        let band = rng.gen_range(0..3) as f32;
        let y = -BIRD_HEIGHT - band * BIRD_HEIGHT;
        if birds_near(birds, idx, y) < MAX_BIRDS_PER_LINE {
            placed = Some(y);
            break;
        }
    }
    let y = placed.unwrap_or_else(|| -BIRD_HEIGHT * uniform(rng, 5.0, 10.0));

    let fresh = spawn_bird(rng, y, range);
    trace!("bird {idx} recycled to y={y:.1}");
    birds[idx] = fresh;
}

// ── Clouds & stars ────────────────────────────────────────────────────────────

fn random_cloud(rng: &mut impl Rng, y: f32) -> Cloud {
    Cloud {
        x: uniform(rng, 0.0, SCREEN_WIDTH),
        y,
        speed: uniform(rng, CLOUD_SPEED_MIN, CLOUD_SPEED_MAX),
        width: CLOUD_WIDTH * uniform(rng, 0.7, 1.3),
        height: CLOUD_HEIGHT * uniform(rng, 0.7, 1.3),
        alpha: uniform(rng, 0.5, 1.0),
    }
}

pub fn initial_clouds(rng: &mut impl Rng) -> Vec<Cloud> {
    (0..CLOUD_COUNT)
        .map(|_| {
            let y = uniform(rng, 0.0, SCREEN_HEIGHT * 0.7);
            random_cloud(rng, y)
        })
        .collect()
}

/// Bring a cloud that scrolled off the bottom back in above the viewport.
/// Its size is kept.
pub fn recycle_cloud(cloud: &mut Cloud, rng: &mut impl Rng) {
    cloud.y = -CLOUD_HEIGHT;
    cloud.x = uniform(rng, 0.0, SCREEN_WIDTH);
    cloud.speed = uniform(rng, CLOUD_SPEED_MIN, CLOUD_SPEED_MAX);
    cloud.alpha = uniform(rng, 0.5, 1.0);
}

/// Horizontal drift; a cloud leaving the right edge re-enters from the left.
pub fn drift_clouds(clouds: &mut [Cloud]) {
    for cloud in clouds {
        cloud.x += cloud.speed;
        if cloud.x > SCREEN_WIDTH {
            cloud.x = -cloud.width;
        }
    }
}

pub fn initial_stars(rng: &mut impl Rng) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: uniform(rng, 0.0, SCREEN_WIDTH),
            y: uniform(rng, 0.0, SCREEN_HEIGHT * 0.7),
            brightness: uniform(rng, 0.3, 1.0),
        })
        .collect()
}

// ── Weather particles ─────────────────────────────────────────────────────────

/// A fresh raindrop or snowflake just above the viewport, or `None` when the
/// sky is clear.
pub fn spawn_particle(weather: Weather, rng: &mut impl Rng) -> Option<Particle> {
    let x = uniform(rng, 0.0, SCREEN_WIDTH);
    match weather {
        Weather::Clear => None,
        Weather::Rain => Some(Particle {
            x,
            y: -5.0,
            vx: uniform(rng, 1.0, 3.0),
            vy: uniform(rng, 8.0, 12.0),
            size: uniform(rng, 2.0, 5.0),
            alpha: uniform(rng, 0.6, 1.0),
        }),
        Weather::Snow => Some(Particle {
            x,
            y: -5.0,
            vx: uniform(rng, -1.0, 1.0),
            vy: uniform(rng, 1.0, 3.0),
            size: uniform(rng, 2.0, 6.0),
            alpha: uniform(rng, 0.7, 1.0),
        }),
    }
}
