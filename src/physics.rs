//! Player physics, platform behaviour, collisions and the camera scroll.
//!
//! Each step mutates the working copy of the state in place.  The frame
//! controller calls them in a fixed order: landing must run before the
//! scroll so a bounce takes effect before positions are shifted.

use log::{debug, info};
use rand::Rng;

use crate::constants::{
    BIRD_HEIGHT, BIRD_WIDTH, BOOSTED_MOVE_SPEED, BOOST_DURATION_TICKS, BREAK_DURATION_TICKS,
    BULLET_SPEED, FLY_DURATION_TICKS, FLY_VELOCITY, GRAVITY, JUMP_BOOST_FACTOR, JUMP_VELOCITY,
    MOVE_SPEED, PLATFORM_HEIGHT, PLATFORM_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH, SCROLL_LINE, SHOOT_COOLDOWN_TICKS, STICKY_RELEASE_FACTOR,
};
use crate::entities::{
    ActiveBoost, Bird, BoostKind, Bullet, Crumble, Facing, GameState, GameStatus, InputSnapshot,
    Platform, PlatformKind, Player,
};
use crate::world;

/// Where a defeated bird is parked; the scroll brings it back down.
pub const DEFEATED_BIRD_Y: f32 = -BIRD_HEIGHT * 2.0;

// ── Timers ────────────────────────────────────────────────────────────────────

/// A fresh `up` press frees the player from a sticky platform with an
/// amplified jump.
pub fn release_from_sticky(player: &mut Player, input: &InputSnapshot) {
    if input.up && !player.jump_held && player.stuck_to.take().is_some() {
        player.vy = JUMP_VELOCITY * STICKY_RELEASE_FACTOR;
        debug!("released from sticky platform");
    }
    player.jump_held = input.up;
}

/// Count down breaking platforms; contact plays no part here.
pub fn advance_crumbling(platforms: &mut [Platform]) {
    for platform in platforms {
        if let PlatformKind::Disappearing(Crumble::Breaking { ticks_left }) = platform.kind {
            let left = ticks_left.saturating_sub(1);
            platform.kind = PlatformKind::Disappearing(if left == 0 {
                Crumble::Broken
            } else {
                Crumble::Breaking { ticks_left: left }
            });
        }
    }
}

/// Boost, flight and shooting countdowns.
pub fn tick_player_timers(player: &mut Player) {
    player.boost = player.boost.and_then(|b| {
        let left = b.ticks_left.saturating_sub(1);
        (left > 0).then_some(ActiveBoost { ticks_left: left, ..b })
    });
    player.flight = player
        .flight
        .and_then(|t| Some(t.saturating_sub(1)).filter(|&left| left > 0));
    player.shoot_cooldown = player.shoot_cooldown.saturating_sub(1);
}

/// The fly key grants a flight window when none is running.
pub fn toggle_flight(player: &mut Player, input: &InputSnapshot) {
    if input.fly && player.flight.is_none() {
        player.flight = Some(FLY_DURATION_TICKS);
        debug!("flight enabled");
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Vertical integration: pinned while stuck, constant climb while flying
/// with `up` held, gravity otherwise.
pub fn integrate(player: &mut Player, platforms: &[Platform], input: &InputSnapshot) {
    if let Some(idx) = player.stuck_to {
        player.vy = 0.0;
        player.y = platforms[idx].y - PLAYER_HEIGHT / 2.0;
        return;
    }
    if player.flight.is_some() && input.up {
        player.vy = FLY_VELOCITY;
    } else {
        player.vy += GRAVITY;
    }
    player.y += player.vy;
}

/// Horizontal movement with teleport wrap at the screen edges.
pub fn steer(player: &mut Player, input: &InputSnapshot) {
    let speed = if player.has_boost(BoostKind::Speed) {
        BOOSTED_MOVE_SPEED
    } else {
        MOVE_SPEED
    };
    if input.left {
        player.x -= speed;
        player.facing = Facing::Left;
        if player.x < 0.0 {
            player.x = SCREEN_WIDTH;
        }
    }
    if input.right {
        player.x += speed;
        player.facing = Facing::Right;
        if player.x > SCREEN_WIDTH {
            player.x = 0.0;
        }
    }
}

/// Fire one bullet in the facing direction if the cooldown allows.
pub fn fire(state: &mut GameState, input: &InputSnapshot) {
    let player = &mut state.player;
    if !input.shoot || player.shoot_cooldown > 0 {
        return;
    }
    let facing = player.facing;
    state.bullets.push(Bullet {
        x: player.x + facing.sign() * PLAYER_WIDTH / 2.0,
        y: player.y,
        facing,
        speed: BULLET_SPEED,
        active: true,
    });
    player.shoot_cooldown = SHOOT_COOLDOWN_TICKS;
}

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Feet inside the platform's top band, with a narrowed player box.
fn touches(player: &Player, platform: &Platform) -> bool {
    let feet = player.y + PLAYER_HEIGHT / 2.0;
    player.x + PLAYER_WIDTH / 3.0 >= platform.x
        && player.x - PLAYER_WIDTH / 3.0 <= platform.x + PLATFORM_WIDTH
        && feet >= platform.y
        && feet <= platform.y + PLATFORM_HEIGHT
}

fn bounce_velocity(player: &Player) -> f32 {
    if player.has_boost(BoostKind::Jump) {
        JUMP_VELOCITY * JUMP_BOOST_FACTOR
    } else {
        JUMP_VELOCITY
    }
}

/// Resolve landings.  Only a falling player can land.
pub fn land_on_platforms(player: &mut Player, platforms: &mut [Platform]) {
    for (idx, platform) in platforms.iter_mut().enumerate() {
        if player.vy <= 0.0 || !touches(player, platform) {
            continue;
        }
        match platform.kind {
            PlatformKind::Disappearing(Crumble::Broken) => {}
            PlatformKind::Sticky => {
                player.stuck_to = Some(idx);
                player.vy = 0.0;
                player.y = platform.y - PLAYER_HEIGHT / 2.0;
                debug!("stuck to platform {idx}");
            }
            PlatformKind::Disappearing(Crumble::Intact) => {
                platform.kind = PlatformKind::Disappearing(Crumble::Breaking {
                    ticks_left: BREAK_DURATION_TICKS,
                });
                player.vy = bounce_velocity(player);
            }
            PlatformKind::Normal | PlatformKind::Disappearing(Crumble::Breaking { .. }) => {
                player.vy = bounce_velocity(player);
            }
        }
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

/// Keep the player at the scroll line by moving the world down, recycling
/// whatever falls out of the bottom.  Returns the distance scrolled.
pub fn scroll_camera(state: &mut GameState, rng: &mut impl Rng) -> f32 {
    if state.player.y >= SCROLL_LINE {
        return 0.0;
    }
    let diff = SCROLL_LINE - state.player.y;
    state.camera += diff;
    state.player.y += diff;

    // Before platforms, so boosts dropped by this pass's recycles stay put.
    for boost in &mut state.boosts {
        boost.y += diff;
    }
    state.boosts.retain(|b| b.y <= SCREEN_HEIGHT);

    for idx in 0..state.platforms.len() {
        state.platforms[idx].y += diff;
        if state.platforms[idx].y > SCREEN_HEIGHT {
            world::recycle_platform(state, idx, rng);
        }
    }

    for idx in 0..state.birds.len() {
        state.birds[idx].y += diff;
        if state.birds[idx].y > SCREEN_HEIGHT {
            let range = state.bird_speed;
            world::recycle_bird(&mut state.birds, idx, range, rng);
        }
    }

    for cloud in &mut state.clouds {
        cloud.y += diff;
        if cloud.y > SCREEN_HEIGHT {
            world::recycle_cloud(cloud, rng);
        }
    }

    diff
}

// ── Birds & bullets ───────────────────────────────────────────────────────────

fn hits_player(player: &Player, bird: &Bird) -> bool {
    player.x + PLAYER_WIDTH / 4.0 >= bird.x
        && player.x - PLAYER_WIDTH / 4.0 <= bird.x + BIRD_WIDTH
        && player.y + PLAYER_HEIGHT / 4.0 >= bird.y
        && player.y - PLAYER_HEIGHT / 4.0 <= bird.y + BIRD_HEIGHT
}

/// Move birds across the screen and resolve contact with the player.
pub fn fly_birds(state: &mut GameState) {
    let shielded = state.player.has_boost(BoostKind::Shield);
    for bird in &mut state.birds {
        bird.x += bird.speed * bird.facing.sign();
        match bird.facing {
            Facing::Left if bird.x < -BIRD_WIDTH => bird.x = SCREEN_WIDTH,
            Facing::Right if bird.x > SCREEN_WIDTH => bird.x = -BIRD_WIDTH,
            _ => {}
        }

        if !hits_player(&state.player, bird) {
            continue;
        }
        if shielded {
            bird.y = DEFEATED_BIRD_Y;
            debug!("shield knocked a bird away");
        } else if state.status == GameStatus::Playing {
            state.status = GameStatus::GameOver;
            info!("hit by a bird at score {}", state.score);
        }
    }
}

fn bullet_hits(x: f32, y: f32, bird: &Bird) -> bool {
    x >= bird.x && x <= bird.x + BIRD_WIDTH && y >= bird.y && y <= bird.y + BIRD_HEIGHT
}

/// Advance bullets; drop those off-screen or spent on a bird.
pub fn move_bullets(state: &mut GameState) {
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = &mut state.bullets[i];
        bullet.x += bullet.speed * bullet.facing.sign();
        let (x, y) = (bullet.x, bullet.y);
        if x < 0.0 || x > SCREEN_WIDTH {
            bullet.active = false;
        } else if let Some(bird) = state.birds.iter_mut().find(|b| bullet_hits(x, y, b)) {
            bird.y = DEFEATED_BIRD_Y;
            bullet.active = false;
            debug!("bullet downed a bird");
        }

        if state.bullets[i].active {
            i += 1;
        } else {
            state.bullets.swap_remove(i);
        }
    }
}

// ── Boosts & terminal check ───────────────────────────────────────────────────

fn touches_boost(player: &Player, x: f32, y: f32) -> bool {
    player.x + PLAYER_WIDTH / 3.0 >= x
        && player.x - PLAYER_WIDTH / 3.0 <= x + PLATFORM_WIDTH / 2.0
        && player.y + PLAYER_HEIGHT / 2.0 >= y
        && player.y - PLAYER_HEIGHT / 2.0 <= y + PLATFORM_HEIGHT * 2.0
}

/// Pick up touched boosts; a Jump boost also opens a flight window.
pub fn collect_boosts(state: &mut GameState) {
    let player = &mut state.player;
    for boost in &mut state.boosts {
        if !boost.active || !touches_boost(player, boost.x, boost.y) {
            continue;
        }
        boost.active = false;
        player.boost = Some(ActiveBoost {
            kind: boost.kind,
            ticks_left: BOOST_DURATION_TICKS,
        });
        if boost.kind == BoostKind::Jump {
            player.flight = Some(FLY_DURATION_TICKS);
        }
        debug!("picked up {:?} boost", boost.kind);
    }

    let mut i = 0;
    while i < state.boosts.len() {
        if state.boosts[i].active {
            i += 1;
        } else {
            state.boosts.swap_remove(i);
        }
    }
}

/// Falling out of the bottom ends the run.
pub fn check_fall(state: &mut GameState) {
    if state.player.y > SCREEN_HEIGHT && state.status == GameStatus::Playing {
        state.status = GameStatus::GameOver;
        info!("fell out of the world at score {}", state.score);
    }
}
