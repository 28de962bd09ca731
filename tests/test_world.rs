mod common;

use common::{make_bird, make_state, seeded_rng};
use doodle_jump::difficulty::speed_range;
use doodle_jump::entities::*;
use doodle_jump::world::*;

use rand::rngs::mock::StepRng;

// ── Initial layout ────────────────────────────────────────────────────────────

#[test]
fn initial_platforms_are_evenly_spaced() {
    let platforms = initial_platforms(&mut seeded_rng());
    assert_eq!(platforms.len(), 10);
    for (i, p) in platforms.iter().enumerate().skip(1) {
        assert_eq!(p.y, i as f32 * 48.0);
        assert!(p.x >= 0.0 && p.x < 260.0);
    }
}

#[test]
fn initial_birds_start_in_the_upper_half() {
    let birds = initial_birds(&mut seeded_rng(), speed_range(0));
    assert_eq!(birds.len(), 1);
    assert!(birds[0].y >= 0.0 && birds[0].y < 240.0);
    assert!(birds[0].speed >= 0.7 && birds[0].speed <= 1.5);
}

#[test]
fn initial_decoration_pools() {
    let mut rng = seeded_rng();
    let clouds = initial_clouds(&mut rng);
    let stars = initial_stars(&mut rng);
    assert_eq!(clouds.len(), 5);
    assert_eq!(stars.len(), 100);
    assert!(clouds.iter().all(|c| c.speed >= 0.2 && c.speed <= 1.0));
    assert!(stars.iter().all(|s| s.brightness >= 0.3 && s.brightness <= 1.0));
}

// ── Platform kinds ────────────────────────────────────────────────────────────

#[test]
fn lowest_roll_is_sticky() {
    // StepRng(0, 0) makes every f32 draw 0.0.
    assert_eq!(roll_platform_kind(&mut StepRng::new(0, 0)), PlatformKind::Sticky);
}

#[test]
fn platform_kind_mix_is_roughly_right() {
    let mut rng = seeded_rng();
    let (mut normal, mut sticky, mut crumbly) = (0, 0, 0);
    for _ in 0..10_000 {
        match roll_platform_kind(&mut rng) {
            PlatformKind::Normal => normal += 1,
            PlatformKind::Sticky => sticky += 1,
            PlatformKind::Disappearing(Crumble::Intact) => crumbly += 1,
            other => panic!("fresh platform rolled as {other:?}"),
        }
    }
    assert!((6_000..7_000).contains(&normal));
    assert!((1_600..2_400).contains(&sticky));
    assert!((1_100..1_900).contains(&crumbly));
}

// ── Platform recycling ────────────────────────────────────────────────────────

#[test]
fn recycle_platform_moves_it_to_the_top_and_scores() {
    let mut s = make_state();
    recycle_platform(&mut s, 4, &mut seeded_rng());
    assert_eq!(s.platforms[4].y, 0.0);
    assert_eq!(s.score, 1);
    assert_eq!(s.platforms.len(), 10);
}

#[test]
fn recycle_platform_releases_a_stuck_player() {
    let mut s = make_state();
    s.player.stuck_to = Some(2);
    recycle_platform(&mut s, 2, &mut seeded_rng());
    assert_eq!(s.player.stuck_to, None);
}

#[test]
fn recycling_another_slot_keeps_the_player_stuck() {
    let mut s = make_state();
    s.player.stuck_to = Some(3);
    recycle_platform(&mut s, 2, &mut seeded_rng());
    assert_eq!(s.player.stuck_to, Some(3));
}

#[test]
fn recycle_platform_can_drop_a_boost() {
    let mut s = make_state();
    recycle_platform(&mut s, 0, &mut StepRng::new(0, 0));
    assert_eq!(s.boosts.len(), 1);
    let boost = &s.boosts[0];
    assert_eq!(boost.x, s.platforms[0].x + 15.0);
    assert_eq!(boost.y, -20.0);
    assert!(boost.active);
}

// ── Birds ─────────────────────────────────────────────────────────────────────

#[test]
fn recycle_bird_lands_above_the_viewport() {
    let mut birds = vec![make_bird(0.0, 500.0)];
    recycle_bird(&mut birds, 0, speed_range(0), &mut seeded_rng());
    assert!([-30.0, -60.0, -90.0].contains(&birds[0].y));
}

#[test]
fn crowded_lines_push_the_bird_far_up() {
    let mut birds: Vec<Bird> = [-30.0, -30.0, -60.0, -60.0, -90.0, -90.0]
        .iter()
        .map(|&y| make_bird(100.0, y))
        .collect();
    birds.push(make_bird(0.0, 500.0));
    recycle_bird(&mut birds, 6, speed_range(0), &mut seeded_rng());
    let y = birds[6].y;
    assert!(y <= -150.0 && y > -300.0, "fallback height {y}");
}

#[test]
fn recycle_bird_rerolls_speed_within_the_range() {
    let range = speed_range(5);
    let mut birds = vec![make_bird(0.0, 500.0)];
    let mut rng = seeded_rng();
    for _ in 0..50 {
        birds[0].y = 500.0;
        recycle_bird(&mut birds, 0, range, &mut rng);
        assert!(birds[0].speed >= range.min && birds[0].speed <= range.max);
    }
}

// ── Clouds ────────────────────────────────────────────────────────────────────

fn make_cloud(x: f32, y: f32) -> Cloud {
    Cloud {
        x,
        y,
        speed: 1.0,
        width: 80.0,
        height: 40.0,
        alpha: 0.8,
    }
}

#[test]
fn clouds_wrap_to_the_left() {
    let mut clouds = vec![make_cloud(319.9, 50.0), make_cloud(10.0, 50.0)];
    drift_clouds(&mut clouds);
    assert_eq!(clouds[0].x, -80.0);
    assert_eq!(clouds[1].x, 11.0);
}

#[test]
fn recycled_cloud_reenters_from_the_top() {
    let mut cloud = make_cloud(100.0, 490.0);
    recycle_cloud(&mut cloud, &mut seeded_rng());
    assert_eq!(cloud.y, -40.0);
    assert_eq!(cloud.width, 80.0);
    assert!(cloud.speed >= 0.2 && cloud.speed <= 1.0);
}

// ── Particles ─────────────────────────────────────────────────────────────────

#[test]
fn clear_sky_spawns_nothing() {
    assert!(spawn_particle(Weather::Clear, &mut seeded_rng()).is_none());
}

#[test]
fn rain_falls_faster_than_snow() {
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let rain = spawn_particle(Weather::Rain, &mut rng).expect("rain particle");
        let snow = spawn_particle(Weather::Snow, &mut rng).expect("snow particle");
        assert!(rain.vy >= 8.0 && rain.vy <= 12.0);
        assert!(snow.vy >= 1.0 && snow.vy <= 3.0);
        assert_eq!(rain.y, -5.0);
    }
}
