mod common;

use common::{idle, make_state, seeded_rng};
use doodle_jump::entities::*;
use doodle_jump::weather::*;

use rand::rngs::mock::StepRng;

#[test]
fn rain_saturates_at_its_cap() {
    let mut s = make_state();
    s.weather = Weather::Rain;
    // Every spawn roll succeeds; drops fall at the slowest speed.
    let mut rng = StepRng::new(0, 0);
    for _ in 0..55 {
        update(&mut s, &idle(), &mut rng);
    }
    assert_eq!(s.particles.len(), 50);
    assert!(s.particles.iter().all(|p| p.y <= 480.0));
}

#[test]
fn snow_saturates_at_its_cap() {
    let mut s = make_state();
    s.weather = Weather::Snow;
    let mut rng = StepRng::new(0, 0);
    for _ in 0..60 {
        update(&mut s, &idle(), &mut rng);
    }
    assert_eq!(s.particles.len(), 40);
}

#[test]
fn clear_sky_has_no_particles() {
    let mut s = make_state();
    let mut rng = StepRng::new(0, 0);
    for _ in 0..30 {
        update(&mut s, &idle(), &mut rng);
    }
    assert!(s.particles.is_empty());
}

#[test]
fn particles_below_the_viewport_are_dropped() {
    let mut s = make_state();
    s.weather = Weather::Snow;
    s.particles = vec![Particle { x: 10.0, y: 479.0, vx: 0.0, vy: 2.0, size: 3.0, alpha: 1.0 }];
    // Seeded so nothing new is guaranteed; only the old flake is checked.
    update(&mut s, &idle(), &mut seeded_rng());
    assert!(s.particles.iter().all(|p| p.y < 0.0));
}

#[test]
fn manual_cycle_clears_particles() {
    let mut s = make_state();
    s.weather = Weather::Rain;
    let mut rng = StepRng::new(0, 0);
    for _ in 0..10 {
        update(&mut s, &idle(), &mut rng);
    }
    assert_eq!(s.particles.len(), 10);

    let cycle = InputSnapshot { cycle_weather: true, ..idle() };
    update(&mut s, &cycle, &mut rng);
    assert_eq!(s.weather, Weather::Snow);
    // Only the flake spawned after the switch survives.
    assert_eq!(s.particles.len(), 1);
    assert!(s.particles[0].vy <= 3.0);
}

#[test]
fn cycle_order() {
    assert_eq!(Weather::Clear.next(), Weather::Rain);
    assert_eq!(Weather::Rain.next(), Weather::Snow);
    assert_eq!(Weather::Snow.next(), Weather::Clear);
}

#[test]
fn countdown_triggers_a_random_change() {
    let mut s = make_state();
    s.weather = Weather::Snow;
    s.weather_ticks_left = 1;
    s.particles = vec![Particle { x: 10.0, y: 100.0, vx: 0.0, vy: 2.0, size: 3.0, alpha: 1.0 }];
    // gen_range on StepRng(0, 0) picks the first variant.
    update(&mut s, &idle(), &mut StepRng::new(0, 0));
    assert_eq!(s.weather, Weather::Clear);
    assert!(s.particles.is_empty());
    assert_eq!(s.weather_ticks_left, 900);
}

#[test]
fn set_weather_rerolls_the_timer() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    set_weather(&mut s, Weather::Rain, &mut rng);
    assert_eq!(s.weather, Weather::Rain);
    assert!((900..=2_100).contains(&s.weather_ticks_left));
}

#[test]
fn seconds_round_to_ticks() {
    assert_eq!(secs_to_ticks(1.0), 60);
    assert_eq!(secs_to_ticks(0.5), 30);
    assert_eq!(secs_to_ticks(0.0), 0);
}
