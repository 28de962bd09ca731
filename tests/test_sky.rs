mod common;

use common::make_state;
use doodle_jump::entities::Star;
use doodle_jump::math::*;
use doodle_jump::scene::Scene;
use doodle_jump::sky::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ── math ──────────────────────────────────────────────────────────────────────

#[test]
fn hsv_primaries() {
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(Hsv::new(120.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
    assert_eq!(hsv_to_rgb(Hsv::new(240.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
}

#[test]
fn hsv_hue_wraps_both_ways() {
    let red = Rgb::new(255, 0, 0);
    assert_eq!(hsv_to_rgb(Hsv::new(360.0, 1.0, 1.0)), red);
    assert_eq!(hsv_to_rgb(Hsv::new(-360.0, 1.0, 1.0)), red);
}

#[test]
fn hsv_clamps_saturation_and_value() {
    assert_eq!(hsv_to_rgb(Hsv::new(0.0, 2.0, 5.0)), Rgb::new(255, 0, 0));
    assert_eq!(hsv_to_rgb(Hsv::new(90.0, 0.5, -1.0)), Rgb::new(0, 0, 0));
}

#[test]
fn grey_has_equal_channels() {
    let grey = hsv_to_rgb(Hsv::new(200.0, 0.0, 0.5));
    assert_eq!(grey.r, grey.g);
    assert_eq!(grey.g, grey.b);
}

#[test]
fn smoothstep_is_clamped() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert_eq!(smoothstep(0.5), 0.5);
    assert_eq!(smoothstep(-2.0), 0.0);
    assert_eq!(smoothstep(3.0), 1.0);
}

#[test]
fn cosine_interpolation_hits_its_endpoints() {
    assert!(close(cosine_interpolate(10.0, 20.0, 0.0), 10.0));
    assert!(close(cosine_interpolate(10.0, 20.0, 1.0), 20.0));
    assert!(close(cosine_interpolate(10.0, 20.0, 0.5), 15.0));
}

#[test]
fn frac_stays_in_unit_range() {
    assert!(close(frac(2.25), 0.25));
    assert!(close(frac(-0.25), 0.75));
}

#[test]
fn scaled_saturates() {
    assert_eq!(Rgb::new(200, 100, 0).scaled(2.0), Rgb::new(255, 200, 0));
    assert_eq!(Rgb::new(200, 100, 10).scaled(0.5), Rgb::new(100, 50, 5));
}

// ── Day cycle ─────────────────────────────────────────────────────────────────

#[test]
fn time_of_day_follows_score_and_phase() {
    assert!(close(time_of_day(0, 0.25), 0.25));
    assert!(close(time_of_day(1_000, 0.25), 0.25));
    assert!(close(time_of_day(500, 0.75), 0.25));
}

#[test]
fn star_alpha_over_the_day() {
    assert!(close(star_alpha(0.0), 1.0));
    assert!(close(star_alpha(0.1), 0.5));
    assert_eq!(star_alpha(0.2), 0.0);
    assert_eq!(star_alpha(0.5), 0.0);
    assert!(close(star_alpha(0.8), 0.5));
    assert_eq!(star_alpha(0.9), 1.0);
    assert_eq!(star_alpha(0.99), 1.0);
}

#[test]
fn noon_sky_is_blue() {
    let params = gradient_params(0.5);
    assert!(close(params.base_hue, 205.0));
    assert_eq!(params.hue_range, 15.0);
    assert_eq!(params.mountain_depth, 0.2);
}

#[test]
fn gradient_eases_between_keyframes() {
    // Halfway from noon (205) to afternoon (215).
    assert!(close(gradient_params(0.6).base_hue, 210.0));
}

#[test]
fn late_night_wraps_toward_midnight() {
    let params = gradient_params(0.95);
    assert!(close(params.base_hue, 235.0));
    assert!(params.val_range[0] < params.val_range[1]);
}

#[test]
fn color_set_shape() {
    let colors = color_set_for_time(0.5);
    assert_eq!(colors.sky.len(), 7);
    assert_eq!(colors.mountains.len(), 3);
    // Daytime sky is bluer than it is red.
    assert!(colors.sky[0].b > colors.sky[0].r);
}

#[test]
fn horizon_is_darkened() {
    let colors = color_set_for_time(0.5);
    assert_eq!(sample_sky(&colors, 1.0), colors.sky[6].scaled(0.85));
    assert_eq!(sample_sky(&colors, 7.0), sample_sky(&colors, 1.0));
}

#[test]
fn twinkle_stays_in_band() {
    let star = Star { x: 37.0, y: 10.0, brightness: 1.0 };
    for i in 0..100 {
        let t = twinkle(i as f32 * 0.13, &star);
        assert!((0.4 - 1e-4..=1.0 + 1e-4).contains(&t));
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[test]
fn scene_derives_daylight_from_the_state() {
    let s = make_state();
    let scene = Scene::capture(&s);
    assert!(close(scene.time_of_day, 0.5));
    assert_eq!(scene.star_alpha, 0.0);
    assert!(!scene.is_night());
    assert_eq!(scene.colors, color_set_for_time(0.5));
}

#[test]
fn scene_at_midnight() {
    let mut s = make_state();
    s.day_phase = 0.0;
    let scene = Scene::capture(&s);
    assert!(scene.is_night());
    let star = Star { x: 0.0, y: 0.0, brightness: 0.5 };
    assert!(scene.star_brightness(&star) <= 0.5);
}

#[test]
fn stars_drift_slowly_with_the_camera() {
    let mut s = make_state();
    s.camera = 100.0;
    let scene = Scene::capture(&s);
    let star = Star { x: 10.0, y: 0.0, brightness: 1.0 };
    assert!(close(scene.star_screen_x(&star), 5.0));
    let edge = Star { x: 2.0, y: 0.0, brightness: 1.0 };
    assert!(close(scene.star_screen_x(&edge), 317.0));
}

#[test]
fn scene_reports_timers_in_seconds() {
    let mut s = make_state();
    s.player.flight = Some(120);
    let scene = Scene::capture(&s);
    assert_eq!(scene.flight_seconds(), Some(2.0));
    assert_eq!(scene.boost_seconds(), None);
}
