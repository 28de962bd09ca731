//! Time-of-day colour model.  The day cycle is driven by score, not by the
//! clock, so climbing faster makes the sun set sooner.

use std::f32::consts::PI;

use crate::constants::{DAY_CYCLE_LENGTH, SUNRISE_END, SUNSET_END, SUNSET_START};
use crate::entities::Star;
use crate::math::{cosine_interpolate, frac, hsv_to_rgb, lerp_rgb_gamma, smoothstep, Hsv, Rgb};

pub const SKY_STOPS: usize = 7;
pub const MOUNTAIN_TINTS: usize = 3;

struct Keyframe {
    time: f32,
    /// Reference palette (top, middle, bottom).  The rendered sky is
    /// synthesised from `mountain` instead.
    #[allow(dead_code)]
    sky: [Hsv; 3],
    mountain: Hsv,
}

const KEYFRAMES: [Keyframe; 8] = [
    // Midnight
    Keyframe {
        time: 0.0,
        sky: [Hsv::new(230.0, 0.6, 0.2), Hsv::new(235.0, 0.5, 0.15), Hsv::new(240.0, 0.4, 0.1)],
        mountain: Hsv::new(235.0, 0.4, 0.1),
    },
    // Pre-dawn
    Keyframe {
        time: 0.2,
        sky: [Hsv::new(240.0, 0.5, 0.3), Hsv::new(260.0, 0.4, 0.2), Hsv::new(280.0, 0.3, 0.15)],
        mountain: Hsv::new(250.0, 0.3, 0.15),
    },
    // Dawn
    Keyframe {
        time: 0.3,
        sky: [Hsv::new(200.0, 0.4, 0.6), Hsv::new(35.0, 0.7, 0.7), Hsv::new(20.0, 0.8, 0.8)],
        mountain: Hsv::new(30.0, 0.5, 0.3),
    },
    // Morning
    Keyframe {
        time: 0.4,
        sky: [Hsv::new(195.0, 0.4, 0.9), Hsv::new(200.0, 0.3, 0.8), Hsv::new(205.0, 0.2, 0.7)],
        mountain: Hsv::new(200.0, 0.3, 0.4),
    },
    // Noon
    Keyframe {
        time: 0.5,
        sky: [Hsv::new(210.0, 0.3, 0.9), Hsv::new(205.0, 0.2, 0.85), Hsv::new(200.0, 0.1, 0.8)],
        mountain: Hsv::new(205.0, 0.2, 0.5),
    },
    // Afternoon
    Keyframe {
        time: 0.7,
        sky: [Hsv::new(210.0, 0.4, 0.8), Hsv::new(215.0, 0.3, 0.7), Hsv::new(220.0, 0.2, 0.6)],
        mountain: Hsv::new(215.0, 0.3, 0.4),
    },
    // Sunset
    Keyframe {
        time: 0.8,
        sky: [Hsv::new(200.0, 0.5, 0.6), Hsv::new(30.0, 0.8, 0.7), Hsv::new(15.0, 0.9, 0.8)],
        mountain: Hsv::new(20.0, 0.6, 0.3),
    },
    // Night
    Keyframe {
        time: 0.9,
        sky: [Hsv::new(230.0, 0.6, 0.3), Hsv::new(240.0, 0.5, 0.2), Hsv::new(250.0, 0.4, 0.1)],
        mountain: Hsv::new(235.0, 0.4, 0.15),
    },
];

/// Knobs for synthesising one `ColorSet`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientParams {
    pub base_hue: f32,
    pub hue_range: f32,
    pub sat_range: [f32; 2],
    pub val_range: [f32; 2],
    pub mountain_depth: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSet {
    /// Top of the screen first.
    pub sky: [Rgb; SKY_STOPS],
    /// Nearest layer first.
    pub mountains: [Rgb; MOUNTAIN_TINTS],
}

/// Position in the day cycle, `[0, 1)`.
pub fn time_of_day(score: u32, phase: f32) -> f32 {
    frac(score as f32 / DAY_CYCLE_LENGTH + phase)
}

/// Indices of the keyframes bracketing `t` and the eased fraction between
/// them.  Past the last keyframe the cycle wraps back to midnight at 1.0.
fn bracket(t: f32) -> (usize, usize, f32) {
    let last = KEYFRAMES.len() - 1;
    let from = KEYFRAMES
        .iter()
        .rposition(|k| k.time <= t)
        .unwrap_or(0);
    let (to, end) = if from == last {
        (0, 1.0)
    } else {
        (from + 1, KEYFRAMES[from + 1].time)
    };
    let span = end - KEYFRAMES[from].time;
    let local = (t - KEYFRAMES[from].time) / span;
    (from, to, smoothstep(local))
}

pub fn gradient_params(t: f32) -> GradientParams {
    let (from, to, f) = bracket(t);
    let a = KEYFRAMES[from].mountain;
    let b = KEYFRAMES[to].mountain;
    GradientParams {
        base_hue: cosine_interpolate(a.h, b.h, f),
        hue_range: 15.0,
        sat_range: [
            cosine_interpolate(a.s - 0.1, b.s - 0.1, f),
            cosine_interpolate(a.s + 0.1, b.s + 0.1, f),
        ],
        val_range: [
            cosine_interpolate(a.v - 0.1, b.v - 0.1, f),
            cosine_interpolate(a.v + 0.1, b.v + 0.1, f),
        ],
        mountain_depth: 0.2,
    }
}

pub fn generate_color_set(params: &GradientParams) -> ColorSet {
    let mut sky = [Rgb::default(); SKY_STOPS];
    for (i, stop) in sky.iter_mut().enumerate() {
        let p = i as f32 / (SKY_STOPS - 1) as f32;
        let eased = smoothstep(p);

        let mut hue = params.base_hue + params.hue_range * 0.5 * (p * PI).sin();
        let mut sat = params.sat_range[0] + (params.sat_range[1] - params.sat_range[0]) * eased;
        let mut val = params.val_range[1] - (params.val_range[1] - params.val_range[0]) * eased;

        hue += 2.0 * (p * 2.0 * PI).sin();
        sat += 0.05 * (p * 3.0 * PI).sin();
        val += 0.05 * (p * 2.0 * PI).sin();

        *stop = hsv_to_rgb(Hsv::new(hue, sat, val));
    }

    let mut mountains = [Rgb::default(); MOUNTAIN_TINTS];
    for (i, tint) in mountains.iter_mut().enumerate() {
        let p = i as f32 / (MOUNTAIN_TINTS - 1) as f32;
        *tint = hsv_to_rgb(Hsv::new(
            params.base_hue + 5.0 * p,
            params.sat_range[0] * (1.0 - 0.2 * p),
            params.val_range[0] * (1.0 - params.mountain_depth * p),
        ));
    }

    ColorSet { sky, mountains }
}

pub fn color_set_for_time(t: f32) -> ColorSet {
    generate_color_set(&gradient_params(t))
}

/// Sky colour at `progress` (0 = top, 1 = bottom), with a slight darkening
/// toward the horizon.
pub fn sample_sky(colors: &ColorSet, progress: f32) -> Rgb {
    let progress = progress.clamp(0.0, 1.0);
    let pos = progress * (SKY_STOPS - 1) as f32;
    let i = pos as usize;
    let base = if i >= SKY_STOPS - 1 {
        colors.sky[SKY_STOPS - 1]
    } else {
        lerp_rgb_gamma(colors.sky[i], colors.sky[i + 1], smoothstep(pos - i as f32))
    };
    base.scaled(1.0 - 0.15 * progress * progress)
}

// ── Stars ─────────────────────────────────────────────────────────────────────

/// Star visibility: fades in over sunset, full at night, fades out over
/// sunrise, hidden during the day.
pub fn star_alpha(t: f32) -> f32 {
    if t < SUNRISE_END {
        1.0 - t / SUNRISE_END
    } else if t < SUNSET_START {
        0.0
    } else if t < SUNSET_END {
        (t - SUNSET_START) / (SUNSET_END - SUNSET_START)
    } else {
        1.0
    }
}

pub fn twinkle(game_time: f32, star: &Star) -> f32 {
    0.7 + 0.3 * (game_time * 2.0 + star.x * 0.1).sin()
}
