//! Small numeric helpers shared by the generator and the sky model.

use std::f32::consts::PI;

use rand::Rng;

use crate::entities::Facing;

// ── Random draws ──────────────────────────────────────────────────────────────

/// `true` with probability `p`.
pub fn chance(rng: &mut impl Rng, p: f32) -> bool {
    rng.gen::<f32>() < p
}

/// Uniform draw in `[lo, hi)`.
pub fn uniform(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

pub fn random_facing(rng: &mut impl Rng) -> Facing {
    if chance(rng, 0.5) {
        Facing::Left
    } else {
        Facing::Right
    }
}

// ── Interpolation ─────────────────────────────────────────────────────────────

/// Hermite ease on `[0, 1]`; inputs outside are clamped first.
pub fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

pub fn cosine_interpolate(a: f32, b: f32, t: f32) -> f32 {
    let f = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

/// Fractional part in `[0, 1)`, also for negative inputs.
pub fn frac(x: f32) -> f32 {
    x.rem_euclid(1.0)
}

// ── Colour ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Degrees; any value, wrapped on conversion.
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, saturating at 255.
    pub fn scaled(self, factor: f32) -> Self {
        let ch = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h.rem_euclid(360.0);
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Blend two colours in linear light (gamma 2.2).
pub fn lerp_rgb_gamma(a: Rgb, b: Rgb, t: f32) -> Rgb {
    const GAMMA: f32 = 2.2;
    let mix = |x: u8, y: u8| {
        let lin = (x as f32 / 255.0).powf(GAMMA) * (1.0 - t) + (y as f32 / 255.0).powf(GAMMA) * t;
        (lin.powf(1.0 / GAMMA) * 255.0) as u8
    };
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}
