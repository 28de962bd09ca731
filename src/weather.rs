//! Weather state machine and the rain/snow particle spawner.  Independent of
//! the time of day.

use log::info;
use rand::Rng;

use crate::constants::{
    RAIN_SPAWN_CHANCE, SCREEN_HEIGHT, SNOW_SPAWN_CHANCE, TICKS_PER_SECOND, WEATHER_MAX_SECS,
    WEATHER_MIN_SECS,
};
use crate::entities::{GameState, InputSnapshot, Weather};
use crate::math::{chance, uniform};
use crate::world;

/// Ticks until the next random change, 15–35 s.
pub fn roll_weather_timer(rng: &mut impl Rng) -> u32 {
    secs_to_ticks(uniform(rng, WEATHER_MIN_SECS, WEATHER_MAX_SECS))
}

pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs * TICKS_PER_SECOND as f32).round() as u32
}

fn spawn_chance(weather: Weather) -> f32 {
    match weather {
        Weather::Clear => 0.0,
        Weather::Rain => RAIN_SPAWN_CHANCE,
        Weather::Snow => SNOW_SPAWN_CHANCE,
    }
}

/// Switch weather, dropping every live particle.
pub fn set_weather(state: &mut GameState, weather: Weather, rng: &mut impl Rng) {
    state.weather = weather;
    state.weather_ticks_left = roll_weather_timer(rng);
    state.particles.clear();
    info!("weather is now {weather:?}");
}

/// One tick of weather: manual cycling, the countdown, spawning and moving
/// particles.
pub fn update(state: &mut GameState, input: &InputSnapshot, rng: &mut impl Rng) {
    if input.cycle_weather {
        let next = state.weather.next();
        set_weather(state, next, rng);
    }

    state.weather_ticks_left = state.weather_ticks_left.saturating_sub(1);
    if state.weather_ticks_left == 0 {
        let pick = Weather::ALL[rng.gen_range(0..Weather::ALL.len())];
        set_weather(state, pick, rng);
    }

    if state.particles.len() < state.weather.particle_cap()
        && chance(rng, spawn_chance(state.weather))
    {
        if let Some(particle) = world::spawn_particle(state.weather, rng) {
            state.particles.push(particle);
        }
    }

    let mut i = 0;
    while i < state.particles.len() {
        let p = &mut state.particles[i];
        p.x += p.vx;
        p.y += p.vy;
        if p.y > SCREEN_HEIGHT {
            state.particles.swap_remove(i);
        } else {
            i += 1;
        }
    }
}
