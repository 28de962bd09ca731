//! Read-only view of a session for the renderer: the raw state plus the
//! derived sky colours, so drawing code never recomputes game rules.

use crate::constants::{SCREEN_WIDTH, TICKS_PER_SECOND};
use crate::entities::{GameState, Star};
use crate::sky::{self, ColorSet};

/// Horizontal parallax factor applied to stars against the camera.
const STAR_PARALLAX: f32 = 0.05;

pub struct Scene<'a> {
    pub state: &'a GameState,
    pub time_of_day: f32,
    pub colors: ColorSet,
    pub star_alpha: f32,
}

impl<'a> Scene<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let time_of_day = sky::time_of_day(state.score, state.day_phase);
        Self {
            state,
            time_of_day,
            colors: sky::color_set_for_time(time_of_day),
            star_alpha: sky::star_alpha(time_of_day),
        }
    }

    pub fn game_time(&self) -> f32 {
        self.state.game_time()
    }

    /// Stars are out for most of the frame's sky.
    pub fn is_night(&self) -> bool {
        self.star_alpha > 0.5
    }

    /// Final star intensity in `[0, 1]`: base brightness, twinkle, visibility.
    pub fn star_brightness(&self, star: &Star) -> f32 {
        star.brightness * sky::twinkle(self.game_time(), star) * self.star_alpha
    }

    pub fn star_screen_x(&self, star: &Star) -> f32 {
        (star.x - self.state.camera * STAR_PARALLAX).rem_euclid(SCREEN_WIDTH)
    }

    pub fn boost_seconds(&self) -> Option<f32> {
        self.state
            .player
            .boost
            .map(|b| b.ticks_left as f32 / TICKS_PER_SECOND as f32)
    }

    pub fn flight_seconds(&self) -> Option<f32> {
        self.state
            .player
            .flight
            .map(|t| t as f32 / TICKS_PER_SECOND as f32)
    }
}
