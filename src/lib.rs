pub mod compute;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod entities;
pub mod math;
pub mod physics;
pub mod scene;
pub mod sky;
pub mod weather;
pub mod world;
