//! Gameplay tunables.
//!
//! Everything the simulation treats as a constant lives here so tests can
//! pin behaviour (e.g. `enemy_chance = 0.0`) without touching the rules.

use std::time::Duration;

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// World units per second at full input.
    pub player_speed: f32,
    /// Edge length of the player square after a reset.
    pub player_size: f32,
    /// The player grows every `growth_interval` points.
    pub growth_interval: u32,
    /// Added to both player axes on each growth step.
    pub growth_increment: f32,
    pub target_size_min: f32,
    pub target_size_max: f32,
    /// Probability that a freshly spawned target is an enemy.
    pub enemy_chance: f64,
    /// Screen pixels per world unit.
    pub zoom: f32,
    /// Upper bound applied to the clock delta before it reaches `tick`.
    pub max_frame_dt: f32,
    /// Target frame period for the terminal driver.
    pub frame: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 100.0,
            player_size: 10.0,
            growth_interval: 5,
            growth_increment: 2.0,
            target_size_min: 5.0,
            target_size_max: 20.0,
            enemy_chance: 0.3,
            zoom: 0.5,
            max_frame_dt: 0.1,
            frame: Duration::from_millis(33), // ≈30 FPS
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(GameError::InvalidConfig("player_speed must be finite and >= 0"));
        }
        if !(self.player_size > 0.0) {
            return Err(GameError::InvalidConfig("player_size must be > 0"));
        }
        if self.growth_interval == 0 {
            return Err(GameError::InvalidConfig("growth_interval must be > 0"));
        }
        if !(self.target_size_min > 0.0 && self.target_size_min <= self.target_size_max) {
            return Err(GameError::InvalidConfig(
                "target sizes must satisfy 0 < min <= max",
            ));
        }
        if !(0.0..=1.0).contains(&self.enemy_chance) {
            return Err(GameError::InvalidConfig("enemy_chance must be within [0, 1]"));
        }
        if !(self.zoom > 0.0 && self.zoom.is_finite()) {
            return Err(GameError::InvalidConfig("zoom must be finite and > 0"));
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(GameError::InvalidConfig("max_frame_dt must be > 0"));
        }
        Ok(())
    }
}
