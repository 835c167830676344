use std::time::Duration;

use crate::entities::HeroId;

/// Tuning parameters for the duel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Heroes
    pub const HERO_RADIUS: f32 = 20.0;
    pub const HERO_START_Y: f32 = 100.0;
    pub const HERO_START_SPEED: f32 = 2.0;
    pub const HERO_EDGE_INSET: f32 = 50.0;
    pub const MOUSE_INTERACT_RADIUS: f32 = 100.0;

    // Projectiles
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;

    // Sliders
    pub const SPEED_MIN: f32 = 0.0;
    pub const SPEED_MAX: f32 = 10.0;
    pub const SPEED_STEP: f32 = 1.0;
    pub const FIRE_INTERVAL_MIN_MS: u64 = 250;
    pub const FIRE_INTERVAL_MAX_MS: u64 = 5000;
    pub const FIRE_INTERVAL_STEP_MS: u64 = 250;
    pub const FIRE_INTERVAL_START_MS: u64 = 1000;

    // Timers
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
    pub const FIRE_POLL_INTERVAL: Duration = Duration::from_millis(100);
}

/// Runtime configuration, defaults come from [`Params`]
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub hero_radius: f32,
    pub hero_start_y: f32,
    pub hero_start_speed: f32,
    pub hero_edge_inset: f32,
    pub interact_radius: f32,
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    pub speed_range: (f32, f32),
    pub speed_step: f32,
    pub fire_interval_range_ms: (u64, u64),
    pub fire_interval_step_ms: u64,
    pub fire_interval_start_ms: u64,
    pub frame_interval: Duration,
    pub fire_poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            hero_radius: Params::HERO_RADIUS,
            hero_start_y: Params::HERO_START_Y,
            hero_start_speed: Params::HERO_START_SPEED,
            hero_edge_inset: Params::HERO_EDGE_INSET,
            interact_radius: Params::MOUSE_INTERACT_RADIUS,
            projectile_radius: Params::PROJECTILE_RADIUS,
            projectile_speed: Params::PROJECTILE_SPEED,
            speed_range: (Params::SPEED_MIN, Params::SPEED_MAX),
            speed_step: Params::SPEED_STEP,
            fire_interval_range_ms: (Params::FIRE_INTERVAL_MIN_MS, Params::FIRE_INTERVAL_MAX_MS),
            fire_interval_step_ms: Params::FIRE_INTERVAL_STEP_MS,
            fire_interval_start_ms: Params::FIRE_INTERVAL_START_MS,
            frame_interval: Params::FRAME_INTERVAL,
            fire_poll_interval: Params::FIRE_POLL_INTERVAL,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fixed X position for a hero
    pub fn hero_x(&self, id: HeroId) -> f32 {
        match id {
            HeroId::Left => self.hero_edge_inset,
            HeroId::Right => self.field_width - self.hero_edge_inset,
        }
    }

    /// Clamp a speed magnitude to the slider range
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.speed_range.0, self.speed_range.1)
    }

    /// Clamp a fire interval to the slider range
    pub fn clamp_fire_interval(&self, interval_ms: u64) -> u64 {
        interval_ms.clamp(self.fire_interval_range_ms.0, self.fire_interval_range_ms.1)
    }

    /// Collision threshold between a hero center and a projectile center
    pub fn hit_distance(&self) -> f32 {
        self.hero_radius + self.projectile_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_hero_x() {
        let config = Config::new();
        assert_eq!(config.hero_x(HeroId::Left), 50.0, "Left hero X position");
        assert_eq!(config.hero_x(HeroId::Right), 750.0, "Right hero X position");
    }

    #[test]
    fn test_config_clamp_speed() {
        let config = Config::new();
        assert_eq!(config.clamp_speed(-3.0), 0.0);
        assert_eq!(config.clamp_speed(42.0), 10.0);
        assert_eq!(config.clamp_speed(7.0), 7.0);
    }

    #[test]
    fn test_config_clamp_fire_interval() {
        let config = Config::new();
        assert_eq!(config.clamp_fire_interval(0), 250);
        assert_eq!(config.clamp_fire_interval(60_000), 5000);
        assert_eq!(config.clamp_fire_interval(1500), 1500);
    }

    #[test]
    fn test_hit_distance() {
        assert_eq!(Config::new().hit_distance(), 25.0);
    }
}
