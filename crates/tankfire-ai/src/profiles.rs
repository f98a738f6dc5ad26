//! Level-driven tank profiles.
//!
//! Consolidates the difficulty curves for AI units and the fixed
//! parameters of the player tank.

use glam::DVec2;

use tankfire_core::components::Tank;
use tankfire_core::constants::*;

/// Movement and weapon parameters for a tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankProfile {
    pub level: u8,
    /// Movement per frame.
    pub speed: f64,
    /// Minimum time between shots (ms).
    pub fire_cooldown_ms: f64,
    pub max_health: u32,
}

fn level_fraction(level: u8) -> f64 {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    (level - MIN_LEVEL) as f64 / (MAX_LEVEL - MIN_LEVEL) as f64
}

/// AI movement speed: 1.5 at level 1 rising linearly to 4.5 at level 10.
pub fn speed_for_level(level: u8) -> f64 {
    ENEMY_SPEED_MIN + (ENEMY_SPEED_MAX - ENEMY_SPEED_MIN) * level_fraction(level)
}

/// AI fire cooldown: 2000 ms at level 1 falling linearly to 600 ms at level 10.
pub fn cooldown_for_level(level: u8) -> f64 {
    ENEMY_COOLDOWN_MAX_MS - (ENEMY_COOLDOWN_MAX_MS - ENEMY_COOLDOWN_MIN_MS) * level_fraction(level)
}

/// Speed multiplier applied while hunting.
pub fn hunt_speed_factor(level: u8) -> f64 {
    HUNT_SPEED_BASE_FACTOR + HUNT_SPEED_PER_LEVEL * level as f64
}

/// Difficulty level reached after `kills` destroyed AI units.
pub fn level_for_kills(kills: u32) -> u8 {
    let raw = kills / KILLS_PER_LEVEL + MIN_LEVEL as u32;
    raw.min(MAX_LEVEL as u32) as u8
}

/// Profile for an AI unit spawned at `level`.
pub fn enemy_profile(level: u8) -> TankProfile {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    TankProfile {
        level,
        speed: speed_for_level(level),
        fire_cooldown_ms: cooldown_for_level(level),
        max_health: ENEMY_MAX_HEALTH,
    }
}

/// Profile for the player. The player does not follow the level curve.
pub fn player_profile() -> TankProfile {
    TankProfile {
        level: MIN_LEVEL,
        speed: PLAYER_SPEED,
        fire_cooldown_ms: PLAYER_FIRE_COOLDOWN_MS,
        max_health: PLAYER_MAX_HEALTH,
    }
}

impl TankProfile {
    /// Build a fresh, never-fired tank at `position` facing +x.
    pub fn build_tank(&self, position: DVec2) -> Tank {
        Tank {
            position,
            size: TANK_SIZE,
            body_angle: 0.0,
            health: self.max_health,
            max_health: self.max_health,
            level: self.level,
            speed: self.speed,
            fire_cooldown_ms: self.fire_cooldown_ms,
            last_fire_ms: None,
        }
    }
}
