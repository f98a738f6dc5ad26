//! Simulation configuration.
//!
//! Every field has a default matching the tuning constants, so a partial
//! JSON document only needs to name what it overrides.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::types::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same session.
    pub seed: u64,
    pub arena_width: f64,
    pub arena_height: f64,
    pub spawn_interval_ms: u64,
    pub max_enemies: usize,
    /// Generate the obstacle field on initialize.
    pub obstacles: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            max_enemies: MAX_ENEMIES,
            obstacles: true,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.arena_width.is_finite() || !self.arena_height.is_finite() {
            return Err(ConfigError::NonFiniteArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.arena_width < TANK_SIZE || self.arena_height < TANK_SIZE {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
                unit: TANK_SIZE,
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.max_enemies == 0 {
            return Err(ConfigError::ZeroMaxEnemies);
        }
        Ok(())
    }

    /// The arena as a rectangle anchored at the origin.
    pub fn arena(&self) -> Rect {
        Rect::from_corner(
            DVec2::ZERO,
            DVec2::new(self.arena_width, self.arena_height),
        )
    }

    /// Player spawn point, scaled to the configured arena.
    pub fn player_start(&self) -> DVec2 {
        DVec2::new(self.arena_width / 2.0, self.arena_height - PLAYER_START_BOTTOM_OFFSET)
            .max(DVec2::splat(TANK_SIZE / 2.0))
    }
}
