//! Game state snapshot: the complete visible state handed to the
//! rendering and UI layers after each frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AiModeKind, ObstacleKind, Owner};
use crate::events::GameEvent;
use crate::types::{Rect, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub hud: HudView,
    /// The live player tank, if any.
    pub player: Option<TankView>,
    pub enemies: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
    /// Events raised during this frame.
    pub events: Vec<GameEvent>,
}

/// Scalar fields for the score/health display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub running: bool,
    pub score: u32,
    pub player_health: u32,
    pub enemy_count: u32,
    pub kill_count: u32,
    pub current_level: u8,
}

impl Default for HudView {
    fn default() -> Self {
        Self {
            running: false,
            score: 0,
            player_health: crate::constants::PLAYER_MAX_HEALTH,
            enemy_count: 0,
            kill_count: 0,
            current_level: crate::constants::MIN_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub id: u32,
    pub position: DVec2,
    pub size: f64,
    pub body_angle: f64,
    /// Gun direction: the turret for the player, the hull for AI units.
    pub turret_angle: f64,
    pub health: u32,
    pub max_health: u32,
    pub level: u8,
    /// `None` for the player.
    pub ai_mode: Option<AiModeKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub owner: Owner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub bounds: Rect,
    pub kind: ObstacleKind,
    pub durability: u32,
}
