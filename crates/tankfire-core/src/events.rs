//! Events emitted by the simulation for UI and session feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::ObstacleKind;

/// How an AI unit was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    /// Collided with the player.
    Rammed,
    /// Hit by a player projectile.
    Shot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { position: DVec2, level: u8 },
    EnemyDestroyed { position: DVec2, cause: KillCause, points: u32 },
    PlayerHit { health: u32 },
    ObstacleDestroyed { position: DVec2, kind: ObstacleKind },
    LevelUp { level: u8 },
    /// The player was defeated; carries the final score.
    SessionEnded { final_score: u32 },
}
