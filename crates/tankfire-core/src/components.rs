//! ECS components for hecs entities.
//!
//! Components are plain data. Apart from small geometric accessors,
//! game logic lives in the AI crate and the simulation systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AiModeKind, ObstacleKind, Owner};
use crate::types::Rect;

/// A mobile combatant (player or AI). Position is the hull center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub position: DVec2,
    /// Edge length of the square footprint.
    pub size: f64,
    /// Hull orientation (radians).
    pub body_angle: f64,
    pub health: u32,
    pub max_health: u32,
    /// Difficulty level, fixed at spawn time.
    pub level: u8,
    /// Movement per frame.
    pub speed: f64,
    pub fire_cooldown_ms: f64,
    /// Timestamp of the last shot; `None` until the first one.
    pub last_fire_ms: Option<u64>,
}

impl Tank {
    pub fn bounds(&self) -> Rect {
        self.bounds_at(self.position)
    }

    /// Footprint if the hull were centered on `position`.
    pub fn bounds_at(&self, position: DVec2) -> Rect {
        Rect::from_center(position, DVec2::splat(self.size))
    }

    pub fn half_extent(&self) -> DVec2 {
        DVec2::splat(self.size * 0.5)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// True if enough time has passed since the last shot.
    /// `strict` selects `>` (player) versus `>=` (AI) against the cooldown.
    pub fn cooldown_elapsed(&self, now_ms: u64, strict: bool) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => {
                let elapsed = now_ms.saturating_sub(last) as f64;
                if strict {
                    elapsed > self.fire_cooldown_ms
                } else {
                    elapsed >= self.fire_cooldown_ms
                }
            }
        }
    }
}

/// Marks the player-controlled tank. The turret aims independently of the hull.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    pub turret_angle: f64,
}

/// AI behavior state. Each variant carries exactly the memory its
/// behavior needs, so transitions can be audited in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AiMode {
    /// Wander between random points, re-picking on a timer.
    Patrol {
        target: DVec2,
        retarget_at_ms: u64,
        retarget_interval_ms: u64,
    },
    /// Pursue the player's live or last-known position.
    Hunt { target: DVec2, last_seen_ms: u64 },
}

impl AiMode {
    pub fn kind(&self) -> AiModeKind {
        match self {
            AiMode::Patrol { .. } => AiModeKind::Patrol,
            AiMode::Hunt { .. } => AiModeKind::Hunt,
        }
    }

    pub fn target(&self) -> DVec2 {
        match *self {
            AiMode::Patrol { target, .. } | AiMode::Hunt { target, .. } => target,
        }
    }
}

/// Marks an AI-controlled tank and holds its behavior state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub mode: AiMode,
}

/// A single-hit projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Center of the projectile.
    pub position: DVec2,
    /// Displacement per frame, fixed at launch.
    pub velocity: DVec2,
    pub owner: Owner,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::from_center(
            self.position,
            DVec2::splat(crate::constants::BULLET_SIZE),
        )
    }
}

/// A static arena feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub bounds: Rect,
    pub kind: ObstacleKind,
    /// Remaining hits before destruction (0 and irrelevant for passable).
    pub durability: u32,
}

impl Obstacle {
    pub fn new(bounds: Rect, kind: ObstacleKind) -> Self {
        Self {
            bounds,
            kind,
            durability: kind.durability(),
        }
    }

    pub fn is_solid(&self) -> bool {
        !self.kind.is_passable()
    }
}
