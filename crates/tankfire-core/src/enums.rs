//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{BREAKABLE_DURABILITY, REINFORCED_DURABILITY};

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Obstacle material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Brick wall: stops units and projectiles, destroyed by one hit.
    #[default]
    Breakable,
    /// Steel wall: stops units and projectiles, destroyed by three hits.
    Reinforced,
    /// Brush: never blocks anything and is never destroyed.
    Passable,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Breakable,
        ObstacleKind::Reinforced,
        ObstacleKind::Passable,
    ];

    /// Starting durability for this material.
    pub fn durability(self) -> u32 {
        match self {
            ObstacleKind::Breakable => BREAKABLE_DURABILITY,
            ObstacleKind::Reinforced => REINFORCED_DURABILITY,
            ObstacleKind::Passable => 0,
        }
    }

    /// Whether units and projectiles pass through, and line-of-sight ignores it.
    pub fn is_passable(self) -> bool {
        matches!(self, ObstacleKind::Passable)
    }
}

/// Flat label for an AI unit's behavior mode (snapshot / display use).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiModeKind {
    #[default]
    Patrol,
    Hunt,
}
