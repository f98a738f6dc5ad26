//! Inputs to the simulation.
//!
//! `InputIntent` is the normalized per-frame snapshot produced by the input
//! layer. `SessionCommand`s come from the session layer and are applied at
//! the next frame boundary.

use serde::{Deserialize, Serialize};

/// Normalized player intent for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputIntent {
    /// -1 (left), 0 or 1 (right).
    pub move_x: i8,
    /// -1 (up), 0 or 1 (down).
    pub move_y: i8,
    /// Turret aim in radians.
    pub aim_angle: f64,
    pub fire: bool,
}

impl InputIntent {
    /// Clamp movement components into {-1, 0, 1}.
    pub fn normalized(self) -> Self {
        Self {
            move_x: self.move_x.signum(),
            move_y: self.move_y.signum(),
            ..self
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_x != 0 || self.move_y != 0
    }
}

/// Session-level control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Reset all state, regenerate obstacles and start running.
    Initialize,
    /// Freeze or resume the simulation (the player keeps updating).
    SetRunning { running: bool },
}
