//! Session bookkeeping: score, kills, difficulty and the running flag.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities. Only the frame
//! pipeline mutates it.

use tracing::info;

use tankfire_ai::profiles::level_for_kills;
use tankfire_core::constants::{MIN_LEVEL, PLAYER_MAX_HEALTH};
use tankfire_core::events::GameEvent;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub running: bool,
    pub score: u32,
    /// Mirror of the player tank's health for the HUD.
    pub player_health: u32,
    pub kill_count: u32,
    /// Level given to newly spawned AI units.
    pub current_level: u8,
    /// Timestamp of the last spawn attempt.
    pub last_spawn_ms: u64,
    /// Set once the player has been defeated this session.
    pub defeated: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            running: false,
            score: 0,
            player_health: PLAYER_MAX_HEALTH,
            kill_count: 0,
            current_level: MIN_LEVEL,
            last_spawn_ms: 0,
            defeated: false,
        }
    }
}

impl SessionState {
    /// Fresh running session starting at `now_ms`.
    pub fn started(now_ms: u64) -> Self {
        Self {
            running: true,
            last_spawn_ms: now_ms,
            ..Default::default()
        }
    }

    /// Credit a destroyed AI unit and recompute the difficulty level.
    pub fn record_kill(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.score += points;
        self.kill_count += 1;
        self.recompute_level(events);
    }

    /// Raise the level to match the kill count. The level never drops.
    pub fn recompute_level(&mut self, events: &mut Vec<GameEvent>) {
        let level = level_for_kills(self.kill_count);
        if level > self.current_level {
            self.current_level = level;
            info!(level, kills = self.kill_count, "Enemy level up");
            events.push(GameEvent::LevelUp { level });
        }
    }

    /// Mirror the player's health after a hit. Reaching zero ends the
    /// session exactly once.
    pub fn record_player_hit(&mut self, health: u32, events: &mut Vec<GameEvent>) {
        self.player_health = health;
        events.push(GameEvent::PlayerHit { health });

        if health == 0 && !self.defeated {
            self.defeated = true;
            self.running = false;
            info!(final_score = self.score, kills = self.kill_count, "Player defeated");
            events.push(GameEvent::SessionEnded {
                final_score: self.score,
            });
        }
    }
}
