//! AI mode state machine.
//!
//! Pure functions that compute patrol/hunt transitions for an AI unit from
//! its current mode and what it can see of the player. No ECS dependency;
//! operates on plain data.

use glam::DVec2;

use tankfire_core::components::AiMode;
use tankfire_core::constants::*;

/// What an AI unit knows about the live player this frame.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSighting {
    pub position: DVec2,
    /// Clear line-of-sight from the unit to the player.
    pub visible: bool,
}

/// Input to the mode FSM for a single unit.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub mode: AiMode,
    pub position: DVec2,
    /// `None` when there is no live player.
    pub player: Option<PlayerSighting>,
    pub now_ms: u64,
}

/// Output from the mode FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeUpdate {
    pub new_mode: AiMode,
    /// True when the mode kind (patrol/hunt) changed.
    pub mode_changed: bool,
}

/// Evaluate the FSM for one unit.
pub fn evaluate(ctx: &EnemyContext) -> ModeUpdate {
    let new_mode = match ctx.player {
        None => evaluate_patrol(ctx),
        Some(sighting) => {
            let in_range = ctx.position.distance(sighting.position) <= HUNTING_RANGE;
            if sighting.visible && in_range {
                AiMode::Hunt {
                    target: sighting.position,
                    last_seen_ms: ctx.now_ms,
                }
            } else {
                evaluate_memory(ctx)
            }
        }
    };

    ModeUpdate {
        new_mode,
        mode_changed: new_mode.kind() != ctx.mode.kind(),
    }
}

/// Player out of sight: keep chasing the remembered spot for a while.
fn evaluate_memory(ctx: &EnemyContext) -> AiMode {
    match ctx.mode {
        AiMode::Hunt { last_seen_ms, .. }
            if ctx.now_ms.saturating_sub(last_seen_ms) < PLAYER_MEMORY_MS =>
        {
            ctx.mode
        }
        _ => evaluate_patrol(ctx),
    }
}

/// Drop to patrol. A unit leaving hunt keeps its stale target but
/// retargets on its next patrol step.
fn evaluate_patrol(ctx: &EnemyContext) -> AiMode {
    match ctx.mode {
        AiMode::Patrol { .. } => ctx.mode,
        AiMode::Hunt { target, .. } => AiMode::Patrol {
            target,
            retarget_at_ms: ctx.now_ms,
            retarget_interval_ms: 0,
        },
    }
}
