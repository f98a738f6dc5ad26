//! Movement steering for AI units.
//!
//! Patrol wandering, hunt pursuit, and the fixed-order detour search used
//! when pursuit is blocked. Every function returns the intended move and
//! leaves applying it to the caller.

use glam::DVec2;
use rand::Rng;

use tankfire_core::components::{AiMode, Obstacle, Tank};
use tankfire_core::constants::*;
use tankfire_core::types::{heading_of, unit_from_angle, Rect};
use tankfire_terrain::is_blocked;

/// Detour directions in priority order: axes first, then diagonals.
/// Diagonals are not normalized.
pub const DETOUR_DIRECTIONS: [DVec2; 8] = [
    DVec2::new(1.0, 0.0),
    DVec2::new(-1.0, 0.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.0, -1.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(-1.0, 1.0),
    DVec2::new(1.0, -1.0),
    DVec2::new(-1.0, -1.0),
];

/// Intended displacement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub delta: DVec2,
}

impl Step {
    /// Hull heading implied by this step.
    pub fn heading(&self) -> f64 {
        heading_of(self.delta)
    }
}

/// Result of a patrol step: the (possibly retargeted) mode and an optional move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolOutcome {
    pub mode: AiMode,
    pub step: Option<Step>,
}

/// Random point anywhere in the arena.
pub fn random_arena_point<R: Rng>(rng: &mut R, arena: &Rect) -> DVec2 {
    arena.min + DVec2::new(rng.gen::<f64>() * arena.width(), rng.gen::<f64>() * arena.height())
}

/// Fresh patrol state for a newly spawned unit.
pub fn initial_patrol<R: Rng>(rng: &mut R, arena: &Rect, now_ms: u64) -> AiMode {
    let interval = rng.gen_range(PATROL_FIRST_INTERVAL_MIN_MS..PATROL_FIRST_INTERVAL_MAX_MS);
    AiMode::Patrol {
        target: random_arena_point(rng, arena),
        retarget_at_ms: now_ms + interval,
        retarget_interval_ms: interval,
    }
}

/// Advance a patrolling unit.
///
/// Retargets when the timer is due, then walks straight at base speed.
/// A blocked walk picks a nearby detour target instead of moving.
/// Non-patrol modes pass through unchanged.
pub fn patrol_step<R: Rng>(
    rng: &mut R,
    tank: &Tank,
    mode: AiMode,
    arena: &Rect,
    obstacles: &[Obstacle],
    now_ms: u64,
) -> PatrolOutcome {
    let AiMode::Patrol {
        mut target,
        mut retarget_at_ms,
        mut retarget_interval_ms,
    } = mode
    else {
        return PatrolOutcome { mode, step: None };
    };

    if now_ms >= retarget_at_ms {
        target = random_arena_point(rng, arena);
        retarget_interval_ms = rng.gen_range(PATROL_INTERVAL_MIN_MS..PATROL_INTERVAL_MAX_MS);
        retarget_at_ms = now_ms + retarget_interval_ms;
    }

    let mut step = None;
    let to_target = target - tank.position;
    if to_target.length() > PATROL_ARRIVE_DISTANCE {
        let delta = to_target.normalize() * tank.speed;
        if is_blocked(&tank.bounds_at(tank.position + delta), obstacles) {
            let angle = rng.gen::<f64>() * std::f64::consts::TAU;
            target = tank.position + unit_from_angle(angle) * PATROL_DETOUR_RADIUS;
            retarget_at_ms = now_ms + retarget_interval_ms;
        } else {
            step = Some(Step { delta });
        }
    }

    PatrolOutcome {
        mode: AiMode::Patrol {
            target,
            retarget_at_ms,
            retarget_interval_ms,
        },
        step,
    }
}

/// Advance a hunting unit toward `target`.
///
/// Moves at `speed * hunt_factor` until within the arrival distance. If the
/// direct step is blocked, falls back to [`detour_step`]. `None` means the
/// unit holds position this frame.
pub fn hunt_step(
    tank: &Tank,
    target: DVec2,
    hunt_factor: f64,
    obstacles: &[Obstacle],
) -> Option<Step> {
    let to_target = target - tank.position;
    if to_target.length() <= HUNT_ARRIVE_DISTANCE {
        return None;
    }

    let delta = to_target.normalize() * tank.speed * hunt_factor;
    if is_blocked(&tank.bounds_at(tank.position + delta), obstacles) {
        detour_step(tank, obstacles)
    } else {
        Some(Step { delta })
    }
}

/// First unobstructed move along [`DETOUR_DIRECTIONS`] at base speed.
pub fn detour_step(tank: &Tank, obstacles: &[Obstacle]) -> Option<Step> {
    DETOUR_DIRECTIONS
        .iter()
        .map(|dir| *dir * tank.speed)
        .find(|delta| !is_blocked(&tank.bounds_at(tank.position + *delta), obstacles))
        .map(|delta| Step { delta })
}

/// Post-move correction shared by every unit: clamp into the arena, then
/// fall back to `previous` if the hull would overlap a solid obstacle.
pub fn settle_position(tank: &Tank, previous: DVec2, arena: &Rect, obstacles: &[Obstacle]) -> DVec2 {
    let half = tank.half_extent();
    let clamped = arena.clamp_center(tank.position, half);
    if is_blocked(&tank.bounds_at(clamped), obstacles) {
        arena.clamp_center(previous, half)
    } else {
        clamped
    }
}
