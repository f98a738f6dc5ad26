//! Procedural obstacle layout for a fresh arena.
//!
//! Scatters a random mix of walls and brush across the arena while keeping
//! the player start clear and the top entry strip mostly open.

use glam::DVec2;
use rand::Rng;

use tankfire_core::components::Obstacle;
use tankfire_core::constants::*;
use tankfire_core::enums::ObstacleKind;
use tankfire_core::types::Rect;

/// Generate the obstacle field for an arena.
///
/// Picks 15-24 obstacles and gives each up to `OBSTACLE_PLACEMENT_ATTEMPTS`
/// candidate draws. An obstacle that finds no valid spot is skipped, so the
/// result may hold fewer than the drawn count.
pub fn generate_obstacles<R: Rng>(rng: &mut R, arena: &Rect, player_start: DVec2) -> Vec<Obstacle> {
    let count = rng.gen_range(OBSTACLE_COUNT_MIN..=OBSTACLE_COUNT_MAX);
    let keep_clear = Rect::from_center(player_start, DVec2::splat(PLAYER_START_CLEARANCE * 2.0));
    let mut placed: Vec<Obstacle> = Vec::with_capacity(count as usize);

    for _ in 0..count {
        for _ in 0..OBSTACLE_PLACEMENT_ATTEMPTS {
            let candidate = draw_candidate(rng, arena);
            if is_valid_placement(rng, &candidate, &keep_clear, arena, &placed) {
                placed.push(candidate);
                break;
            }
        }
    }

    placed
}

/// Draw a random obstacle of random kind and size somewhere in the arena.
fn draw_candidate<R: Rng>(rng: &mut R, arena: &Rect) -> Obstacle {
    let kind = ObstacleKind::ALL[rng.gen_range(0..ObstacleKind::ALL.len())];
    let (min, max) = match kind {
        ObstacleKind::Passable => (PASSABLE_OBSTACLE_MIN_SIZE, PASSABLE_OBSTACLE_MAX_SIZE),
        _ => (SOLID_OBSTACLE_MIN_SIZE, SOLID_OBSTACLE_MAX_SIZE),
    };
    let size = DVec2::new(
        min + rng.gen::<f64>() * (max - min),
        min + rng.gen::<f64>() * (max - min),
    );
    let room = (arena.size() - size).max(DVec2::ZERO);
    let origin = arena.min + DVec2::new(rng.gen::<f64>() * room.x, rng.gen::<f64>() * room.y);

    Obstacle::new(Rect::from_corner(origin, size), kind)
}

fn is_valid_placement<R: Rng>(
    rng: &mut R,
    candidate: &Obstacle,
    keep_clear: &Rect,
    arena: &Rect,
    placed: &[Obstacle],
) -> bool {
    let mut valid = !candidate.bounds.overlaps(keep_clear);

    // The top-zone roll is drawn whenever the candidate sits high,
    // even if it has already been rejected.
    if candidate.bounds.min.y - arena.min.y < OBSTACLE_TOP_ZONE
        && rng.gen::<f64>() < OBSTACLE_TOP_ZONE_REJECT_CHANCE
    {
        valid = false;
    }

    valid
        && !placed
            .iter()
            .any(|other| candidate.bounds.overlaps(&other.bounds.expand(OBSTACLE_SPACING)))
}
