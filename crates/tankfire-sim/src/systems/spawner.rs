//! Spawn system: places new AI units on a fixed interval.
//!
//! Placement is opportunistic. A search that finds no safe spot skips the
//! spawn for this interval; it is not an error.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use tracing::debug;

use tankfire_core::components::{Enemy, Obstacle, Tank};
use tankfire_core::config::SimConfig;
use tankfire_core::constants::*;
use tankfire_core::events::GameEvent;
use tankfire_core::types::Rect;
use tankfire_terrain::is_clear_with_margin;

use crate::session::SessionState;
use crate::systems::{live_player, obstacle_field};
use crate::world_setup;

/// What a candidate spawn point is checked against.
pub struct SpawnSurroundings<'a> {
    pub arena: Rect,
    /// Center of the live player, if any.
    pub player: Option<DVec2>,
    /// Centers of live AI units.
    pub enemies: &'a [DVec2],
    pub obstacles: &'a [Obstacle],
}

impl SpawnSurroundings<'_> {
    /// True if a unit centered on `position` may be placed there.
    /// `check_enemies` toggles the spacing rule between AI units.
    pub fn is_safe(&self, position: DVec2, check_enemies: bool) -> bool {
        let bounds = Rect::from_center(position, DVec2::splat(TANK_SIZE));
        if !self.arena.contains_rect(&bounds) {
            return false;
        }
        if let Some(player) = self.player {
            if position.distance(player) < SPAWN_MIN_PLAYER_DISTANCE {
                return false;
            }
        }
        if check_enemies
            && self
                .enemies
                .iter()
                .any(|enemy| position.distance(*enemy) < SPAWN_MIN_ENEMY_DISTANCE)
        {
            return false;
        }
        is_clear_with_margin(&bounds, self.obstacles, SPAWN_OBSTACLE_BUFFER)
    }
}

/// Candidate regions: a strip along the top and one down each side.
pub fn spawn_regions(arena: &Rect) -> [Rect; 3] {
    let width = arena.width();
    let height = arena.height();
    [
        Rect::from_corner(arena.min, DVec2::new(width, SPAWN_TOP_STRIP)),
        Rect::from_corner(arena.min, DVec2::new(SPAWN_SIDE_STRIP, height)),
        Rect::from_corner(
            DVec2::new(arena.max.x - SPAWN_SIDE_STRIP, arena.min.y),
            DVec2::new(SPAWN_SIDE_STRIP, height),
        ),
    ]
}

/// Search for a safe spawn point: the edge-region pass first, then the
/// relaxed fallback pass.
pub fn find_spawn_position<R: Rng>(rng: &mut R, surroundings: &SpawnSurroundings) -> Option<DVec2> {
    search_edges(rng, surroundings).or_else(|| search_fallback(rng, surroundings))
}

/// Up to `SPAWN_ATTEMPTS` draws from the edge regions with every rule enforced.
pub fn search_edges<R: Rng>(rng: &mut R, surroundings: &SpawnSurroundings) -> Option<DVec2> {
    let arena = surroundings.arena;
    let half = TANK_SIZE / 2.0;
    let regions = spawn_regions(&arena);

    (0..SPAWN_ATTEMPTS).find_map(|_| {
        let region = regions[rng.gen_range(0..regions.len())];
        let x = region.min.x + rng.gen::<f64>() * (region.width() - TANK_SIZE).max(1.0) + half;
        let y = region.min.y + rng.gen::<f64>() * (region.height() - TANK_SIZE).max(1.0) + half;
        let candidate = arena.clamp_center(DVec2::new(x, y), DVec2::splat(half));
        surroundings.is_safe(candidate, true).then_some(candidate)
    })
}

/// `SPAWN_FALLBACK_ATTEMPTS` draws near the top edge, without the
/// spacing rule between AI units.
pub fn search_fallback<R: Rng>(rng: &mut R, surroundings: &SpawnSurroundings) -> Option<DVec2> {
    let arena = surroundings.arena;
    let half = TANK_SIZE / 2.0;

    (0..SPAWN_FALLBACK_ATTEMPTS).find_map(|_| {
        let x = arena.min.x + rng.gen::<f64>() * (arena.width() - TANK_SIZE) + half;
        let y = arena.min.y + rng.gen::<f64>() * SPAWN_FALLBACK_BAND + half;
        let candidate = DVec2::new(x, y);
        surroundings.is_safe(candidate, false).then_some(candidate)
    })
}

/// Attempt one spawn if the interval has elapsed. The timer resets
/// whether or not a unit was placed.
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    config: &SimConfig,
    session: &mut SessionState,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) {
    if now_ms.saturating_sub(session.last_spawn_ms) <= config.spawn_interval_ms {
        return;
    }
    session.last_spawn_ms = now_ms;

    let enemies: Vec<DVec2> = world
        .query::<(&Tank, &Enemy)>()
        .iter()
        .map(|(_, (tank, _))| tank.position)
        .collect();
    if enemies.len() >= config.max_enemies {
        return;
    }

    let obstacles = obstacle_field(world);
    let surroundings = SpawnSurroundings {
        arena: config.arena(),
        player: live_player(world).map(|(_, tank)| tank.position),
        enemies: &enemies,
        obstacles: &obstacles,
    };

    match find_spawn_position(rng, &surroundings) {
        Some(position) => {
            let level = session.current_level;
            world_setup::spawn_enemy(world, rng, config, position, level, now_ms);
            debug!(x = position.x, y = position.y, level, "Enemy spawned");
            events.push(GameEvent::EnemySpawned { position, level });
        }
        None => debug!("No safe spawn position, skipping"),
    }
}
