//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player tank, AI units, obstacles and projectiles with
//! appropriate component bundles.

use glam::DVec2;
use hecs::World;
use rand::Rng;

use tankfire_ai::profiles::{enemy_profile, player_profile};
use tankfire_ai::steering::initial_patrol;
use tankfire_core::components::*;
use tankfire_core::config::SimConfig;
use tankfire_terrain::generate_obstacles;

/// Reset the world for a new session: player tank plus a fresh obstacle field.
pub fn setup_arena<R: Rng>(world: &mut World, rng: &mut R, config: &SimConfig) {
    world.clear();
    spawn_player(world, config.player_start());
    if config.obstacles {
        let obstacles = generate_obstacles(rng, &config.arena(), config.player_start());
        spawn_obstacles(world, obstacles);
    }
}

/// Spawn the player tank centered on `position`.
pub fn spawn_player(world: &mut World, position: DVec2) -> hecs::Entity {
    world.spawn((
        Player::default(),
        player_profile().build_tank(position),
    ))
}

/// Spawn an AI unit at `level`. It starts patrolling toward a random point.
pub fn spawn_enemy<R: Rng>(
    world: &mut World,
    rng: &mut R,
    config: &SimConfig,
    position: DVec2,
    level: u8,
    now_ms: u64,
) -> hecs::Entity {
    let mode = initial_patrol(rng, &config.arena(), now_ms);
    world.spawn((Enemy { mode }, enemy_profile(level).build_tank(position)))
}

pub fn spawn_obstacles(world: &mut World, obstacles: impl IntoIterator<Item = Obstacle>) {
    for obstacle in obstacles {
        world.spawn((obstacle,));
    }
}

pub fn spawn_projectile(world: &mut World, projectile: Projectile) -> hecs::Entity {
    world.spawn((projectile,))
}
