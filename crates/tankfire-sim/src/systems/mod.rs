//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and the session.

use hecs::World;

use tankfire_core::components::{Obstacle, Player, Tank};

pub mod cleanup;
pub mod enemy_ai;
pub mod player_control;
pub mod projectiles;
pub mod ram;
pub mod snapshot;
pub mod spawner;
pub mod weapons;

/// Copy of the obstacle field, in entity order.
pub fn obstacle_field(world: &World) -> Vec<Obstacle> {
    world
        .query::<&Obstacle>()
        .iter()
        .map(|(_, obstacle)| *obstacle)
        .collect()
}

/// The live player tank, if any.
pub fn live_player(world: &World) -> Option<(hecs::Entity, Tank)> {
    world
        .query::<(&Tank, &Player)>()
        .iter()
        .find(|(_, (tank, _))| tank.is_alive())
        .map(|(entity, (tank, _))| (entity, tank.clone()))
}
