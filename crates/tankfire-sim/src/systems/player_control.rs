//! Player control system: applies the frame's input intent to the player tank.
//!
//! Runs every frame, even while the session is not running.

use glam::DVec2;
use hecs::World;

use tankfire_ai::steering::settle_position;
use tankfire_core::commands::InputIntent;
use tankfire_core::components::{Obstacle, Player, Projectile, Tank};
use tankfire_core::enums::Owner;
use tankfire_core::types::{heading_of, Rect};

use crate::systems::weapons;
use crate::world_setup;

/// Move, aim and fire the live player tank.
///
/// Movement is per axis, so diagonals are faster than axis-aligned moves.
/// The shot leaves from the moved position before obstacle and arena
/// correction.
pub fn run(
    world: &mut World,
    intent: &InputIntent,
    arena: &Rect,
    obstacles: &[Obstacle],
    now_ms: u64,
) {
    let intent = intent.normalized();
    let mut shots: Vec<Projectile> = Vec::new();

    for (_entity, (tank, player)) in world.query_mut::<(&mut Tank, &mut Player)>() {
        if !tank.is_alive() {
            continue;
        }
        let previous = tank.position;

        if intent.is_moving() {
            let direction = DVec2::new(intent.move_x as f64, intent.move_y as f64);
            tank.body_angle = heading_of(direction);
            tank.position += direction * tank.speed;
        }

        player.turret_angle = intent.aim_angle;

        if intent.fire && tank.cooldown_elapsed(now_ms, true) {
            shots.push(weapons::fire(tank, player.turret_angle, Owner::Player, now_ms));
        }

        tank.position = settle_position(tank, previous, arena, obstacles);
    }

    for shot in shots {
        world_setup::spawn_projectile(world, shot);
    }
}
