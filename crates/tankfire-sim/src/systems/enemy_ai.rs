//! Enemy AI system: updates every AI unit each frame.
//!
//! Calls the mode FSM and steering from tankfire-ai, then writes the
//! resulting mode, position and shots back to the ECS world.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use tracing::debug;

use tankfire_ai::attack::evaluate_attack;
use tankfire_ai::fsm::{evaluate, EnemyContext, PlayerSighting};
use tankfire_ai::profiles::hunt_speed_factor;
use tankfire_ai::steering::{hunt_step, patrol_step, settle_position, Step};
use tankfire_core::components::{AiMode, Enemy, Obstacle, Projectile, Tank};
use tankfire_core::enums::Owner;
use tankfire_core::types::Rect;
use tankfire_terrain::has_line_of_sight;

use crate::systems::{live_player, weapons};
use crate::world_setup;

/// Run the enemy AI: choose a mode, move, then try to attack.
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    arena: &Rect,
    obstacles: &[Obstacle],
    now_ms: u64,
) {
    let player_position = live_player(world).map(|(_, tank)| tank.position);
    let sight = |from: DVec2| {
        player_position.map(|position| PlayerSighting {
            position,
            visible: has_line_of_sight(obstacles, from, position),
        })
    };

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(hecs::Entity, Tank, AiMode)> = Vec::new();
    let mut shots: Vec<Projectile> = Vec::new();

    {
        let mut query = world.query::<(&Tank, &Enemy)>();
        for (entity, (tank, enemy)) in query.iter() {
            let mut tank = tank.clone();
            let previous = tank.position;

            let update = evaluate(&EnemyContext {
                mode: enemy.mode,
                position: tank.position,
                player: sight(tank.position),
                now_ms,
            });
            if update.mode_changed {
                debug!(
                    id = entity.id(),
                    mode = ?update.new_mode.kind(),
                    "Enemy mode change"
                );
            }

            let (mode, step) = match update.new_mode {
                AiMode::Hunt { target, .. } => (
                    update.new_mode,
                    hunt_step(&tank, target, hunt_speed_factor(tank.level), obstacles),
                ),
                AiMode::Patrol { .. } => {
                    let outcome =
                        patrol_step(rng, &tank, update.new_mode, arena, obstacles, now_ms);
                    (outcome.mode, outcome.step)
                }
            };
            if let Some(step) = step {
                apply_step(&mut tank, step);
            }

            // Attack looks from the moved position.
            if let Some(angle) = evaluate_attack(&tank, sight(tank.position), now_ms) {
                tank.body_angle = angle;
                shots.push(weapons::fire(&mut tank, angle, Owner::Enemy, now_ms));
            }

            tank.position = settle_position(&tank, previous, arena, obstacles);
            updates.push((entity, tank, mode));
        }
    }

    // Apply updates
    for (entity, new_tank, new_mode) in updates {
        if let Ok(mut tank) = world.get::<&mut Tank>(entity) {
            *tank = new_tank;
        }
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.mode = new_mode;
        }
    }

    for shot in shots {
        world_setup::spawn_projectile(world, shot);
    }
}

fn apply_step(tank: &mut Tank, step: Step) {
    tank.position += step.delta;
    tank.body_angle = step.heading();
}
