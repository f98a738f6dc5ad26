//! Projectile system: flight, obstacle hits and target hits.
//!
//! Each projectile is consumed by its first resolved contact. Obstacles are
//! tested before units, so a shot that clips a wall never reaches the tank
//! behind it. Resolution stops at the hit that defeats the player.

use hecs::{Entity, World};
use tracing::debug;

use tankfire_core::components::{Enemy, Obstacle, Player, Projectile, Tank};
use tankfire_core::constants::SCORE_SHOT_KILL;
use tankfire_core::enums::Owner;
use tankfire_core::events::{GameEvent, KillCause};
use tankfire_core::types::Rect;
use tankfire_terrain::first_blocking;

use crate::session::SessionState;

/// Advance every projectile one frame and resolve its contacts.
pub fn run(
    world: &mut World,
    arena: &Rect,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.position += projectile.velocity;
    }

    let projectiles: Vec<(Entity, Projectile)> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, projectile)| (entity, *projectile))
        .collect();

    // Local copies of the hittable state, kept current as hits land.
    let (mut obstacle_entities, mut obstacles): (Vec<Entity>, Vec<Obstacle>) = world
        .query::<&Obstacle>()
        .iter()
        .map(|(entity, obstacle)| (entity, *obstacle))
        .unzip();
    let mut enemies: Vec<(Entity, Tank)> = world
        .query::<(&Tank, &Enemy)>()
        .iter()
        .map(|(entity, (tank, _))| (entity, tank.clone()))
        .collect();
    let mut player: Option<(Entity, Tank)> = world
        .query::<(&Tank, &Player)>()
        .iter()
        .next()
        .map(|(entity, (tank, _))| (entity, tank.clone()));

    let mut consumed: Vec<Entity> = Vec::new();

    for (entity, projectile) in projectiles {
        // Nothing scores once the player is defeated.
        if session.defeated {
            break;
        }
        if !arena.contains_point(projectile.position) {
            consumed.push(entity);
            continue;
        }
        let bounds = projectile.bounds();

        if let Some(index) = first_blocking(&bounds, &obstacles) {
            consumed.push(entity);
            hit_obstacle(world, &mut obstacle_entities, &mut obstacles, index, events);
            continue;
        }

        match projectile.owner {
            Owner::Player => {
                let target = enemies
                    .iter()
                    .position(|(_, tank)| tank.bounds().overlaps(&bounds));
                if let Some(index) = target {
                    consumed.push(entity);
                    hit_enemy(world, &mut enemies, index, session, events);
                }
            }
            Owner::Enemy => {
                if let Some((player_entity, tank)) = player
                    .as_mut()
                    .filter(|(_, tank)| tank.is_alive() && tank.bounds().overlaps(&bounds))
                {
                    consumed.push(entity);
                    tank.health = tank.health.saturating_sub(1);
                    if let Ok(mut live) = world.get::<&mut Tank>(*player_entity) {
                        live.health = tank.health;
                    }
                    session.record_player_hit(tank.health, events);
                }
            }
        }
    }

    for entity in consumed {
        let _ = world.despawn(entity);
    }
}

fn hit_obstacle(
    world: &mut World,
    entities: &mut Vec<Entity>,
    obstacles: &mut Vec<Obstacle>,
    index: usize,
    events: &mut Vec<GameEvent>,
) {
    let obstacle = &mut obstacles[index];
    obstacle.durability = obstacle.durability.saturating_sub(1);

    if obstacle.durability == 0 {
        let destroyed = obstacles.remove(index);
        let entity = entities.remove(index);
        let _ = world.despawn(entity);
        debug!(kind = ?destroyed.kind, "Obstacle destroyed");
        events.push(GameEvent::ObstacleDestroyed {
            position: destroyed.bounds.center(),
            kind: destroyed.kind,
        });
    } else if let Ok(mut live) = world.get::<&mut Obstacle>(entities[index]) {
        live.durability = obstacle.durability;
    }
}

fn hit_enemy(
    world: &mut World,
    enemies: &mut Vec<(Entity, Tank)>,
    index: usize,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
) {
    let (entity, tank) = &mut enemies[index];
    tank.health = tank.health.saturating_sub(1);

    if tank.health == 0 {
        let (entity, tank) = enemies.remove(index);
        let _ = world.despawn(entity);
        debug!(id = entity.id(), "Enemy destroyed by shot");
        events.push(GameEvent::EnemyDestroyed {
            position: tank.position,
            cause: KillCause::Shot,
            points: SCORE_SHOT_KILL,
        });
        session.record_kill(SCORE_SHOT_KILL, events);
    } else if let Ok(mut live) = world.get::<&mut Tank>(*entity) {
        live.health = tank.health;
    }
}
