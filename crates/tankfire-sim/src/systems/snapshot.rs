//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use tankfire_core::components::*;
use tankfire_core::events::GameEvent;
use tankfire_core::state::*;
use tankfire_core::types::SimTime;

use crate::session::SessionState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &SessionState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);

    GameStateSnapshot {
        time: *time,
        hud: HudView {
            running: session.running,
            score: session.score,
            player_health: session.player_health,
            enemy_count: enemies.len() as u32,
            kill_count: session.kill_count,
            current_level: session.current_level,
        },
        player: build_player(world),
        enemies,
        projectiles: build_projectiles(world),
        obstacles: build_obstacles(world),
        events,
    }
}

fn build_player(world: &World) -> Option<TankView> {
    world
        .query::<(&Tank, &Player)>()
        .iter()
        .next()
        .map(|(entity, (tank, player))| TankView {
            id: entity.id(),
            position: tank.position,
            size: tank.size,
            body_angle: tank.body_angle,
            turret_angle: player.turret_angle,
            health: tank.health,
            max_health: tank.max_health,
            level: tank.level,
            ai_mode: None,
        })
}

/// AI units aim along their hull, so the turret angle mirrors it.
fn build_enemies(world: &World) -> Vec<TankView> {
    let mut enemies: Vec<TankView> = world
        .query::<(&Tank, &Enemy)>()
        .iter()
        .map(|(entity, (tank, enemy))| TankView {
            id: entity.id(),
            position: tank.position,
            size: tank.size,
            body_angle: tank.body_angle,
            turret_angle: tank.body_angle,
            health: tank.health,
            max_health: tank.max_health,
            level: tank.level,
            ai_mode: Some(enemy.mode.kind()),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u32, ProjectileView)> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, projectile)| {
            (
                entity.id(),
                ProjectileView {
                    position: projectile.position,
                    owner: projectile.owner,
                },
            )
        })
        .collect();

    projectiles.sort_by_key(|(id, _)| *id);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<(u32, ObstacleView)> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(entity, obstacle)| {
            (
                entity.id(),
                ObstacleView {
                    bounds: obstacle.bounds,
                    kind: obstacle.kind,
                    durability: obstacle.durability,
                },
            )
        })
        .collect();

    obstacles.sort_by_key(|(id, _)| *id);
    obstacles.into_iter().map(|(_, view)| view).collect()
}
