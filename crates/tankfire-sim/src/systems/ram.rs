//! Ram system: player tank versus AI unit contact.

use hecs::World;
use tracing::debug;

use tankfire_core::components::{Enemy, Player, Tank};
use tankfire_core::constants::SCORE_RAM_KILL;
use tankfire_core::events::{GameEvent, KillCause};

use crate::session::SessionState;
use crate::systems::live_player;

/// Resolve at most one player/AI contact this frame.
///
/// The touching AI unit is destroyed whatever its health, the player loses
/// one point of health, and the kill scores `SCORE_RAM_KILL`.
pub fn run(world: &mut World, session: &mut SessionState, events: &mut Vec<GameEvent>) {
    let Some((player_entity, player)) = live_player(world) else {
        return;
    };
    let player_bounds = player.bounds();

    let rammed = world
        .query::<(&Tank, &Enemy)>()
        .iter()
        .find(|(_, (tank, _))| tank.bounds().overlaps(&player_bounds))
        .map(|(entity, (tank, _))| (entity, tank.position));
    let Some((enemy_entity, position)) = rammed else {
        return;
    };

    let health = match world.query_one_mut::<(&mut Tank, &Player)>(player_entity) {
        Ok((tank, _)) => {
            tank.health = tank.health.saturating_sub(1);
            tank.health
        }
        Err(_) => return,
    };
    let _ = world.despawn(enemy_entity);
    debug!(id = enemy_entity.id(), health, "Enemy rammed");

    // Credit the kill first so a fatal ram still counts toward the final score.
    events.push(GameEvent::EnemyDestroyed {
        position,
        cause: KillCause::Rammed,
        points: SCORE_RAM_KILL,
    });
    session.record_kill(SCORE_RAM_KILL, events);
    session.record_player_hit(health, events);
}
