//! Cleanup system: removes tanks whose health has run out.
//!
//! AI units are despawned the moment they die; this catches the defeated
//! player at the end of the frame.

use hecs::{Entity, World};

use tankfire_core::components::Tank;

/// Despawn every tank at zero health.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, tank) in world.query_mut::<&Tank>() {
        if !tank.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
