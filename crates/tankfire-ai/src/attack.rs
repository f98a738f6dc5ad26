//! Attack decision for AI units.

use glam::DVec2;

use tankfire_core::components::Tank;
use tankfire_core::constants::ATTACK_RANGE;
use tankfire_core::types::heading_of;

use crate::fsm::PlayerSighting;

/// Decide whether `tank` fires at the player this frame.
///
/// Requires a live, visible player within attack range and an elapsed
/// cooldown. Returns the aim angle straight at the player's current
/// position (no lead).
pub fn evaluate_attack(tank: &Tank, player: Option<PlayerSighting>, now_ms: u64) -> Option<f64> {
    let sighting = player?;
    if !tank.cooldown_elapsed(now_ms, false) {
        return None;
    }
    let to_player: DVec2 = sighting.position - tank.position;
    if to_player.length() > ATTACK_RANGE || !sighting.visible {
        return None;
    }
    Some(heading_of(to_player))
}
