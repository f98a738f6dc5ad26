//! Firing: muzzle placement and projectile launch.

use glam::DVec2;

use tankfire_core::components::{Projectile, Tank};
use tankfire_core::constants::{BULLET_SPEED, MUZZLE_STANDOFF};
use tankfire_core::enums::Owner;
use tankfire_core::types::unit_from_angle;

/// Launch point for a shot along `angle`: just outside the hull.
pub fn muzzle_point(tank: &Tank, angle: f64) -> DVec2 {
    tank.position + unit_from_angle(angle) * (tank.size / 2.0 + MUZZLE_STANDOFF)
}

/// Fire along `angle`, stamping the tank's cooldown. The caller spawns
/// the returned projectile.
pub fn fire(tank: &mut Tank, angle: f64, owner: Owner, now_ms: u64) -> Projectile {
    tank.last_fire_ms = Some(now_ms);
    Projectile {
        position: muzzle_point(tank, angle),
        velocity: unit_from_angle(angle) * BULLET_SPEED,
        owner,
    }
}
