//! Simulation constants and tuning parameters.
//!
//! Distances are arena units per frame; times are milliseconds.

/// Nominal frame rate of the driving loop (Hz). Movement is per frame,
/// so this only sets the pace of the real-time driver.
pub const FRAME_RATE: u32 = 60;

// --- Arena ---

pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Units ---

/// Edge length of every unit's square footprint.
pub const TANK_SIZE: f64 = 40.0;

pub const PLAYER_MAX_HEALTH: u32 = 3;
pub const ENEMY_MAX_HEALTH: u32 = 1;

/// Player movement per frame along each active axis.
pub const PLAYER_SPEED: f64 = 3.0;

/// Player fire cooldown. The player does not use the level curve.
pub const PLAYER_FIRE_COOLDOWN_MS: f64 = 500.0;

/// Distance of the player spawn point above the bottom edge.
pub const PLAYER_START_BOTTOM_OFFSET: f64 = 100.0;

// --- Difficulty ---

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// AI speed at level 1 and level 10.
pub const ENEMY_SPEED_MIN: f64 = 1.5;
pub const ENEMY_SPEED_MAX: f64 = 4.5;

/// AI fire cooldown at level 1 and level 10.
pub const ENEMY_COOLDOWN_MAX_MS: f64 = 2000.0;
pub const ENEMY_COOLDOWN_MIN_MS: f64 = 600.0;

/// Hunt speed multiplier: base + per_level * level.
pub const HUNT_SPEED_BASE_FACTOR: f64 = 1.1;
pub const HUNT_SPEED_PER_LEVEL: f64 = 0.05;

/// Kills needed per difficulty step.
pub const KILLS_PER_LEVEL: u32 = 2;

// --- Projectiles ---

pub const BULLET_SIZE: f64 = 6.0;
pub const BULLET_SPEED: f64 = 8.0;

/// Gap between the hull edge and a freshly fired projectile.
pub const MUZZLE_STANDOFF: f64 = 10.0;

// --- AI ---

pub const HUNTING_RANGE: f64 = 300.0;
pub const ATTACK_RANGE: f64 = 250.0;

/// How long a unit keeps hunting a remembered position after losing sight.
pub const PLAYER_MEMORY_MS: u64 = 5000;

/// Sampling step for line-of-sight checks.
pub const LOS_STEP: f64 = 10.0;

/// Hunt stops closing in once within this distance of its target.
pub const HUNT_ARRIVE_DISTANCE: f64 = 10.0;

/// Patrol stops moving once within this distance of its target.
pub const PATROL_ARRIVE_DISTANCE: f64 = 5.0;

/// First patrol retarget interval range for a freshly spawned unit.
pub const PATROL_FIRST_INTERVAL_MIN_MS: u64 = 2000;
pub const PATROL_FIRST_INTERVAL_MAX_MS: u64 = 5000;

/// Patrol retarget interval range after the first retarget.
pub const PATROL_INTERVAL_MIN_MS: u64 = 3000;
pub const PATROL_INTERVAL_MAX_MS: u64 = 7000;

/// Radius of the detour target picked when a patrol path is blocked.
pub const PATROL_DETOUR_RADIUS: f64 = 100.0;

// --- Spawning ---

pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 3000;
pub const MAX_ENEMIES: usize = 5;

pub const SPAWN_ATTEMPTS: u32 = 100;
pub const SPAWN_FALLBACK_ATTEMPTS: u32 = 30;

/// Minimum distance between a new unit and the live player.
pub const SPAWN_MIN_PLAYER_DISTANCE: f64 = 100.0;

/// Minimum distance between a new unit and any live AI unit.
pub const SPAWN_MIN_ENEMY_DISTANCE: f64 = 70.0;

/// Clearance kept between a new unit and solid obstacles.
pub const SPAWN_OBSTACLE_BUFFER: f64 = 5.0;

/// Height of the top spawn strip.
pub const SPAWN_TOP_STRIP: f64 = 150.0;

/// Width of the left and right spawn strips.
pub const SPAWN_SIDE_STRIP: f64 = 100.0;

/// Height of the band used by the relaxed fallback pass.
pub const SPAWN_FALLBACK_BAND: f64 = 200.0;

// --- Scoring ---

pub const SCORE_RAM_KILL: u32 = 50;
pub const SCORE_SHOT_KILL: u32 = 100;

// --- Obstacles ---

pub const BREAKABLE_DURABILITY: u32 = 1;
pub const REINFORCED_DURABILITY: u32 = 3;

pub const OBSTACLE_COUNT_MIN: u32 = 15;
pub const OBSTACLE_COUNT_MAX: u32 = 24;
pub const OBSTACLE_PLACEMENT_ATTEMPTS: u32 = 50;

pub const SOLID_OBSTACLE_MIN_SIZE: f64 = 20.0;
pub const SOLID_OBSTACLE_MAX_SIZE: f64 = 60.0;
pub const PASSABLE_OBSTACLE_MIN_SIZE: f64 = 40.0;
pub const PASSABLE_OBSTACLE_MAX_SIZE: f64 = 100.0;

/// Half-size of the keep-clear box around the player start.
pub const PLAYER_START_CLEARANCE: f64 = 80.0;

/// Minimum gap between generated obstacles.
pub const OBSTACLE_SPACING: f64 = 20.0;

/// Obstacles whose top edge is above this line are mostly rejected,
/// keeping the enemy entry strip open.
pub const OBSTACLE_TOP_ZONE: f64 = 150.0;
pub const OBSTACLE_TOP_ZONE_REJECT_CHANCE: f64 = 0.7;
