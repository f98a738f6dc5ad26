//! Terrain for TANKFIRE.
//!
//! Obstacle blocking queries, sampled line-of-sight,
//! and procedural arena layout.

pub use tankfire_core as core;

pub mod blocking;
pub mod layout;
pub mod los;

// Re-export key functions for convenience.
pub use blocking::{first_blocking, is_blocked, is_clear_with_margin};
pub use layout::generate_obstacles;
pub use los::has_line_of_sight;
