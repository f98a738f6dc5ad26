//! Simulation engine for TANKFIRE.
//!
//! Owns the hecs ECS world, runs the per-frame system pipeline,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use tankfire_core as core;
