//! Tankfire application.
//!
//! Headless drivers for the simulation: a fixed-rate game loop thread and a
//! scripted-input harness on a synthetic clock.

pub mod game_loop;
pub mod harness;
pub mod state;

pub use tankfire_core as core;
