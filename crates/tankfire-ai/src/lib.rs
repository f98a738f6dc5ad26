//! Enemy AI for TANKFIRE.
//!
//! Implements the patrol/hunt state machine, level-driven profiles,
//! obstacle-aware steering, and the attack decision.

pub mod attack;
pub mod fsm;
pub mod profiles;
pub mod steering;

pub use tankfire_core as core;

#[cfg(test)]
mod tests;
