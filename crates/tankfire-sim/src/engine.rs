//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies session commands,
//! runs all systems in their fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, with time supplied by the caller.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tankfire_core::commands::{InputIntent, SessionCommand};
use tankfire_core::components::Obstacle;
use tankfire_core::config::SimConfig;
use tankfire_core::error::Result;
use tankfire_core::events::GameEvent;
use tankfire_core::state::GameStateSnapshot;
use tankfire_core::types::{Rect, SimTime};

use crate::session::SessionState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    arena: Rect,
    time: SimTime,
    rng: ChaCha8Rng,
    session: SessionState,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with an already validated config.
    /// The world stays empty until the first `Initialize`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            arena: config.arena(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            session: SessionState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Validate `config`, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a session command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Reset all state, regenerate the obstacle field and start running.
    pub fn initialize(&mut self, now_ms: u64) {
        world_setup::setup_arena(&mut self.world, &mut self.rng, &self.config);
        self.session = SessionState::started(now_ms);
        self.events.clear();
        self.time = SimTime {
            frame: 0,
            now_ms,
        };
        info!(
            seed = self.config.seed,
            obstacles = self.world.query::<&Obstacle>().iter().count(),
            "Session started"
        );
    }

    /// Freeze or resume the simulation. The player keeps updating while frozen.
    pub fn set_running(&mut self, running: bool) {
        self.session.running = running;
    }

    /// Advance the simulation by one frame at `now_ms` and return the
    /// resulting snapshot.
    pub fn tick(&mut self, now_ms: u64, intent: &InputIntent) -> GameStateSnapshot {
        self.process_commands(now_ms);
        self.time.advance(now_ms);
        self.run_systems(now_ms, intent);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.session, events)
    }

    pub fn is_running(&self) -> bool {
        self.session.running
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Remove every entity and start a running session with no obstacles.
    #[cfg(test)]
    pub fn clear_arena(&mut self, now_ms: u64) {
        self.world.clear();
        self.session = SessionState::started(now_ms);
    }

    #[cfg(test)]
    pub fn place_player(&mut self, position: glam::DVec2) -> hecs::Entity {
        world_setup::spawn_player(&mut self.world, position)
    }

    #[cfg(test)]
    pub fn place_enemy(&mut self, position: glam::DVec2, level: u8) -> hecs::Entity {
        let now_ms = self.time.now_ms;
        world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            &self.config,
            position,
            level,
            now_ms,
        )
    }

    #[cfg(test)]
    pub fn place_obstacle(
        &mut self,
        bounds: Rect,
        kind: tankfire_core::enums::ObstacleKind,
    ) -> hecs::Entity {
        self.world.spawn((Obstacle::new(bounds, kind),))
    }

    #[cfg(test)]
    pub fn place_projectile(
        &mut self,
        projectile: tankfire_core::components::Projectile,
    ) -> hecs::Entity {
        world_setup::spawn_projectile(&mut self.world, projectile)
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now_ms: u64) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                SessionCommand::Initialize => self.initialize(now_ms),
                SessionCommand::SetRunning { running } => self.set_running(running),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_ms: u64, intent: &InputIntent) {
        let obstacles = systems::obstacle_field(&self.world);

        // 1. Player control (runs even when frozen)
        systems::player_control::run(&mut self.world, intent, &self.arena, &obstacles, now_ms);

        if self.session.running {
            // 2. Enemy AI (mode, movement, attack)
            systems::enemy_ai::run(
                &mut self.world,
                &mut self.rng,
                &self.arena,
                &obstacles,
                now_ms,
            );
            // 3. Ram contact (first contact only)
            systems::ram::run(&mut self.world, &mut self.session, &mut self.events);
        }

        // A defeat above ends the frame's combat; the final score is settled.
        if self.session.running {
            // 4. Projectile flight and hits
            systems::projectiles::run(
                &mut self.world,
                &self.arena,
                &mut self.session,
                &mut self.events,
            );
        }

        if self.session.running {
            // 5. Spawning
            systems::spawner::run(
                &mut self.world,
                &mut self.rng,
                &self.config,
                &mut self.session,
                now_ms,
                &mut self.events,
            );
        }

        // 6. Cleanup (defeated player)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
