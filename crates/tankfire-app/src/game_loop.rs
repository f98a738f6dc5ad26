//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread. Commands arrive via an `mpsc`
//! channel; the latest snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::info;

use tankfire_core::commands::InputIntent;
use tankfire_core::config::SimConfig;
use tankfire_core::constants::FRAME_RATE;
use tankfire_core::events::GameEvent;
use tankfire_core::state::GameStateSnapshot;
use tankfire_sim::SimulationEngine;

use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread and wires it into `state`.
///
/// The frame clock starts when the thread does.
pub fn spawn_game_loop(config: SimConfig, state: &AppState) -> anyhow::Result<JoinHandle<()>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::clone(&state.latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("tankfire-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .context("failed to spawn game loop thread")?;

    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = Some(cmd_tx);
    }
    Ok(handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut intent = InputIntent::default();
    let epoch = Instant::now();
    let mut next_tick_time = epoch;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(next)) => intent = next,
                Ok(GameLoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame on the wall clock
        let now_ms = epoch.elapsed().as_millis() as u64;
        let snapshot = engine.tick(now_ms, &intent);
        log_session_end(&snapshot);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_tick_time += FRAME_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Log the final score if this frame ended the session.
pub fn log_session_end(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        if let GameEvent::SessionEnded { final_score } = event {
            info!(
                final_score,
                kills = snapshot.hud.kill_count,
                frame = snapshot.time.frame,
                "Session ended"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankfire_core::commands::SessionCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Session(SessionCommand::Initialize))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputIntent {
            move_x: 1,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Session(SessionCommand::Initialize)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Input(InputIntent { move_x: 1, .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(SessionCommand::Initialize);

        // Run long enough for a few spawns
        for frame in 0..600u64 {
            engine.tick(frame * 16, &InputIntent::default());
        }

        let snapshot = engine.tick(600 * 16, &InputIntent::default());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let state = AppState::new();
        let handle = spawn_game_loop(SimConfig::default(), &state).unwrap();

        assert!(state.send(GameLoopCommand::Session(SessionCommand::Initialize)));
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = state.snapshot().expect("loop should have published");
        assert!(snapshot.hud.running);
        assert!(snapshot.player.is_some());

        assert!(state.send(GameLoopCommand::Shutdown));
        handle.join().unwrap();
        assert!(!state.send(GameLoopCommand::Shutdown), "Loop has exited");
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.667ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
