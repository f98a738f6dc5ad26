//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tankfire_core::commands::{InputIntent, SessionCommand};
use tankfire_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held input intent; it applies to every frame until the next one.
    Input(InputIntent),
    /// A session command to forward to the simulation engine.
    Session(SessionCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - The latest snapshot is `Arc<Mutex<...>>`, shared with the game loop thread
pub struct AppState {
    /// Channel sender to the game loop thread. `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the game loop. Returns false if the loop is
    /// not started or has exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard
                .as_ref()
                .is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}
