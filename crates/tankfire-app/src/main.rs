//! Tankfire CLI: runs a session headless, either on a synthetic clock or
//! in real time on the game loop thread.
//!
//! Usage:
//!   tankfire run --frames 3600 --seed 7
//!   RUST_LOG=debug tankfire run --script intents.json --realtime

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tankfire_app::game_loop::{spawn_game_loop, FRAME_DURATION};
use tankfire_app::harness::{load_config, run_headless, InputScript};
use tankfire_app::state::{AppState, GameLoopCommand};
use tankfire_core::commands::SessionCommand;
use tankfire_core::state::GameStateSnapshot;
use tankfire_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "tankfire")]
#[command(about = "Headless driver for the tankfire arena simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a session and run it until the frame limit or defeat
    Run {
        /// Maximum number of frames to run
        #[arg(long, default_value_t = 3600)]
        frames: u64,
        /// JSON config file (partial documents allowed)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,
        /// JSON input script; idle input if omitted
        #[arg(long)]
        script: Option<PathBuf>,
        /// Drive the 60Hz game loop thread on the wall clock
        #[arg(long)]
        realtime: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            frames,
            config,
            seed,
            script,
            realtime,
        } => {
            let config = load_config(config.as_deref(), seed)?;
            let script = match script {
                Some(path) => InputScript::load(&path)?,
                None => InputScript::default(),
            };
            info!(seed = config.seed, frames, realtime, "Starting run");

            let snapshot = if realtime {
                run_realtime(config, &script, frames)?
            } else {
                let mut engine = SimulationEngine::try_new(config)
                    .context("invalid simulation config")?;
                run_headless(&mut engine, &script, frames).last_snapshot
            };
            print_summary(&snapshot);
        }
    }
    Ok(())
}

/// Feed the script to the game loop thread one frame at a time.
fn run_realtime(
    config: tankfire_core::config::SimConfig,
    script: &InputScript,
    frames: u64,
) -> anyhow::Result<GameStateSnapshot> {
    let state = AppState::new();
    let handle = spawn_game_loop(config, &state)?;
    state.send(GameLoopCommand::Session(SessionCommand::Initialize));

    for frame in 0..frames {
        if !state.send(GameLoopCommand::Input(script.intent_at(frame))) {
            break;
        }
        std::thread::sleep(FRAME_DURATION);
        if frame > 0 && state.snapshot().is_some_and(|s| !s.hud.running) {
            break;
        }
    }

    state.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    Ok(state.snapshot().unwrap_or_default())
}

fn print_summary(snapshot: &GameStateSnapshot) {
    let hud = &snapshot.hud;
    println!();
    println!("=== RUN RESULTS ===");
    println!("  Frames:   {}", snapshot.time.frame);
    println!("  Score:    {}", hud.score);
    println!("  Kills:    {}", hud.kill_count);
    println!("  Level:    {}", hud.current_level);
    println!("  Health:   {}", hud.player_health);
    println!("  Enemies:  {}", hud.enemy_count);
    println!("  Running:  {}", hud.running);
}
