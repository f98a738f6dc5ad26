//! Scripted-input harness: replays synthetic player input against the engine.
//!
//! A script is a JSON list of steps, each holding one intent for a number of
//! frames:
//!
//! ```json
//! [
//!   { "frames": 60, "intent": { "move_x": 1, "move_y": 0, "aim_angle": -1.57, "fire": false } },
//!   { "frames": 1,  "intent": { "move_x": 0, "move_y": 0, "aim_angle": -1.57, "fire": true } }
//! ]
//! ```
//!
//! After the last step its intent is held for the rest of the run.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use tankfire_core::commands::{InputIntent, SessionCommand};
use tankfire_core::config::SimConfig;
use tankfire_core::constants::FRAME_RATE;
use tankfire_core::events::GameEvent;
use tankfire_core::state::GameStateSnapshot;
use tankfire_sim::SimulationEngine;

use crate::game_loop::log_session_end;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u64,
    pub intent: InputIntent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading script {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid input script {}", path.display()))
    }

    /// Intent for the zero-based `frame`. An empty script is idle input.
    pub fn intent_at(&self, frame: u64) -> InputIntent {
        let mut start = 0u64;
        for step in &self.steps {
            let end = start.saturating_add(step.frames);
            if frame < end {
                return step.intent;
            }
            start = end;
        }
        self.steps
            .last()
            .map(|step| step.intent)
            .unwrap_or_default()
    }
}

/// Read a (possibly partial) JSON config, apply the seed override and validate.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<SimConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed reading config {}", path.display()))?;
            SimConfig::from_json(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.validate().context("invalid simulation config")?;
    Ok(config)
}

/// Synthetic clock: timestamp of `frame` at the nominal frame rate.
pub fn frame_time_ms(frame: u64) -> u64 {
    frame * 1000 / FRAME_RATE as u64
}

/// Outcome of a headless run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub frames: u64,
    /// Set if the player was defeated during the run.
    pub final_score: Option<u32>,
    pub last_snapshot: GameStateSnapshot,
}

/// Start a session and drive it for up to `max_frames` frames on the
/// synthetic clock. Stops early when the session ends.
pub fn run_headless(
    engine: &mut SimulationEngine,
    script: &InputScript,
    max_frames: u64,
) -> RunSummary {
    engine.queue_command(SessionCommand::Initialize);

    let mut summary = RunSummary {
        frames: 0,
        final_score: None,
        last_snapshot: GameStateSnapshot::default(),
    };

    for frame in 0..max_frames {
        let snapshot = engine.tick(frame_time_ms(frame), &script.intent_at(frame));
        summary.frames = frame + 1;
        log_session_end(&snapshot);

        let ended = snapshot.events.iter().find_map(|event| match event {
            GameEvent::SessionEnded { final_score } => Some(*final_score),
            _ => None,
        });
        summary.last_snapshot = snapshot;
        if let Some(score) = ended {
            summary.final_score = Some(score);
            break;
        }
    }

    info!(
        frames = summary.frames,
        score = summary.last_snapshot.hud.score,
        kills = summary.last_snapshot.hud.kill_count,
        level = summary.last_snapshot.hud.current_level,
        "Run complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(frames: u64, move_x: i8) -> ScriptStep {
        ScriptStep {
            frames,
            intent: InputIntent {
                move_x,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_script_steps_then_holds_last() {
        let script = InputScript {
            steps: vec![step(2, 1), step(3, -1)],
        };
        assert_eq!(script.intent_at(0).move_x, 1);
        assert_eq!(script.intent_at(1).move_x, 1);
        assert_eq!(script.intent_at(2).move_x, -1);
        assert_eq!(script.intent_at(4).move_x, -1);
        assert_eq!(script.intent_at(500).move_x, -1);
    }

    #[test]
    fn test_empty_script_is_idle() {
        let script = InputScript::default();
        assert_eq!(script.intent_at(0), InputIntent::default());
        assert_eq!(script.intent_at(99), InputIntent::default());
    }

    #[test]
    fn test_script_parses_from_json() {
        let script = InputScript::from_json(
            r#"[{"frames": 10, "intent": {"move_x": 0, "move_y": -1, "aim_angle": 0.5, "fire": true}}]"#,
        )
        .unwrap();
        assert_eq!(script.steps.len(), 1);
        assert_eq!(script.steps[0].frames, 10);
        assert!(script.steps[0].intent.fire);
        assert_eq!(script.intent_at(3).move_y, -1);
    }

    #[test]
    fn test_frame_time_is_monotonic_sixtieths() {
        assert_eq!(frame_time_ms(0), 0);
        assert_eq!(frame_time_ms(60), 1000);
        assert_eq!(frame_time_ms(3), 50);
        assert!(frame_time_ms(181) > 3000);
    }

    #[test]
    fn test_load_config_defaults_and_seed_override() {
        let config = load_config(None, Some(99)).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_enemies, SimConfig::default().max_enemies);
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!("tankfire-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "seed": 5, "max_enemies": 0 }"#).unwrap();
        let err = load_config(Some(&path), None).unwrap_err();
        assert!(format!("{err:#}").contains("maximum concurrent enemies"));

        std::fs::write(&path, r#"{ "seed": 5, "obstacles": false }"#).unwrap();
        let config = load_config(Some(&path), None).unwrap();
        assert_eq!(config.seed, 5);
        assert!(!config.obstacles);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_script_reports_path() {
        let err = InputScript::load(Path::new("/nonexistent/tankfire-script.json")).unwrap_err();
        assert!(err.to_string().contains("tankfire-script.json"));
    }

    #[test]
    fn test_headless_run_is_repeatable() {
        let script = InputScript {
            steps: vec![step(90, 1), step(90, -1)],
        };
        let mut a = SimulationEngine::new(SimConfig::default());
        let mut b = SimulationEngine::new(SimConfig::default());

        let run_a = run_headless(&mut a, &script, 400);
        let run_b = run_headless(&mut b, &script, 400);

        assert_eq!(run_a.frames, run_b.frames);
        assert_eq!(run_a.final_score, run_b.final_score);
        assert_eq!(
            serde_json::to_string(&run_a.last_snapshot).unwrap(),
            serde_json::to_string(&run_b.last_snapshot).unwrap()
        );
        assert!(run_a.last_snapshot.time.frame > 0);
    }
}
