//! Dodge Machina headless runner
//!
//! Drives a seeded session at the nominal frame rate with a scripted tap
//! pattern and logs what happened. Rendering and audio belong to the host
//! engine; this binary only exercises the simulation.
//!
//! Usage: `dodge-machina [tuning.json] [--seed N] [--frames N]`

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use dodge_machina::Tuning;
use dodge_machina::consts::FRAME_DT;
use dodge_machina::sim::{GameEvent, Session, TickInput, WorldStatus};

const DEFAULT_SEED: u64 = 0xD0D6E;
const DEFAULT_FRAMES: u64 = 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "dodge-machina", about = "Run a seeded Dodge Machina session headless")]
struct Cli {
    /// Tuning JSON file (built-in tuning when omitted)
    tuning: Option<PathBuf>,

    /// Session seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u64,
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let cli = Cli::parse();
    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let seed = cli.seed;
    let frames = cli.frames;

    log::info!("Dodge Machina (headless) starting: seed={} frames={}", seed, frames);

    let mut session = Session::new(seed, tuning);
    let mut runs = 1u32;
    let mut best_score = 0.0f32;
    let mut teleports = 0u32;
    let mut kills = 0u32;

    for i in 0..frames {
        let input = scripted_input(&session, i);
        for event in session.step(&input, FRAME_DT) {
            match event {
                GameEvent::Teleported { .. } => teleports += 1,
                GameEvent::EnemyKilled { .. } | GameEvent::EnemiesCollided { .. } => kills += 1,
                GameEvent::PlayerDied => {
                    best_score = best_score.max(session.world.score);
                    log::info!(
                        "Run {} ended at frame {} with score {:.0}",
                        runs,
                        session.world.frame,
                        session.world.score
                    );
                }
                GameEvent::WorldReset => runs += 1,
                _ => {}
            }
        }
    }
    best_score = best_score.max(session.world.score);

    log::info!(
        "Done: {} run(s), best score {:.0}, {} teleports, {} enemy kills",
        runs,
        best_score,
        teleports,
        kills
    );
    println!(
        "runs={} best_score={:.0} shields={} status={:?}",
        runs,
        best_score,
        session.world.player.display_shield(),
        session.world.status
    );
}

/// Hop between the lower corners every two seconds, restart a second after dying
fn scripted_input(session: &Session, i: u64) -> TickInput {
    let tuning = &session.tuning;
    match session.world.status {
        WorldStatus::GameOver => TickInput {
            tap: (i % 60 == 0).then(|| tuning.player_start()),
            pause: false,
        },
        _ if i % 120 == 0 => {
            let x = if (i / 120) % 2 == 0 {
                tuning.screen_width * 0.25
            } else {
                tuning.screen_width * 0.75
            };
            TickInput {
                tap: Some(Vec2::new(x, tuning.screen_height * 0.8)),
                pause: false,
            }
        }
        _ => TickInput::default(),
    }
}
