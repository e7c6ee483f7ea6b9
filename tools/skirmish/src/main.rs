//! skirmish: run a headless lane match and print the controller's timeline.
//!
//! Usage:
//!   skirmish --seed 7 --seconds 120
//!   skirmish --config tuning.toml --json

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lanewarden_core::config::ControllerConfig;
use lanewarden_core::constants::TICK_RATE;
use lanewarden_core::error::Result;
use lanewarden_core::events::MatchEvent;
use lanewarden_sim::{MatchConfig, MatchEngine};

/// Headless skirmish runner for the mode controller
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a scripted lane match and report every mode change")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Match length in seconds
    #[arg(long, default_value_t = 90.0)]
    seconds: f64,

    /// Controller tuning file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON instead of the timeline
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lanewarden=info,skirmish=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let controller = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading controller config");
            ControllerConfig::load(path)?
        }
        None => ControllerConfig::default(),
    };

    let mut engine = MatchEngine::new(MatchConfig {
        seed: args.seed,
        controller,
        ..Default::default()
    });

    let total_ticks = (args.seconds.max(0.0) * TICK_RATE as f64).round() as u64;
    let mut last = None;
    for _ in 0..total_ticks {
        let snapshot = engine.tick();
        if !args.json {
            for event in &snapshot.events {
                if let MatchEvent::ModeChanged { transition } = event {
                    println!(
                        "{:>8.2}s  {:<8} -> {:<8} ({}, threat {:.1})",
                        transition.at,
                        transition.from.as_str(),
                        transition.to.as_str(),
                        transition.reason,
                        transition.max_threat,
                    );
                }
            }
        }
        last = Some(snapshot);
    }

    let Some(snapshot) = last else {
        tracing::warn!("match ran for zero ticks");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let score = &snapshot.score;
        println!(
            "final: mode={} elixir={:.1} pushes={} defenses={} hostiles destroyed={} friendlies lost={} elixir spent={:.1}",
            snapshot.controller.mode,
            snapshot.elixir,
            score.pushes_launched,
            score.defenses_triggered,
            score.hostiles_destroyed,
            score.friendlies_lost,
            score.elixir_spent,
        );
    }

    Ok(())
}
