//! Self-play CLI
//!
//! Plays games between the configured players and appends one outcome line
//! per game to the stats file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use selfplay::{PlayerKind, SelfPlayConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "selfplay",
    about = "Neural search self-play against a reference engine"
)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player for side A (white)
    #[arg(long, value_enum)]
    white: Option<PlayerKind>,

    /// Player for side B (black)
    #[arg(long, value_enum)]
    black: Option<PlayerKind>,

    /// Score oracle: `material`, or a .json / .onnx artifact
    #[arg(long)]
    oracle: Option<String>,

    /// File the per-game outcome lines are appended to
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Number of games to play (default: forever)
    #[arg(long)]
    games: Option<u64>,

    /// Random seed for per-game depth and think time
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed search depth instead of a per-game draw
    #[arg(long)]
    depth: Option<u32>,
}

impl Args {
    fn apply(&self, config: &mut SelfPlayConfig) {
        if let Some(kind) = self.white {
            config.white = kind;
        }
        if let Some(kind) = self.black {
            config.black = kind;
        }
        if let Some(oracle) = &self.oracle {
            config.oracle = oracle.clone();
        }
        if let Some(stats) = &self.stats {
            config.stats_path = stats.clone();
        }
        if self.games.is_some() {
            config.max_games = self.games;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(depth) = self.depth {
            config.depth_range = [depth, depth];
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SelfPlayConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SelfPlayConfig::default(),
    };
    args.apply(&mut config);

    let mut game_loop = config.build_loop().context("setting up self-play")?;
    let played = game_loop
        .run(config.max_games)
        .context("self-play stopped")?;
    info!(played, "self-play finished");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
