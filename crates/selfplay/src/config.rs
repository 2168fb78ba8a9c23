//! Self-play configuration, read from TOML.
//!
//! ```toml
//! white = "search"
//! black = "reference"
//! depth_range = [1, 2]
//! reference_secs_range = [0.0, 1.0]
//! oracle = "material"
//! stats_path = "stats.txt"
//! max_games = 100
//! seed = 42
//! ```

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use neural_engine::{LinearOracle, ScoreOracle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::game::GameLoop;
use crate::player::{InteractivePlayer, Player, ReferencePlayer, SearchPlayer};
use crate::stats::StatsLog;

/// Which kind of player sits on a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Negamax driven by the score oracle
    Search,
    /// Time-bounded reference engine
    Reference,
    /// Moves typed on the terminal
    Human,
}

/// Where the score oracle comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleSource {
    Material,
    Json(PathBuf),
    Onnx(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Side A
    pub white: PlayerKind,
    /// Side B
    pub black: PlayerKind,
    /// Search depth is drawn from this inclusive range every game
    pub depth_range: [u32; 2],
    /// Reference think time in seconds, drawn every game
    pub reference_secs_range: [f64; 2],
    /// `material`, or a path to a `.json` or `.onnx` artifact
    pub oracle: String,
    pub stats_path: PathBuf,
    /// Stop after this many games; play forever when unset
    pub max_games: Option<u64>,
    /// Seed for the per-game draws; entropy when unset
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Search,
            black: PlayerKind::Reference,
            depth_range: [1, 2],
            reference_secs_range: [0.0, 1.0],
            oracle: "material".to_string(),
            stats_path: PathBuf::from("stats.txt"),
            max_games: None,
            seed: None,
        }
    }
}

impl SelfPlayConfig {
    /// Parses and validates TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: SelfPlayConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [lo, hi] = self.depth_range;
        if lo == 0 || lo > hi {
            return Err(ConfigError::Invalid(format!(
                "depth_range [{lo}, {hi}] must satisfy 1 <= lo <= hi"
            )));
        }
        let [lo, hi] = self.reference_secs_range;
        if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo <= hi) {
            return Err(ConfigError::Invalid(format!(
                "reference_secs_range [{lo}, {hi}] must satisfy 0 <= lo <= hi"
            )));
        }
        if self.oracle.trim().is_empty() {
            return Err(ConfigError::Invalid("oracle must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn oracle_source(&self) -> OracleSource {
        let path = Path::new(&self.oracle);
        match path.extension().and_then(|e| e.to_str()) {
            _ if self.oracle == "material" => OracleSource::Material,
            Some("onnx") => OracleSource::Onnx(path.to_path_buf()),
            _ => OracleSource::Json(path.to_path_buf()),
        }
    }

    /// Loads the score oracle once for the whole run.
    pub fn build_oracle(&self) -> Result<Rc<dyn ScoreOracle>, ConfigError> {
        let oracle: Rc<dyn ScoreOracle> = match self.oracle_source() {
            OracleSource::Material => Rc::new(LinearOracle::material()),
            OracleSource::Json(path) => Rc::new(LinearOracle::load(&path)?),
            #[cfg(feature = "onnx")]
            OracleSource::Onnx(path) => Rc::new(neural_engine::OnnxOracle::load(&path)?),
            #[cfg(not(feature = "onnx"))]
            OracleSource::Onnx(path) => {
                return Err(ConfigError::Invalid(format!(
                    "{} needs the `onnx` feature",
                    path.display()
                )))
            }
        };
        Ok(oracle)
    }

    fn build_player(
        &self,
        kind: PlayerKind,
        seed: Option<u64>,
        oracle: &Rc<dyn ScoreOracle>,
    ) -> Box<dyn Player> {
        let [lo, hi] = self.depth_range;
        let [secs_lo, secs_hi] = self.reference_secs_range;
        match kind {
            PlayerKind::Search => {
                Box::new(SearchPlayer::new(Rc::clone(oracle), lo).with_depth_range(lo..=hi, seed))
            }
            PlayerKind::Reference => Box::new(
                ReferencePlayer::new(Duration::from_secs_f64(secs_lo))
                    .with_secs_range(secs_lo, secs_hi, seed),
            ),
            PlayerKind::Human => Box::new(InteractivePlayer::stdio()),
        }
    }

    /// Builds the players, the stats log and the loop around them.
    pub fn build_loop(&self) -> Result<GameLoop, ConfigError> {
        self.validate()?;
        let oracle = self.build_oracle()?;
        let player_a = self.build_player(self.white, self.seed, &oracle);
        let player_b = self.build_player(self.black, self.seed.map(|s| s.wrapping_add(1)), &oracle);
        info!(
            white = player_a.name(),
            black = player_b.name(),
            oracle = oracle.name(),
            stats = %self.stats_path.display(),
            "self-play configured"
        );
        Ok(GameLoop::new(player_a, player_b, StatsLog::new(self.stats_path.clone())))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
