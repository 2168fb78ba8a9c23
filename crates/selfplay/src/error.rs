use chess_core::ChessError;
use mailbox::MailboxError;
use neural_engine::{OracleError, SearchError};
use std::path::PathBuf;
use thiserror::Error;

/// Anything that goes wrong while a player produces a move.
///
/// Every variant except [`PlayerError::Interrupted`] costs the player the
/// game.
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error(transparent)]
    Chess(#[from] ChessError),
    #[error(transparent)]
    Mailbox(#[from] MailboxError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("{0} has no move to play")]
    NoMove(String),
    #[error("player i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended or play was stopped from outside
    #[error("interrupted")]
    Interrupted,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to append to {path}: {source}")]
    Stats {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("failed to load score oracle: {0}")]
    Oracle(#[from] OracleError),
}
