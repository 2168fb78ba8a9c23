use std::path::PathBuf;
use thiserror::Error;

/// Board text that cannot be turned into a feature vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("board text holds {0} squares, expected 64")]
    BadLength(usize),
    #[error("unknown board symbol {0:?}")]
    BadSymbol(char),
}

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("oracle returned {got} scores for {expected} positions")]
    LengthMismatch { expected: usize, got: usize },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed weight artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid weight artifact: {0}")]
    Artifact(String),
    #[error("model error: {0}")]
    Model(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no legal moves in the searched position")]
    NoLegalMoves,
    #[error("search depth must be at least 1")]
    InvalidDepth,
    #[error("color must be +1 or -1, got {0}")]
    InvalidColor(i8),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
