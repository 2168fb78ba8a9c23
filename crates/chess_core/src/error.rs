use thiserror::Error;

/// Errors raised by the rules provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// FEN text could not be parsed
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Move text is not of the form file-rank-file-rank[promotion]
    #[error("cannot parse move text {0:?}")]
    MoveParse(String),

    /// Move text is well formed but not legal in the current position
    #[error("illegal move {0}")]
    IllegalMove(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
