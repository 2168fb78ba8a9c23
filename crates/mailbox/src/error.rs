use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailboxError {
    /// Move text is not of the form file-rank-file-rank[promotion]
    #[error("cannot parse move text {0:?}")]
    MoveParse(String),

    /// A move was applied from a square that holds no piece of the side to move
    #[error("no piece of the side to move on cell {0}")]
    NoPiece(usize),

    /// A move targets padding or a piece of the side to move
    #[error("cell {0} cannot be moved to")]
    BadTarget(usize),

    /// Board text is not 64 symbols from `.pnbrqkPNBRQK`
    #[error("invalid board text: {0}")]
    BadBoard(String),
}
