//! Negamax with alpha-beta pruning over oracle scores.
//!
//! Every node generates its moves, builds all children, and scores them
//! with one oracle call. Children are then searched best-score first so
//! cutoffs come early.

use crate::error::{OracleError, SearchError};
use crate::features::encode_position;
use crate::oracle::ScoreOracle;
use mailbox::{MailboxMove, Position};
use tracing::debug;

/// Score given to a child in which a king has been captured. It overrides
/// whatever the oracle said about that child.
pub const CHECKMATE_SCORE: f32 = 1e6;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    /// Value from the side to move's point of view
    pub value: f32,
    pub best_move: Option<MailboxMove>,
    /// Nodes expanded, root included
    pub nodes: u64,
    pub oracle_calls: u64,
}

/// Depth-bounded negamax searcher.
///
/// Holds no state between searches other than counters, which reset at
/// every root call.
pub struct SearchEngine<'a> {
    oracle: &'a dyn ScoreOracle,
    pruning: bool,
    nodes: u64,
    oracle_calls: u64,
}

impl<'a> SearchEngine<'a> {
    pub fn new(oracle: &'a dyn ScoreOracle) -> Self {
        Self {
            oracle,
            pruning: true,
            nodes: 0,
            oracle_calls: 0,
        }
    }

    /// Disables alpha-beta cutoffs. The value returned is the same, only
    /// more nodes are visited.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Searches `pos` to `depth` plies.
    ///
    /// `color` is +1 or -1 and picks the orientation children are encoded
    /// in: they are mirrored when it is +1. It alternates on every ply.
    pub fn search(
        &mut self,
        pos: &Position,
        depth: u32,
        alpha: f32,
        beta: f32,
        color: i8,
    ) -> Result<SearchResult, SearchError> {
        if depth == 0 {
            return Err(SearchError::InvalidDepth);
        }
        if color != 1 && color != -1 {
            return Err(SearchError::InvalidColor(color));
        }
        self.nodes = 0;
        self.oracle_calls = 0;

        let (value, best_move) = self.negamax(pos, depth, alpha, beta, color)?;
        debug!(
            depth,
            value,
            nodes = self.nodes,
            oracle = self.oracle.name(),
            "search finished"
        );
        Ok(SearchResult {
            value,
            best_move,
            nodes: self.nodes,
            oracle_calls: self.oracle_calls,
        })
    }

    /// Full-window search with `color = +1`, as the players use it.
    pub fn search_root(&mut self, pos: &Position, depth: u32) -> Result<SearchResult, SearchError> {
        self.search(pos, depth, f32::NEG_INFINITY, f32::INFINITY, 1)
    }

    fn negamax(
        &mut self,
        pos: &Position,
        depth: u32,
        mut alpha: f32,
        beta: f32,
        color: i8,
    ) -> Result<(f32, Option<MailboxMove>), SearchError> {
        self.nodes += 1;

        let moves = pos.gen_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        let children: Vec<Position> = moves.iter().map(|&mv| pos.apply(mv)).collect();

        let batch = children
            .iter()
            .map(|child| encode_position(child, color == 1))
            .collect::<Result<Vec<_>, _>>()?;
        let mut scores = self.oracle.score(&batch)?;
        self.oracle_calls += 1;
        if scores.len() != batch.len() {
            return Err(OracleError::LengthMismatch {
                expected: batch.len(),
                got: scores.len(),
            }
            .into());
        }

        for (score, child) in scores.iter_mut().zip(&children) {
            if !child.has_both_kings() {
                *score = CHECKMATE_SCORE;
            }
        }

        // Stable, so equal scores keep generation order.
        let mut order: Vec<(f32, usize)> = scores.into_iter().zip(0..).collect();
        order.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut best_value = f32::NEG_INFINITY;
        let mut best_move = None;
        for (score, idx) in order {
            let value = if depth == 1 || score == CHECKMATE_SCORE {
                score
            } else {
                let (child_value, _) =
                    self.negamax(&children[idx], depth - 1, -beta, -alpha, -color)?;
                -child_value
            };

            if value > best_value {
                best_value = value;
                best_move = Some(moves[idx]);
            }
            if self.pruning {
                if value > alpha {
                    alpha = value;
                }
                if alpha > beta {
                    break;
                }
            }
        }

        Ok((best_value, best_move))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
