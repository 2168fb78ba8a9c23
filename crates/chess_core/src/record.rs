//! Append-only record of a game as a parent-linked chain of move nodes.

use crate::board::Position;
use crate::error::ChessResult;
use crate::movegen::pseudo_legal_moves;
use crate::types::{Color, Move};
use crate::uci::move_to_uci;
use crate::ChessError;

/// One played move and the node it follows (`None` for the first move).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameNode {
    pub parent: Option<usize>,
    pub mv: Move,
}

/// A game from the standard starting position.
///
/// Nodes are only ever appended; the current board is kept alongside so
/// referees do not have to replay the whole chain every turn.
#[derive(Clone, Debug, Default)]
pub struct GameRecord {
    nodes: Vec<GameNode>,
    board: Position,
}

impl GameRecord {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            board: Position::startpos(),
        }
    }

    /// Board after the last recorded move.
    pub fn board(&self) -> &Position {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The move that produced the current board, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.nodes.last().map(|n| n.mv)
    }

    /// Appends `mv` after checking the moving piece can make it on the
    /// current board. Returns the index of the new node.
    ///
    /// The mover's king safety is not checked: a king left in check can be
    /// captured on the next move, which ends the game.
    pub fn push(&mut self, mv: Move) -> ChessResult<usize> {
        if !pseudo_legal_moves(&self.board).contains(&mv) {
            return Err(ChessError::IllegalMove(move_to_uci(mv)));
        }
        let parent = self.nodes.len().checked_sub(1);
        self.nodes.push(GameNode { parent, mv });
        self.board = self.board.play(mv);
        Ok(self.nodes.len() - 1)
    }

    /// Walks the chain from the last node back to the first.
    pub fn line_back(&self) -> impl Iterator<Item = &GameNode> {
        let mut cursor = self.nodes.len().checked_sub(1);
        std::iter::from_fn(move || {
            let node = &self.nodes[cursor?];
            cursor = node.parent;
            Some(node)
        })
    }

    /// Moves in the order they were played.
    pub fn moves(&self) -> Vec<Move> {
        let mut line: Vec<Move> = self.line_back().map(|n| n.mv).collect();
        line.reverse();
        line
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
