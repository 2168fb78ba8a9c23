//! Game-ending predicates used by the game loop.

use crate::board::Position;
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::PieceKind;

impl Position {
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    /// A side whose king was captured is not stalemated; the game is already
    /// lost.
    pub fn is_stalemate(&self) -> bool {
        self.king_sq(self.side_to_move).is_some()
            && !self.in_check(self.side_to_move)
            && !has_legal_move(self)
    }

    /// Fifty full moves without a capture or pawn move have been played.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// The side to move may claim a draw under the fifty-move rule, either
    /// because the count is already reached or because one of its legal
    /// quiet moves would reach it.
    pub fn can_claim_fifty_moves(&self) -> bool {
        if self.is_fifty_move_draw() {
            return true;
        }
        if self.halfmove_clock < 99 {
            return false;
        }
        legal_moves(self).into_iter().any(|mv| {
            let is_pawn = self
                .piece_at(mv.from)
                .map(|p| p.kind == PieceKind::Pawn)
                .unwrap_or(false);
            !is_pawn && self.piece_at(mv.to).is_none()
        })
    }
}

/// True when the rendered board still shows both kings (`K` and `k`).
pub fn both_kings_present(rendered: &str) -> bool {
    rendered.contains('K') && rendered.contains('k')
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
