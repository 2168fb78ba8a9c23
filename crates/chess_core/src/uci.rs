use crate::board::Position;
use crate::error::{ChessError, ChessResult};
use crate::movegen::{legal_moves, pseudo_legal_moves};
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter());
    }
    s
}

/// Splits long algebraic move text (`e2e4`, `e7e8q`) into its squares and
/// optional promotion piece without consulting any position.
pub fn parse_uci_squares(txt: &str) -> ChessResult<(u8, u8, Option<PieceKind>)> {
    let bad = || ChessError::MoveParse(txt.to_string());
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(bad());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(bad)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(bad)?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(PieceKind::Pawn) | Some(PieceKind::King) | None => return Err(bad()),
            kind => kind,
        },
    };
    Ok((from, to, promo))
}

/// Parses move text and matches it against the legal moves of `pos`, so
/// castle and en-passant flags come out right. A pawn reaching the last rank
/// without a promotion letter promotes to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> ChessResult<Move> {
    match_move(pos, txt, legal_moves(pos))
}

/// Like [`parse_uci_move`] but accepts any pseudo-legal move, so a move that
/// leaves the mover's king in check is played rather than refused. Engines
/// that search pseudo-legally answer through this.
pub fn parse_pseudo_legal_move(pos: &Position, txt: &str) -> ChessResult<Move> {
    match_move(pos, txt, pseudo_legal_moves(pos))
}

fn match_move(pos: &Position, txt: &str, candidates: Vec<Move>) -> ChessResult<Move> {
    let (from, to, promo) = parse_uci_squares(txt)?;
    let wanted = promo.or_else(|| {
        let reaches_last_rank = rank_of(to) == pos.side_to_move.other().home_rank();
        match pos.piece_at(from) {
            Some(p) if p.kind == PieceKind::Pawn && reaches_last_rank => Some(PieceKind::Queen),
            _ => None,
        }
    });

    candidates
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == wanted)
        .ok_or_else(|| ChessError::IllegalMove(txt.to_string()))
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
