use crate::board::{Position, DIAGONALS, KING_STEPS, KNIGHT_STEPS, ORTHOGONALS};
use crate::types::*;

/// Generate all legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);
    out.retain(|&mv| is_legal(pos, mv));
}

/// True when the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    pseudo_legal_moves(pos)
        .into_iter()
        .any(|mv| is_legal(pos, mv))
}

/// Moves that follow the piece movement rules without regard to the mover's
/// own king: it may be left or put in check, and castling may start from or
/// pass through an attacked square.
pub fn pseudo_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves(pos, &mut out);
    out
}

fn is_legal(pos: &Position, mv: Move) -> bool {
    let mover = pos.side_to_move;
    if mv.is_castle {
        let crossed = (mv.from + mv.to) / 2;
        if pos.in_check(mover) || pos.is_square_attacked(crossed, mover.other()) {
            return false;
        }
    }
    !pos.play(mv).in_check(mover)
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_STEPS, out),
            PieceKind::Bishop => gen_rays(pos, from, pc.color, &DIAGONALS, out),
            PieceKind::Rook => gen_rays(pos, from, pc.color, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_rays(pos, from, pc.color, &DIAGONALS, out);
                gen_rays(pos, from, pc.color, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, &KING_STEPS, out);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if rank_of(to) == c.other().home_rank() {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&pk| Move::with_promo(from, to, pk)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank = c.home_rank() + dir;

    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, c, out);
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let to = match sq(f + df, r + dir) {
            Some(to) => to,
            None => continue,
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in steps {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_rays(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for (df, dr) in dirs {
        let mut f = file_of(from) + df;
        let mut r = rank_of(from) + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let rank = c.home_rank();
    if sq(4, rank) != Some(from) {
        return;
    }
    let empty = |files: &[i8]| {
        files
            .iter()
            .all(|&f| sq(f, rank).map(|s| pos.piece_at(s).is_none()).unwrap_or(false))
    };

    // Attacks on the king's path are checked by the legality filter.
    // (right, squares that must be empty, king destination file)
    let sides: [(bool, &[i8], i8); 2] = [
        (pos.castling.kingside(c), &[5, 6], 6),
        (pos.castling.queenside(c), &[1, 2, 3], 2),
    ];
    for (allowed, must_be_empty, dest_file) in sides {
        if allowed && empty(must_be_empty) {
            if let Some(to) = sq(dest_file, rank) {
                let mut mv = Move::new(from, to);
                mv.is_castle = true;
                out.push(mv);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
