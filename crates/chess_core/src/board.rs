use crate::error::{ChessError, ChessResult};
use crate::types::*;

pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn clear(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drops the right tied to a rook home square once anything leaves or lands on it.
    fn touch(&mut self, square: u8) {
        match square {
            0 => self.wq = false,
            7 => self.wk = false,
            56 => self.bq = false,
            63 => self.bk = false,
            _ => {}
        }
    }
}

/// Immutable board snapshot in the absolute convention.
///
/// Children are produced with [`Position::play`]; a position is never
/// changed in place once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut board = [None; 64];
        for (f, &kind) in BACK_RANK.iter().enumerate() {
            board[f] = Some(Piece::new(Color::White, kind));
            board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parses Forsyth-Edwards Notation. The move counters may be omitted.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let bad = |why: &str| ChessError::InvalidFen(format!("{why} in {fen:?}"));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(bad("expected at least 4 fields"));
        }

        let mut board = [None; 64];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let piece = Piece::from_symbol(ch).ok_or_else(|| bad("unknown piece"))?;
                    let s = sq(file, rank).ok_or_else(|| bad("too many files"))?;
                    board[s as usize] = Some(piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(bad("rank does not cover 8 files"));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("side to move must be w or b")),
        };

        let mut castling = CastlingRights::default();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(bad("invalid castling flag")),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            s => Some(coord_to_sq(s).ok_or_else(|| bad("invalid en-passant square"))?),
        };

        let halfmove_clock: u32 = match parts.get(4) {
            Some(s) => s.parse().map_err(|_| bad("invalid halfmove clock"))?,
            None => 0,
        };
        let fullmove_number: u32 = match parts.get(5) {
            Some(s) => s.parse().map_err(|_| bad("invalid fullmove number"))?,
            None => 1,
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        let king = Some(Piece::new(c, PieceKind::King));
        self.board.iter().position(|&p| p == king).map(|i| i as u8)
    }

    /// A side without a king is never considered in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        let holds = |s: Option<u8>, kinds: &[PieceKind]| {
            s.and_then(|s| self.piece_at(s))
                .map(|pc| pc.color == by && kinds.contains(&pc.kind))
                .unwrap_or(false)
        };

        // A pawn attacks diagonally forward, so look one rank behind the target.
        for df in [-1, 1] {
            if holds(sq(tf + df, tr - by.forward()), &[PieceKind::Pawn]) {
                return true;
            }
        }
        if KNIGHT_STEPS
            .iter()
            .any(|(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::Knight]))
        {
            return true;
        }
        if KING_STEPS
            .iter()
            .any(|(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::King]))
        {
            return true;
        }

        let sliders = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, kinds) in sliders {
            for &(df, dr) in dirs.iter() {
                if holds(self.first_piece_along(target, df, dr), &kinds) {
                    return true;
                }
            }
        }
        false
    }

    /// Square of the first occupied square from `from` (exclusive) in a direction.
    fn first_piece_along(&self, from: u8, df: i8, dr: i8) -> Option<u8> {
        let mut f = file_of(from) + df;
        let mut r = rank_of(from) + dr;
        while let Some(s) = sq(f, r) {
            if self.piece_at(s).is_some() {
                return Some(s);
            }
            f += df;
            r += dr;
        }
        None
    }

    /// Returns the position after `mv`. `mv` is expected to come from
    /// [`crate::legal_moves`]; a move from an empty square leaves the board as is.
    pub fn play(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let moved = match self.piece_at(mv.from) {
            Some(p) => p,
            None => return next,
        };
        let mut captured = self.piece_at(mv.to);

        next.en_passant = None;
        next.set_piece(mv.from, None);
        next.set_piece(mv.to, Some(moved));

        if mv.is_en_passant {
            // The captured pawn sits beside the mover, on the destination file.
            if let Some(cs) = sq(file_of(mv.to), rank_of(mv.from)) {
                captured = next.piece_at(cs);
                next.set_piece(cs, None);
            }
        }

        if moved.kind == PieceKind::Pawn {
            if rank_of(mv.to) == moved.color.other().home_rank() {
                let kind = mv.promo.unwrap_or(PieceKind::Queen);
                next.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
            }
            if (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
                next.en_passant = sq(file_of(mv.from), (rank_of(mv.from) + rank_of(mv.to)) / 2);
            }
        }

        if moved.kind == PieceKind::King && (file_of(mv.to) - file_of(mv.from)).abs() == 2 {
            let rank = rank_of(mv.from);
            let (rook_file, rook_dest) = if file_of(mv.to) > file_of(mv.from) {
                (7, 5)
            } else {
                (0, 3)
            };
            if let (Some(rf), Some(rt)) = (sq(rook_file, rank), sq(rook_dest, rank)) {
                let rook = next.piece_at(rf);
                next.set_piece(rf, None);
                next.set_piece(rt, rook);
            }
        }

        if moved.kind == PieceKind::King {
            next.castling.clear(moved.color);
        }
        next.castling.touch(mv.from);
        next.castling.touch(mv.to);

        next.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.other();
        next
    }

    /// Renders the board as 8 lines of 8 space-separated symbols, rank 8 first,
    /// `.` for an empty square.
    pub fn render(&self) -> String {
        (0..8)
            .rev()
            .map(|rank| {
                (0..8)
                    .map(|file| {
                        sq(file, rank)
                            .and_then(|s| self.piece_at(s))
                            .map(Piece::symbol)
                            .unwrap_or('.')
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
