use crate::error::MailboxError;
use crate::square::*;

const INITIAL: &[u8; CELLS] = b"         \n         \n rnbqkbnr\n pppppppp\n ........\n ........\n ........\n ........\n PPPPPPPP\n RNBQKBNR\n         \n         \n";

const KNIGHT: [isize; 8] = [
    N + N + E,
    E + N + E,
    E + S + E,
    S + S + E,
    S + S + W,
    W + S + W,
    W + N + W,
    N + N + W,
];
const BISHOP: [isize; 4] = [N + E, S + E, S + W, N + W];
const ROOK: [isize; 4] = [N, E, S, W];
const ROYAL: [isize; 8] = [N, E, S, W, N + E, S + E, S + W, N + W];
const PAWN: [isize; 4] = [N, N + N, N + W, N + E];

fn directions(piece: u8) -> &'static [isize] {
    match piece {
        b'P' => &PAWN,
        b'N' => &KNIGHT,
        b'B' => &BISHOP,
        b'R' => &ROOK,
        b'Q' | b'K' => &ROYAL,
        _ => &[],
    }
}

/// Castling rights as (rook on A1 may castle, rook on H1 may castle) in the
/// orientation of the side they belong to.
pub type Castling = (bool, bool);

/// Board snapshot with the side to move in uppercase, playing north.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    board: [u8; CELLS],
    /// Castling rights of the side to move
    pub wc: Castling,
    /// Castling rights of the opponent
    pub bc: Castling,
    /// En-passant target cell, 0 when none
    pub ep: usize,
    /// Cell the opponent's king passed while castling last move, 0 when none
    pub kp: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// The standard starting position, white to move.
    pub fn initial() -> Self {
        Self {
            board: *INITIAL,
            wc: (true, true),
            bc: (true, true),
            ep: 0,
            kp: 0,
        }
    }

    /// Builds a position from 64 symbols, rank 8 (from the mover's side)
    /// first. Whitespace is ignored; uppercase pieces belong to the side to
    /// move. No en-passant or king-passant square is set.
    pub fn from_board_text(
        text: &str,
        wc: Castling,
        bc: Castling,
    ) -> Result<Self, MailboxError> {
        let symbols: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        if symbols.len() != 64 {
            return Err(MailboxError::BadBoard(format!(
                "{} symbols, expected 64",
                symbols.len()
            )));
        }
        let mut board = *INITIAL;
        for (i, &s) in symbols.iter().enumerate() {
            if !b".pnbrqkPNBRQK".contains(&s) {
                return Err(MailboxError::BadBoard(format!("unknown symbol {:?}", s as char)));
            }
            board[A8 + (i / 8) * 10 + i % 8] = s;
        }
        Ok(Self {
            board,
            wc,
            bc,
            ep: 0,
            kp: 0,
        })
    }

    /// Raw board cells, padding included.
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.board
    }

    /// Board as text: twelve rows of ten cells, whitespace around the 8×8
    /// squares. Stripping whitespace leaves exactly 64 symbols.
    pub fn board_text(&self) -> String {
        self.board.iter().map(|&c| c as char).collect()
    }

    /// Absence of either king means the game is over.
    pub fn has_both_kings(&self) -> bool {
        self.board.contains(&b'K') && self.board.contains(&b'k')
    }

    /// Enumerates pseudo-legal moves of the side to move.
    pub fn gen_moves(&self) -> Vec<MailboxMove> {
        let mut out = Vec::with_capacity(48);
        for (i, &p) in self.board.iter().enumerate() {
            if !p.is_ascii_uppercase() {
                continue;
            }
            for &d in directions(p) {
                let mut j = i as isize + d;
                loop {
                    let to = j as usize;
                    let q = self.board[to];
                    if q.is_ascii_whitespace() || q.is_ascii_uppercase() {
                        break;
                    }
                    if p == b'P' {
                        if (d == N || d == N + N) && q != b'.' {
                            break;
                        }
                        if d == N + N && (i < A1 - 10 || self.board[i - 10] != b'.') {
                            break;
                        }
                        if (d == N + W || d == N + E)
                            && q == b'.'
                            && to != self.ep
                            && to != self.kp
                        {
                            break;
                        }
                    }

                    let mut mv = MailboxMove::new(i, to);
                    if p == b'P' && (A8..=H8).contains(&to) {
                        mv.promotion = Some(Promotion::Queen);
                    }
                    out.push(mv);

                    if matches!(p, b'P' | b'N' | b'K') || q.is_ascii_lowercase() {
                        break;
                    }
                    // A rook sliding up to its own king offers castling.
                    let next = (j + E) as usize;
                    let prev = (j + W) as usize;
                    if i == A1 && self.board[next] == b'K' && self.wc.0 {
                        out.push(MailboxMove::new(next, prev));
                    }
                    if i == H1 && self.board[prev] == b'K' && self.wc.1 {
                        out.push(MailboxMove::new(prev, next));
                    }
                    j += d;
                }
            }
        }
        out
    }

    /// Turns the board 180° and hands the move to the other side.
    pub fn rotate(&self) -> Position {
        let mut board = [0u8; CELLS];
        for (dst, &c) in board.iter_mut().zip(self.board.iter().rev()) {
            *dst = swap_case(c);
        }
        Position {
            board,
            wc: self.bc,
            bc: self.wc,
            ep: rotate_cell(self.ep),
            kp: rotate_cell(self.kp),
        }
    }

    /// Plays a move produced by [`Position::gen_moves`] and returns the
    /// position from the opponent's point of view.
    pub fn apply(&self, mv: MailboxMove) -> Position {
        let (i, j) = (mv.from, mv.to);
        let p = self.board[i];
        let q = self.board[j];
        let mut board = self.board;
        let (mut wc, mut bc) = (self.wc, self.bc);
        let (mut ep, mut kp) = (0, 0);

        board[j] = p;
        board[i] = b'.';
        if i == A1 {
            wc.0 = false;
        }
        if i == H1 {
            wc.1 = false;
        }
        if j == A8 {
            bc.1 = false;
        }
        if j == H8 {
            bc.0 = false;
        }

        if p == b'K' {
            wc = (false, false);
            if i.abs_diff(j) == 2 {
                kp = (i + j) / 2;
                board[if j < i { A1 } else { H1 }] = b'.';
                board[kp] = b'R';
            }
        }
        if p == b'P' {
            if (A8..=H8).contains(&j) {
                board[j] = mv.promotion.unwrap_or(Promotion::Queen).piece();
            }
            let step = j as isize - i as isize;
            if step == 2 * N {
                ep = i - 10;
            }
            if (step == N + W || step == N + E) && q == b'.' {
                board[j + 10] = b'.';
            }
        }

        Position {
            board,
            wc,
            bc,
            ep,
            kp,
        }
        .rotate()
    }

    /// Like [`Position::apply`] but for moves that come from outside the
    /// engine: the origin must hold a piece of the side to move and the
    /// destination must be a square not occupied by one.
    pub fn try_apply(&self, mv: MailboxMove) -> Result<Position, MailboxError> {
        match self.board.get(mv.from) {
            Some(p) if p.is_ascii_uppercase() => {}
            _ => return Err(MailboxError::NoPiece(mv.from)),
        }
        match self.board.get(mv.to) {
            Some(q) if *q == b'.' || q.is_ascii_lowercase() => {}
            _ => return Err(MailboxError::BadTarget(mv.to)),
        }
        Ok(self.apply(mv))
    }
}

fn rotate_cell(cell: usize) -> usize {
    if cell == 0 {
        0
    } else {
        ROTATE - cell
    }
}

fn swap_case(c: u8) -> u8 {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
