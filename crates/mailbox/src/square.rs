//! Cell numbering and move text for the mailbox board.

use crate::error::MailboxError;

pub const A1: usize = 91;
pub const H1: usize = 98;
pub const A8: usize = 21;
pub const H8: usize = 28;

/// Number of cells, padding included.
pub const CELLS: usize = 120;

/// Subtracting a cell from this turns the board 180°.
pub const ROTATE: usize = CELLS - 1;

pub const N: isize = -10;
pub const E: isize = 1;
pub const S: isize = 10;
pub const W: isize = -1;

/// Pieces a pawn may promote to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    /// Lowercase letter used in move text.
    pub fn letter(self) -> char {
        match self {
            Promotion::Knight => 'n',
            Promotion::Bishop => 'b',
            Promotion::Rook => 'r',
            Promotion::Queen => 'q',
        }
    }

    pub fn from_letter(c: char) -> Option<Promotion> {
        match c {
            'n' => Some(Promotion::Knight),
            'b' => Some(Promotion::Bishop),
            'r' => Some(Promotion::Rook),
            'q' => Some(Promotion::Queen),
            _ => None,
        }
    }

    /// Board byte for the promoted piece of the side to move.
    pub(crate) fn piece(self) -> u8 {
        self.letter().to_ascii_uppercase() as u8
    }
}

/// A move as a pair of cells in the orientation of the board it is played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MailboxMove {
    pub from: usize,
    pub to: usize,
    pub promotion: Option<Promotion>,
}

impl MailboxMove {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// The same move seen from the other side of the board.
    pub fn rotated(self) -> Self {
        Self {
            from: ROTATE - self.from,
            to: ROTATE - self.to,
            promotion: self.promotion,
        }
    }
}

/// Cell of an algebraic square (`e2`) on an unrotated board.
pub fn parse_square(text: &str) -> Option<usize> {
    match text.as_bytes() {
        &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => {
            Some(A1 + (f - b'a') as usize - 10 * (r - b'1') as usize)
        }
        _ => None,
    }
}

/// Algebraic name of a board cell on an unrotated board.
pub fn render_square(cell: usize) -> String {
    let rel = cell as isize - A1 as isize;
    let file = rel.rem_euclid(10) as u8;
    let rank = -rel.div_euclid(10) + 1;
    format!("{}{}", (b'a' + file) as char, rank)
}

/// Splits `e2e4` / `e7e8q` into cells of an unrotated board and the promotion.
pub fn parse_move_text(text: &str) -> Result<MailboxMove, MailboxError> {
    let bad = || MailboxError::MoveParse(text.to_string());
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(bad());
    }
    let from = parse_square(&text[0..2]).ok_or_else(bad)?;
    let to = parse_square(&text[2..4]).ok_or_else(bad)?;
    let promotion = match text[4..].chars().next() {
        Some(c) => Some(Promotion::from_letter(c).ok_or_else(bad)?),
        None => None,
    };
    Ok(MailboxMove {
        from,
        to,
        promotion,
    })
}

/// Renders a move on an unrotated board back to text.
pub fn render_move_text(mv: MailboxMove) -> String {
    let mut text = render_square(mv.from);
    text.push_str(&render_square(mv.to));
    if let Some(p) = mv.promotion {
        text.push(p.letter());
    }
    text
}

#[cfg(test)]
#[path = "square_tests.rs"]
mod square_tests;
