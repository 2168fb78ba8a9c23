//! Static evaluation of mailbox positions.

use mailbox::{MailboxMove, Position, ROTATE};

/// Score of a side whose king has been captured, negated for the captor.
pub const MATE: i32 = 50_000;

/// Material value in centipawns of a piece symbol in either case.
pub fn piece_value(symbol: u8) -> i32 {
    match symbol.to_ascii_uppercase() {
        b'P' => 100,
        b'N' => 320,
        b'B' => 330,
        b'R' => 500,
        b'Q' => 900,
        _ => 0,
    }
}

/// Placement bonus for an uppercase piece on `cell`, seen from its owner.
fn placement(piece: u8, cell: usize) -> i32 {
    let rank = 10 - (cell / 10) as i32; // 1..=8
    let file = (cell % 10) as i32; // 1..=8
    let centre = 7 - ((2 * file - 9).abs() + (2 * rank - 9).abs()) / 2;
    match piece {
        b'P' => (rank - 2) * 6 + centre,
        b'N' => centre * 6,
        b'B' => centre * 3,
        b'Q' => centre,
        b'K' => -(rank - 1) * 10,
        _ => 0,
    }
}

/// Evaluates the position from the side-to-move's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for side to move
/// - Negative = bad for side to move
pub fn evaluate(pos: &Position) -> i32 {
    let cells = pos.cells();
    let mut score = 0i32;
    for (cell, &c) in cells.iter().enumerate() {
        if c.is_ascii_uppercase() {
            score += piece_value(c) + placement(c, cell);
        } else if c.is_ascii_lowercase() {
            score -= piece_value(c) + placement(c.to_ascii_uppercase(), ROTATE - cell);
        }
    }
    score
}

/// Ordering key: captures by victim then attacker, promotions, then
/// placement gain.
pub fn move_value(pos: &Position, mv: MailboxMove) -> i32 {
    let cells = pos.cells();
    let attacker = cells[mv.from];
    let victim = cells[mv.to];
    let mut value = placement(attacker, mv.to) - placement(attacker, mv.from);
    if victim == b'k' {
        value += MATE;
    } else if victim.is_ascii_lowercase() {
        value += 10 * piece_value(victim) - piece_value(attacker) / 10;
    }
    if mv.promotion.is_some() {
        value += piece_value(b'Q');
    }
    value
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
