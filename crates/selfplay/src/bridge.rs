//! Move text to and from the rotated mailbox board.
//!
//! The mailbox board is turned around after every move, so while black is
//! to move its cells are the absolute cells rotated 180°. White's moves
//! pass through unchanged; black's go through `119 - cell` both ways.

use chess_core::Color;
use mailbox::{parse_move_text, render_move_text, MailboxError, MailboxMove};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Cells match the absolute board
    Absolute,
    /// Cells are the absolute board turned 180°
    Rotated,
}

impl Orientation {
    /// How the mailbox board is turned while `mover` is to move.
    pub fn for_mover(mover: Color) -> Self {
        match mover {
            Color::White => Orientation::Absolute,
            Color::Black => Orientation::Rotated,
        }
    }
}

/// Parses external move text into mailbox cells for the given orientation.
pub fn to_internal(orientation: Orientation, text: &str) -> Result<MailboxMove, MailboxError> {
    let mv = parse_move_text(text)?;
    Ok(match orientation {
        Orientation::Absolute => mv,
        Orientation::Rotated => mv.rotated(),
    })
}

/// Renders a mailbox move as external text. Inverse of [`to_internal`].
pub fn to_external(mv: MailboxMove, orientation: Orientation) -> String {
    render_move_text(match orientation {
        Orientation::Absolute => mv,
        Orientation::Rotated => mv.rotated(),
    })
}

/// A player's view of the conversion: it knows its own colour, so it can
/// read the opponent's moves and write its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateBridge {
    own: Color,
}

impl CoordinateBridge {
    pub fn new(own: Color) -> Self {
        Self { own }
    }

    pub fn own_color(&self) -> Color {
        self.own
    }

    /// Opponent move text in the mailbox cells it was played in.
    pub fn opponent_to_internal(&self, text: &str) -> Result<MailboxMove, MailboxError> {
        to_internal(Orientation::for_mover(self.own.other()), text)
    }

    /// Own mailbox move as external text.
    pub fn own_to_external(&self, mv: MailboxMove) -> String {
        to_external(mv, Orientation::for_mover(self.own))
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod bridge_tests;
