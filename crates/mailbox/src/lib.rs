//! Rotated Mailbox Board
//!
//! A padded 10×12 board stored as ASCII text. The side to move is always
//! uppercase and always plays "up" the board: after every move the board is
//! turned 180° and the letter case is swapped, so move generation only ever
//! has to know one direction of play.
//!
//! ```text
//!   0 -  9   padding
//!  10 - 19   padding
//!  20 - 29    rnbqkbnr      A8 = 21, H8 = 28
//!   ...
//!  90 - 99    RNBQKBNR      A1 = 91, H1 = 98
//! 100 -119   padding
//! ```
//!
//! Move generation is pseudo-legal. A move that leaves the king en prise is
//! answered by capturing it, and a board missing a king is how search sees
//! the game is over.

mod board;
mod error;
mod square;

pub use board::*;
pub use error::*;
pub use square::*;
