//! Chess rules for the self-play harness.
//!
//! Positions here use the absolute convention: a1 is square 0, h8 is square 63
//! and the side to move is an explicit flag. This is the board the game loop
//! referees with and the one interactive input is validated against.

pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod record;
pub mod rules;
pub mod time_control;
pub mod types;
pub mod uci;

pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use record::*;
pub use rules::*;
pub use time_control::*;
pub use types::*;
pub use uci::*;
